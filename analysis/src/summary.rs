use common::{FightResult, SummaryKind, SummaryRow};

use crate::Fight;

/// A split outcome only records a third of its real skill change.
pub const SPLIT_MULTIPLIER: f64 = 3.0;

/// Per-result totals over every fight, followed by the scaled split
/// outcomes. Always six rows in the same order.
pub fn summarize(fights: &[Fight]) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = FightResult::ALL
        .into_iter()
        .map(|result| SummaryRow {
            kind: SummaryKind::Result(result),
            fight_count: 0,
            skill_sum: 0.0,
        })
        .collect();
    let mut negative = SummaryRow {
        kind: SummaryKind::SplitNegative,
        fight_count: 0,
        skill_sum: 0.0,
    };
    let mut positive = SummaryRow {
        kind: SummaryKind::SplitPositive,
        fight_count: 0,
        skill_sum: 0.0,
    };

    for record in fights.iter().map(|f| &f.record) {
        let idx = match record.result {
            FightResult::Win => 0,
            FightResult::Loss => 1,
            FightResult::NoResult => 2,
            FightResult::ErrorResult => 3,
        };
        rows[idx].fight_count += 1;
        rows[idx].skill_sum += record.skill_delta;

        if record.split_marker.is_empty() {
            continue;
        }

        let split = if record.skill_delta > 0.0 {
            &mut positive
        } else {
            &mut negative
        };
        split.fight_count += 1;
        split.skill_sum += record.skill_delta * SPLIT_MULTIPLIER;
    }

    rows.push(negative);
    rows.push(positive);
    rows
}
