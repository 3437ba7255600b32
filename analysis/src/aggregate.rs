use chrono::{Datelike, Timelike};
use common::{FightResult, GroupKey, GroupStat, KeyPart, MatchRecord};

use crate::Fight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Dimension {
    Map,
    Side,
    Size,
    Date,
    Year,
    Month,
    Weekday,
    Hour,
}

impl Dimension {
    pub fn key(&self, fight: &Fight) -> KeyPart {
        let record = &fight.record;
        match self {
            Self::Map => KeyPart::Text(record.map_name.clone()),
            Self::Side => KeyPart::Text(record.side.label().to_owned()),
            Self::Size => KeyPart::Text(record.team_size.clone()),
            Self::Date => KeyPart::Date(record.date),
            Self::Year => KeyPart::Number(i64::from(record.date.year())),
            Self::Month => KeyPart::Number(i64::from(record.date.month())),
            Self::Weekday => KeyPart::Number(i64::from(fight.weekday)),
            Self::Hour => KeyPart::Number(i64::from(record.time.hour())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Grouping {
    Single(Dimension),
    Pair(Dimension, Dimension),
}

impl Grouping {
    pub fn key(&self, fight: &Fight) -> GroupKey {
        match self {
            Self::Single(dim) => GroupKey {
                first: dim.key(fight),
                second: None,
            },
            Self::Pair(first, second) => GroupKey {
                first: first.key(fight),
                second: Some(second.key(fight)),
            },
        }
    }
}

impl From<Dimension> for Grouping {
    fn from(value: Dimension) -> Self {
        Self::Single(value)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Aggregation {
    Groups(Vec<GroupStat>),
    /// Fewer than two distinct groups, nothing worth comparing.
    InsufficientData { distinct_groups: usize },
}

impl Aggregation {
    pub fn groups(&self) -> Option<&[GroupStat]> {
        match self {
            Self::Groups(groups) => Some(groups.as_slice()),
            Self::InsufficientData { .. } => None,
        }
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    fights: usize,
    skill: f64,
    kills: u64,
    deaths: u64,
    wins: usize,
    losses: usize,
}

impl Accumulator {
    fn add(&mut self, record: &MatchRecord) {
        self.fights += 1;
        self.skill += record.skill_delta;
        self.kills += u64::from(record.kills);
        self.deaths += u64::from(record.deaths);

        match record.result {
            FightResult::Win => self.wins += 1,
            FightResult::Loss => self.losses += 1,
            FightResult::NoResult | FightResult::ErrorResult => {}
        };
    }

    fn finish(self, key: GroupKey) -> GroupStat {
        GroupStat {
            key,
            fight_count: self.fights,
            skill_sum: self.skill,
            avg_skill: self.skill / self.fights as f64,
            kill_sum: self.kills,
            death_sum: self.deaths,
            win_count: self.wins,
            loss_count: self.losses,
        }
    }
}

/// Groups the decided fights (wins and losses) by `grouping`, ordered by key.
pub fn aggregate(fights: &[Fight], grouping: Grouping) -> Aggregation {
    let mut groups = std::collections::BTreeMap::<GroupKey, Accumulator>::new();

    for fight in fights.iter().filter(|f| f.record.result.is_decided()) {
        groups.entry(grouping.key(fight)).or_default().add(&fight.record);
    }

    if groups.len() < 2 {
        tracing::debug!(?grouping, "Only {} distinct groups", groups.len());
        return Aggregation::InsufficientData {
            distinct_groups: groups.len(),
        };
    }

    Aggregation::Groups(
        groups
            .into_iter()
            .map(|(key, acc)| acc.finish(key))
            .collect(),
    )
}
