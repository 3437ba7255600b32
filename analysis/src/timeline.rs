use common::TimelinePoint;

use crate::Fight;

pub const FIGHT_DETAIL_URL: &str = "https://old.fastcup.net/fight.html?id=";

pub fn detail_url(fight_id: &str) -> String {
    format!(
        "{}{}",
        FIGHT_DETAIL_URL,
        fight_id.strip_prefix('#').unwrap_or(fight_id)
    )
}

/// Skill change of every decided fight, numbered from 1 in set order.
pub fn timeline(fights: &[Fight]) -> Vec<TimelinePoint> {
    fights
        .iter()
        .map(|f| &f.record)
        .filter(|r| r.result.is_decided())
        .enumerate()
        .map(|(idx, r)| TimelinePoint {
            number: idx + 1,
            fight_id: r.fight_id.clone(),
            skill_delta: r.skill_delta,
            kills: r.kills,
            deaths: r.deaths,
            kd_difference: i64::from(r.kills) - i64::from(r.deaths),
            map_name: r.map_name.clone(),
            team_size: r.team_size.clone(),
            detail_url: detail_url(&r.fight_id),
        })
        .collect()
}
