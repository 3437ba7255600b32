use diesel::prelude::*;

use common::{FightResult, MatchRecord, Side};

use crate::storage::StoreError;

/// One stored fight. `ordinal` is the position in page order, newest first.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::fights)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FightRow {
    pub player: String,
    pub ordinal: i64,
    pub fight_id: String,
    pub fight_date: chrono::NaiveDate,
    pub fight_time: chrono::NaiveTime,
    pub game_type: String,
    pub team_size: String,
    pub map_name: String,
    pub side: String,
    pub result: String,
    pub kills: i64,
    pub deaths: i64,
    pub skill_delta: f64,
    pub split_marker: String,
    pub experience: String,
}

impl FightRow {
    pub fn new(player: &str, ordinal: i64, record: &MatchRecord) -> Self {
        Self {
            player: player.to_owned(),
            ordinal,
            fight_id: record.fight_id.clone(),
            fight_date: record.date,
            fight_time: record.time,
            game_type: record.game_type.clone(),
            team_size: record.team_size.clone(),
            map_name: record.map_name.clone(),
            side: record.side.label().to_owned(),
            result: record.result.label().to_owned(),
            kills: i64::from(record.kills),
            deaths: i64::from(record.deaths),
            skill_delta: record.skill_delta,
            split_marker: record.split_marker.clone(),
            experience: record.experience_gained.clone(),
        }
    }

    pub fn into_record(self) -> Result<MatchRecord, StoreError> {
        let corrupt = |reason: String| StoreError::Corrupt {
            player: self.player.clone(),
            ordinal: self.ordinal,
            reason,
        };

        let side = Side::from_label(&self.side)
            .ok_or_else(|| corrupt(format!("unknown side {:?}", self.side)))?;
        let result = FightResult::from_label(&self.result)
            .ok_or_else(|| corrupt(format!("unknown result {:?}", self.result)))?;
        let kills = u32::try_from(self.kills)
            .map_err(|_| corrupt(format!("kills out of range: {}", self.kills)))?;
        let deaths = u32::try_from(self.deaths)
            .map_err(|_| corrupt(format!("deaths out of range: {}", self.deaths)))?;

        Ok(MatchRecord {
            fight_id: self.fight_id,
            date: self.fight_date,
            time: self.fight_time,
            game_type: self.game_type,
            team_size: self.team_size,
            map_name: self.map_name,
            side,
            result,
            kills,
            deaths,
            skill_delta: self.skill_delta,
            split_marker: self.split_marker,
            experience_gained: self.experience,
        })
    }
}
