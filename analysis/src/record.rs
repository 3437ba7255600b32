use chrono::NaiveDateTime;
use common::{FightResult, MatchRecord, Side};

use crate::tokenizer::{self, Tokens};
use crate::{ParseError, SchemaError};

pub const TERRORIST_TOKEN: &str = "A";
pub const WIN_LABEL: &str = "Победа";
pub const LOSS_LABEL: &str = "Поражение";
/// First word of the two-word "did not take place" phrase.
pub const NO_RESULT_LABEL: &str = "Не";
pub const ERROR_LABEL: &str = "Ошибка";
pub const SPLIT_PREFIX: char = '(';

// Offsets relative to the anchor token.
const GAME_TYPE: core::ops::Range<usize> = 0..3;
const TEAM_SIZE: core::ops::Range<usize> = 4..7;
const MAP: usize = 7;
const SIDE: usize = 8;
const RESULT: usize = 9;
const KILLS_DEATHS: usize = 10;
const SKILL: usize = 11;
const SUFFIX: usize = 12;

#[derive(Debug)]
enum Stage<'l> {
    BeforeAnchor {
        line: &'l str,
    },
    CoreFields {
        tokens: Tokens<'l>,
        at: NaiveDateTime,
    },
    OptionalSuffix {
        tokens: Tokens<'l>,
        record: MatchRecord,
    },
    Done(MatchRecord),
}

impl<'l> Stage<'l> {
    fn step(self, now: NaiveDateTime) -> Result<Self, ParseError> {
        match self {
            Self::BeforeAnchor { line } => {
                let tokens = tokenizer::tokenize(line)?;
                let at = crate::datetime::resolve(tokens.date_span(), now)?;

                Ok(Self::CoreFields { tokens, at })
            }
            Self::CoreFields { tokens, at } => {
                let record = core_fields(&tokens, at)?;

                if record.result.is_decided() {
                    Ok(Self::OptionalSuffix { tokens, record })
                } else {
                    Ok(Self::Done(record))
                }
            }
            Self::OptionalSuffix { tokens, mut record } => {
                optional_suffix(&tokens, &mut record);
                Ok(Self::Done(record))
            }
            done @ Self::Done(_) => Ok(done),
        }
    }
}

/// Builds one record from one raw history line.
pub fn parse_line(line: &str, now: NaiveDateTime) -> Result<MatchRecord, ParseError> {
    let mut stage = Stage::BeforeAnchor { line };
    loop {
        stage = match stage.step(now)? {
            Stage::Done(record) => return Ok(record),
            next => next,
        };
    }
}

fn required<'l>(tokens: &Tokens<'l>, field: &'static str, offset: usize) -> Result<&'l str, SchemaError> {
    tokens.at(offset).ok_or(SchemaError::MissingField {
        field,
        index: tokens.anchor() + offset,
    })
}

fn required_span<'t, 'l>(
    tokens: &'t Tokens<'l>,
    field: &'static str,
    offsets: core::ops::Range<usize>,
) -> Result<&'t [&'l str], SchemaError> {
    let last = offsets.end - 1;
    tokens.span(offsets).ok_or(SchemaError::MissingField {
        field,
        index: tokens.anchor() + last,
    })
}

fn result_label(label: &str) -> Result<FightResult, SchemaError> {
    match label {
        NO_RESULT_LABEL => Ok(FightResult::NoResult),
        ERROR_LABEL => Ok(FightResult::ErrorResult),
        WIN_LABEL => Ok(FightResult::Win),
        LOSS_LABEL => Ok(FightResult::Loss),
        other => Err(SchemaError::UnknownResult(other.to_owned())),
    }
}

fn core_fields(tokens: &Tokens<'_>, at: NaiveDateTime) -> Result<MatchRecord, SchemaError> {
    let game_type = required_span(tokens, "game_type", GAME_TYPE)?.join(" ");
    let team_size = required_span(tokens, "team_size", TEAM_SIZE)?.concat();
    let map_name = required(tokens, "map_name", MAP)?.to_owned();
    let side = match required(tokens, "side", SIDE)? {
        TERRORIST_TOKEN => Side::Terrorist,
        _ => Side::CounterTerrorist,
    };
    let result = result_label(required(tokens, "result", RESULT)?)?;

    Ok(MatchRecord {
        fight_id: tokens.fight_id().to_owned(),
        date: at.date(),
        time: at.time(),
        game_type,
        team_size,
        map_name,
        side,
        result,
        kills: 0,
        deaths: 0,
        skill_delta: 0.0,
        split_marker: String::new(),
        experience_gained: String::new(),
    })
}

/// Trailing fields of a decided fight. Anything missing or malformed keeps
/// its zero/empty default.
fn optional_suffix(tokens: &Tokens<'_>, record: &mut MatchRecord) {
    match tokens.at(KILLS_DEATHS).map(|raw| (raw, kills_deaths(raw))) {
        Some((_, Some((kills, deaths)))) => {
            record.kills = kills;
            record.deaths = deaths;
        }
        Some((raw, None)) => {
            tracing::debug!(fight = %record.fight_id, raw, "Malformed kills/deaths");
        }
        None => {}
    };

    if let Some(raw) = tokens.at(SKILL) {
        match raw.parse::<f64>() {
            Ok(skill) if skill.is_finite() => record.skill_delta = skill,
            _ => tracing::debug!(fight = %record.fight_id, raw, "Malformed skill delta"),
        };
    }

    match tokens.at(SUFFIX) {
        Some(marker) if marker.starts_with(SPLIT_PREFIX) => {
            record.split_marker = marker.to_owned();
            record.experience_gained = tokens.at(SUFFIX + 1).unwrap_or_default().to_owned();
        }
        Some(experience) => {
            record.experience_gained = experience.to_owned();
        }
        None => {}
    };
}

fn kills_deaths(raw: &str) -> Option<(u32, u32)> {
    let (kills, deaths) = raw.split_once('/')?;
    Some((kills.parse().ok()?, deaths.parse().ok()?))
}
