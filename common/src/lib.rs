pub mod stats;
pub use stats::{GroupKey, GroupStat, KeyPart, SummaryKind, SummaryRow, TimelinePoint};

/// One fight as it appeared in a player's history.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchRecord {
    pub fight_id: String,
    pub date: chrono::NaiveDate,
    pub time: chrono::NaiveTime,
    pub game_type: String,
    pub team_size: String,
    pub map_name: String,
    pub side: Side,
    pub result: FightResult,
    pub kills: u32,
    pub deaths: u32,
    pub skill_delta: f64,
    /// Non-empty when the skill change was split between several outcomes.
    pub split_marker: String,
    /// Kept verbatim, the source is not consistent about this being a number.
    pub experience_gained: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Terrorist,
    CounterTerrorist,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Terrorist => "T",
            Self::CounterTerrorist => "CT",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "T" => Some(Self::Terrorist),
            "CT" => Some(Self::CounterTerrorist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FightResult {
    Win,
    Loss,
    NoResult,
    ErrorResult,
}

impl FightResult {
    pub const ALL: [FightResult; 4] = [Self::Win, Self::Loss, Self::NoResult, Self::ErrorResult];

    /// Only decided fights carry kills, deaths and a skill change.
    pub fn is_decided(&self) -> bool {
        match self {
            Self::Win | Self::Loss => true,
            Self::NoResult | Self::ErrorResult => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::NoResult => "NoResult",
            Self::ErrorResult => "ErrorResult",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}
