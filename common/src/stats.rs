#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum KeyPart {
    Number(i64),
    Date(chrono::NaiveDate),
    Text(String),
}

impl core::fmt::Display for KeyPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Text(t) => write!(f, "{}", t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct GroupKey {
    pub first: KeyPart,
    pub second: Option<KeyPart>,
}

impl core::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.second {
            Some(second) => write!(f, "{} / {}", self.first, second),
            None => write!(f, "{}", self.first),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GroupStat {
    pub key: GroupKey,
    pub fight_count: usize,
    pub skill_sum: f64,
    pub avg_skill: f64,
    pub kill_sum: u64,
    pub death_sum: u64,
    pub win_count: usize,
    pub loss_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SummaryKind {
    Result(crate::FightResult),
    SplitNegative,
    SplitPositive,
}

impl SummaryKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Result(r) => r.label(),
            Self::SplitNegative => "split-negative",
            Self::SplitPositive => "split-positive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SummaryRow {
    pub kind: SummaryKind,
    pub fight_count: usize,
    pub skill_sum: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TimelinePoint {
    pub number: usize,
    pub fight_id: String,
    pub skill_delta: f64,
    pub kills: u32,
    pub deaths: u32,
    pub kd_difference: i64,
    pub map_name: String,
    pub team_size: String,
    pub detail_url: String,
}
