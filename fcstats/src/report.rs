use analysis::aggregate::{self, Aggregation, Dimension, Grouping};
use analysis::{summary, timeline, RecordSet};
use common::{GroupStat, SummaryRow, TimelinePoint};

/// Every chart view a report can contain, in output order.
pub static VIEWS: [(&str, Grouping); 10] = [
    ("Skill-Maps", Grouping::Single(Dimension::Map)),
    ("Skill-Sizes", Grouping::Single(Dimension::Size)),
    ("Skill-Sides", Grouping::Single(Dimension::Side)),
    ("Skill-Dates", Grouping::Single(Dimension::Date)),
    ("Skill-Years", Grouping::Single(Dimension::Year)),
    ("Skill-Months", Grouping::Single(Dimension::Month)),
    ("Skill-DaysOfWeek", Grouping::Single(Dimension::Weekday)),
    ("Skill-Hours", Grouping::Single(Dimension::Hour)),
    ("Map-Side", Grouping::Pair(Dimension::Map, Dimension::Side)),
    ("Years-Month", Grouping::Pair(Dimension::Year, Dimension::Month)),
];

const FORBIDDEN: &[char] = &['/', '\\', ':', '*', '?', '«', '<', '>', '|', '"'];

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct View {
    pub title: &'static str,
    pub grouping: Grouping,
    pub groups: Vec<GroupStat>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    pub player: String,
    pub fights: usize,
    pub dropped: usize,
    pub timeline: Vec<TimelinePoint>,
    pub views: Vec<View>,
    pub summary: Vec<SummaryRow>,
}

#[tracing::instrument(skip(set), fields(fights = set.len()))]
pub fn build(player: &str, set: &RecordSet) -> Report {
    let views = VIEWS
        .iter()
        .filter_map(|(title, grouping)| {
            match aggregate::aggregate(set.fights(), *grouping) {
                Aggregation::Groups(groups) => Some(View {
                    title: *title,
                    grouping: *grouping,
                    groups,
                }),
                Aggregation::InsufficientData { distinct_groups } => {
                    tracing::debug!(title, distinct_groups, "Skipping view");
                    None
                }
            }
        })
        .collect();

    Report {
        player: player.to_owned(),
        fights: set.len(),
        dropped: set.dropped_count(),
        timeline: timeline::timeline(set.fights()),
        views,
        summary: summary::summarize(set.fights()),
    }
}

/// Fight and dropped-line counts followed by one line per dropped input line.
pub fn parse_listing(set: &RecordSet) -> String {
    let mut listing = format!("{} fights, {} dropped lines\n", set.len(), set.dropped_count());
    for dropped in set.dropped() {
        listing.push_str(&format!("line {}: {}\n", dropped.line, dropped.error));
    }
    listing
}

/// Player name with characters that are not allowed in file names replaced.
pub fn sanitize(player: &str) -> String {
    player.replace(FORBIDDEN, "_")
}

pub fn output_file_name(player: &str) -> String {
    format!("Fights_{}.json", sanitize(player))
}
