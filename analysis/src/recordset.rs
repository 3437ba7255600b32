use chrono::{Datelike, NaiveDateTime};
use common::MatchRecord;

use crate::{DropReason, ParseError};

/// A record together with the fields derived at assembly.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Fight {
    pub record: MatchRecord,
    /// ISO weekday, Monday = 1.
    pub weekday: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DroppedLine {
    /// 1-based line number in the input text.
    pub line: usize,
    pub error: ParseError,
}

impl DroppedLine {
    pub fn reason(&self) -> DropReason {
        self.error.reason()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    fights: Vec<Fight>,
    dropped: Vec<DroppedLine>,
}

impl RecordSet {
    /// `scraped` is in page order, newest fight first.
    pub fn assemble(scraped: Vec<MatchRecord>, dropped: Vec<DroppedLine>) -> Self {
        let mut fights: Vec<Fight> = scraped
            .into_iter()
            .rev()
            .map(|record| Fight {
                weekday: record.date.weekday().number_from_monday(),
                record,
            })
            .collect();
        fights.sort_by_key(|f| f.record.date);

        Self { fights, dropped }
    }

    pub fn fights(&self) -> &[Fight] {
        &self.fights
    }

    pub fn records(&self) -> impl Iterator<Item = &MatchRecord> + '_ {
        self.fights.iter().map(|f| &f.record)
    }

    pub fn len(&self) -> usize {
        self.fights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fights.is_empty()
    }

    pub fn dropped(&self) -> &[DroppedLine] {
        &self.dropped
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    pub fn dropped_by(&self, reason: DropReason) -> usize {
        self.dropped.iter().filter(|d| d.reason() == reason).count()
    }
}

/// Parses a whole block of history text, one fight per non-blank line.
///
/// Lines that cannot be parsed are kept as [`DroppedLine`]s, they never stop
/// the rest of the block from being processed.
#[tracing::instrument(skip(text))]
pub fn parse(text: &str, now: NaiveDateTime) -> RecordSet {
    let mut scraped = Vec::new();
    let mut dropped = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match crate::record::parse_line(line, now) {
            Ok(record) => scraped.push(record),
            Err(error) => {
                tracing::warn!(line = idx + 1, reason = ?error.reason(), "Dropping line: {}", error);
                dropped.push(DroppedLine {
                    line: idx + 1,
                    error,
                });
            }
        };
    }

    tracing::info!("Parsed {} fights, dropped {} lines", scraped.len(), dropped.len());

    RecordSet::assemble(scraped, dropped)
}
