use std::collections::HashMap;

use analysis::RecordSet;
use common::MatchRecord;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};

use crate::models::FightRow;
use crate::schema::fights;

pub const MIGRATIONS: EmbeddedMigrations = diesel_migrations::embed_migrations!("../migrations/");

/// Rows per INSERT statement, keeps well below SQLite's bind parameter limit.
const INSERT_CHUNK: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("connecting to database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("running migrations: {0}")]
    Migration(String),
    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),
    #[error("corrupt row {ordinal} for {player:?}: {reason}")]
    Corrupt {
        player: String,
        ordinal: i64,
        reason: String,
    },
}

/// Keyed store of a player's fights.
///
/// `store` replaces everything previously kept for that player, `load` returns
/// a set equal to the one stored (dropped lines are not kept).
pub trait FightStorage {
    fn store(&mut self, player: &str, set: &RecordSet) -> Result<(), StoreError>;

    fn load(&mut self, player: &str) -> Result<RecordSet, StoreError>;
}

/// Records in page order, the order [`RecordSet::assemble`] expects.
fn page_order(set: &RecordSet) -> impl Iterator<Item = &MatchRecord> + '_ {
    set.fights().iter().rev().map(|f| &f.record)
}

pub struct SqliteStorage {
    connection: SqliteConnection,
}

impl SqliteStorage {
    #[tracing::instrument]
    pub fn open(url: &str) -> Result<Self, StoreError> {
        let mut connection = SqliteConnection::establish(url)?;

        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        tracing::debug!("Applied {} migrations", applied.len());

        Ok(Self { connection })
    }
}

impl FightStorage for SqliteStorage {
    #[tracing::instrument(skip(self, set), fields(fights = set.len()))]
    fn store(&mut self, player: &str, set: &RecordSet) -> Result<(), StoreError> {
        let rows: Vec<FightRow> = (0_i64..)
            .zip(page_order(set))
            .map(|(ordinal, record)| FightRow::new(player, ordinal, record))
            .collect();

        self.connection.transaction::<_, StoreError, _>(|conn| {
            let removed = diesel::delete(fights::table.filter(fights::player.eq(player)))
                .execute(conn)?;
            tracing::debug!("Removed {} previous rows", removed);

            for chunk in rows.chunks(INSERT_CHUNK) {
                diesel::insert_into(fights::table)
                    .values(chunk)
                    .execute(conn)?;
            }

            Ok(())
        })?;

        tracing::info!("Stored {} fights", rows.len());
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn load(&mut self, player: &str) -> Result<RecordSet, StoreError> {
        let rows = fights::table
            .filter(fights::player.eq(player))
            .order(fights::ordinal.asc())
            .select(FightRow::as_select())
            .load(&mut self.connection)?;

        let records = rows
            .into_iter()
            .map(FightRow::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Loaded {} fights", records.len());

        Ok(RecordSet::assemble(records, Vec::new()))
    }
}

/// Keeps everything in memory, nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    players: HashMap<String, Vec<MatchRecord>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FightStorage for MemoryStorage {
    fn store(&mut self, player: &str, set: &RecordSet) -> Result<(), StoreError> {
        self.players
            .insert(player.to_owned(), page_order(set).cloned().collect());
        Ok(())
    }

    fn load(&mut self, player: &str) -> Result<RecordSet, StoreError> {
        let records = self.players.get(player).cloned().unwrap_or_default();
        Ok(RecordSet::assemble(records, Vec::new()))
    }
}
