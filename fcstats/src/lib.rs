pub mod models;
pub mod report;
pub mod schema;
pub mod storage;

pub const DEFAULT_DATABASE: &str = "fcstats.db";

/// Explicit location first, then `DATABASE_URL`, then [`DEFAULT_DATABASE`].
pub fn database_url(explicit: Option<&str>) -> String {
    match explicit {
        Some(url) => url.to_owned(),
        None => std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE.to_owned()),
    }
}

pub fn db_connection(explicit: Option<&str>) -> Result<storage::SqliteStorage, storage::StoreError> {
    let database_url = database_url(explicit);
    storage::SqliteStorage::open(&database_url)
}
