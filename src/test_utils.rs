//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases and building rows with sensible
//! defaults.
#![allow(clippy::unwrap_used)]

use crate::{
    config::Settings,
    core::{entry::NewEntry, store},
    entities::entry,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Default settings: Spanish weekday names, malformed dates rejected.
#[must_use]
pub fn test_settings() -> Settings {
    Settings::default()
}

/// Builds a row to insert.
///
/// # Defaults
/// * `note`: None
#[must_use]
pub fn new_entry(
    owner_id: &str,
    year: i32,
    month: u32,
    day: u32,
    amount: f64,
    category: &str,
) -> NewEntry {
    NewEntry {
        user_id: owner_id.to_string(),
        entry_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        amount,
        category: category.to_string(),
        note: None,
    }
}

/// Stores the March 2024 scenario for `owner_id`: 50 cash and a 20 fuel
/// expense on the 1st, 30 card on the 2nd.
pub async fn seed_march_scenario(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<entry::Model>> {
    store::insert_entries(
        db,
        vec![
            new_entry(owner_id, 2024, 3, 1, 50.0, "cash"),
            new_entry(owner_id, 2024, 3, 1, -20.0, "fuel"),
            new_entry(owner_id, 2024, 3, 2, 30.0, "card"),
        ],
    )
    .await
}
