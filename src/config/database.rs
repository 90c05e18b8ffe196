//! Database configuration module.
//!
//! Handles `SQLite` connection setup and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs.

use crate::config::settings::Settings;
use crate::entities::Entry;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/fare_ledger.sqlite?mode=rwc";

/// Resolves the database URL.
///
/// `DATABASE_URL` from the environment wins, then the value from config.toml,
/// then a local `SQLite` file.
#[must_use]
pub fn get_database_url(settings: &Settings) -> String {
    resolve_database_url(std::env::var("DATABASE_URL").ok(), settings)
}

fn resolve_database_url(from_env: Option<String>, settings: &Settings) -> String {
    from_env
        .or_else(|| settings.database_url.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database described by the settings.
pub async fn create_connection(settings: &Settings) -> Result<DatabaseConnection> {
    let database_url = get_database_url(settings);
    tracing::debug!("Connecting to {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the entries table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let entry_table = schema
        .create_table_from_entity(Entry)
        .if_not_exists()
        .to_owned();

    db.execute(builder.build(&entry_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntryModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<EntryModel> = Entry::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[test]
    fn test_database_url_precedence() {
        let configured = Settings {
            database_url: Some("sqlite::memory:".to_string()),
            ..Settings::default()
        };
        let from_env = Some("sqlite://env.sqlite".to_string());

        assert_eq!(
            resolve_database_url(from_env.clone(), &configured),
            "sqlite://env.sqlite"
        );
        assert_eq!(
            resolve_database_url(from_env, &Settings::default()),
            "sqlite://env.sqlite"
        );
        assert_eq!(resolve_database_url(None, &configured), "sqlite::memory:");
        assert_eq!(
            resolve_database_url(None, &Settings::default()),
            DEFAULT_DATABASE_URL
        );
    }
}
