use chrono::{Datelike, Utc};
use dotenvy::dotenv;
use fare_ledger::{
    config::{database, settings},
    core::{ledger, report},
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load settings from config.toml (defaults if absent)
    let settings = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Connect and make sure the entries table exists
    let db = database::create_connection(&settings)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Resolve whose month to report on
    let owner_id = env::var("LEDGER_OWNER_ID")
        .inspect_err(|e| error!("LEDGER_OWNER_ID not set: {}", e))
        .map_err(Error::EnvVar)?;
    let today = Utc::now().date_naive();
    let year = parse_env("LEDGER_YEAR")?.unwrap_or(today.year());
    let month = parse_env("LEDGER_MONTH")?.unwrap_or(today.month());

    // 6. Build and print the report
    let summary = ledger::get_monthly_summary(&db, &settings, &owner_id, year, month).await?;
    info!(
        owner_id = %owner_id,
        year,
        month,
        active_days = summary.days_with_activity().count(),
        "Monthly summary ready"
    );
    println!("{}", report::format_month_report(&summary, &settings)?);
    for line in report::format_method_shares(&summary.totals) {
        println!("{line}");
    }

    Ok(())
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| Error::Config {
            message: format!("{name} is not a valid number: '{value}'"),
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::EnvVar(e)),
    }
}
