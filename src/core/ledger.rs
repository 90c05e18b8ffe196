//! Ledger operations exposed to presentation code.
//!
//! Each function fetches the owner's entries through [`store`], classifies
//! them and runs the pure aggregation in [`summary`](crate::core::summary).
//! The database connection and settings are passed explicitly on every call.

use crate::{
    config::Settings,
    core::{
        entry::{DailyEntryAmounts, build_insert_rows},
        period::DateRange,
        store,
        summary::{DailySummary, MonthlySummary, YearlySummary, summarize_day, summarize_range},
        transaction::{Transaction, classify, classify_all},
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, TransactionTrait};

/// Summary of a single day for `owner_id`.
pub async fn get_daily_summary<C>(
    db: &C,
    settings: &Settings,
    owner_id: &str,
    date: NaiveDate,
) -> Result<DailySummary>
where
    C: ConnectionTrait,
{
    let locale = settings.locale()?;
    let rows = store::fetch_entries(db, owner_id, Some(DateRange::day(date))).await?;
    let transactions = classify_all(&rows, settings.date_fallback)?;
    Ok(summarize_day(date, transactions, locale))
}

/// Summary of a calendar month for `owner_id`, one daily summary per day.
///
/// # Errors
/// Returns [`Error::InvalidPeriod`](crate::errors::Error::InvalidPeriod) if
/// `month` is not in `1..=12`.
pub async fn get_monthly_summary<C>(
    db: &C,
    settings: &Settings,
    owner_id: &str,
    year: i32,
    month: u32,
) -> Result<MonthlySummary>
where
    C: ConnectionTrait,
{
    let locale = settings.locale()?;
    let range = DateRange::month(year, month)?;
    let rows = store::fetch_entries(db, owner_id, Some(range)).await?;
    let transactions = classify_all(&rows, settings.date_fallback)?;

    let summary = MonthlySummary::new(year, month, summarize_range(&range, transactions, locale));
    tracing::debug!(
        owner_id,
        year,
        month,
        total_income = summary.totals.total_income,
        total_expenses = summary.totals.total_expenses,
        "Built monthly summary"
    );
    Ok(summary)
}

/// Summary of a calendar year for `owner_id`, one daily summary per day.
pub async fn get_yearly_summary<C>(
    db: &C,
    settings: &Settings,
    owner_id: &str,
    year: i32,
) -> Result<YearlySummary>
where
    C: ConnectionTrait,
{
    let locale = settings.locale()?;
    let range = DateRange::year(year)?;
    let rows = store::fetch_entries(db, owner_id, Some(range)).await?;
    let transactions = classify_all(&rows, settings.date_fallback)?;

    let summary = YearlySummary::new(year, summarize_range(&range, transactions, locale));
    tracing::debug!(
        owner_id,
        year,
        total_income = summary.totals.total_income,
        total_expenses = summary.totals.total_expenses,
        "Built yearly summary"
    );
    Ok(summary)
}

/// Stores one day's form submission and returns the created transactions.
///
/// Callers are expected to check [`DailyEntryAmounts::has_any`] first; when
/// nothing usable was entered this returns an empty list without touching the
/// database. The rows are inserted atomically.
pub async fn create_daily_entries<C>(
    db: &C,
    settings: &Settings,
    owner_id: &str,
    date: NaiveDate,
    amounts: &DailyEntryAmounts,
    note: Option<&str>,
) -> Result<Vec<Transaction>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let rows = build_insert_rows(owner_id, date, amounts, note);
    if rows.is_empty() {
        tracing::debug!(owner_id, %date, "No amounts entered, nothing to store");
        return Ok(Vec::new());
    }

    let stored = store::insert_entries(db, rows).await?;
    classify_all(&stored, settings.date_fallback)
}

/// Replaces an existing entry. `amount` is signed: negative for expenses.
///
/// # Errors
/// Returns [`Error::InvalidAmount`] without touching the database when
/// `amount` is zero or not finite.
pub async fn update_entry<C>(
    db: &C,
    settings: &Settings,
    owner_id: &str,
    entry_id: i64,
    date: NaiveDate,
    amount: f64,
    category: Option<String>,
    note: Option<String>,
) -> Result<Transaction>
where
    C: ConnectionTrait + TransactionTrait,
{
    if !amount.is_finite() || amount == 0.0 {
        return Err(Error::InvalidAmount { value: amount });
    }

    let updated = store::update_entry(db, owner_id, entry_id, date, amount, category, note).await?;
    classify(&updated, settings.date_fallback)
}

/// Deletes one of the owner's entries.
pub async fn delete_entry<C>(db: &C, owner_id: &str, entry_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    store::delete_entry(db, owner_id, entry_id).await
}

/// Every transaction the owner has recorded, oldest first.
pub async fn get_all_transactions<C>(
    db: &C,
    settings: &Settings,
    owner_id: &str,
) -> Result<Vec<Transaction>>
where
    C: ConnectionTrait,
{
    let rows = store::fetch_entries(db, owner_id, None).await?;
    classify_all(&rows, settings.date_fallback)
}
