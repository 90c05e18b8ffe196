//! Entry storage - reads and writes ledger rows through `SeaORM`.
//!
//! Every query is scoped by owner. Database errors are returned unchanged; there
//! are no retries and no local recovery.

use crate::{
    core::{entry::NewEntry, period::DateRange},
    entities::{Entry, entry},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Retrieves an owner's entries, optionally restricted to a date range.
///
/// Rows come back ordered by entry date, then id. Dates are stored as text, so
/// the upper bound is the start of the following day; timestamps stored on
/// the last day of the range are still included.
pub async fn fetch_entries<C>(
    db: &C,
    owner_id: &str,
    range: Option<DateRange>,
) -> Result<Vec<entry::Model>>
where
    C: ConnectionTrait,
{
    let mut query = Entry::find().filter(entry::Column::UserId.eq(owner_id));

    if let Some(range) = range {
        query = query.filter(entry::Column::EntryDate.gte(date_key(range.start)));
        query = match range.end.succ_opt() {
            Some(next) => query.filter(entry::Column::EntryDate.lt(date_key(next))),
            None => query.filter(entry::Column::EntryDate.lte(date_key(range.end))),
        };
    }

    let rows = query
        .order_by_asc(entry::Column::EntryDate)
        .order_by_asc(entry::Column::Id)
        .all(db)
        .await?;

    tracing::debug!(owner_id, count = rows.len(), "Fetched entries");
    Ok(rows)
}

/// Retrieves a single entry belonging to `owner_id`.
pub async fn find_entry<C>(db: &C, owner_id: &str, entry_id: i64) -> Result<Option<entry::Model>>
where
    C: ConnectionTrait,
{
    Entry::find_by_id(entry_id)
        .filter(entry::Column::UserId.eq(owner_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts rows atomically: either every row is stored or none is.
pub async fn insert_entries<C>(db: &C, rows: Vec<NewEntry>) -> Result<Vec<entry::Model>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let now = Utc::now();
    let mut inserted = Vec::with_capacity(rows.len());

    for row in rows {
        let model = entry::ActiveModel {
            user_id: Set(row.user_id),
            entry_date: Set(date_key(row.entry_date)),
            amount: Set(row.amount),
            category: Set(Some(row.category)),
            note: Set(row.note),
            created_at: Set(now),
            ..Default::default()
        };
        inserted.push(model.insert(&txn).await?);
    }

    txn.commit().await?;

    tracing::info!(count = inserted.len(), "Inserted entries");
    Ok(inserted)
}

/// Replaces the date, amount, category and note of an existing entry.
pub async fn update_entry<C>(
    db: &C,
    owner_id: &str,
    entry_id: i64,
    entry_date: NaiveDate,
    amount: f64,
    category: Option<String>,
    note: Option<String>,
) -> Result<entry::Model>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let existing = find_entry(&txn, owner_id, entry_id)
        .await?
        .ok_or(Error::EntryNotFound { id: entry_id })?;

    let mut active_model: entry::ActiveModel = existing.into();
    active_model.entry_date = Set(date_key(entry_date));
    active_model.amount = Set(amount);
    active_model.category = Set(category);
    active_model.note = Set(note);
    let updated = active_model.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(owner_id, entry_id, "Updated entry");
    Ok(updated)
}

/// Deletes an entry belonging to `owner_id`.
///
/// Returns [`Error::EntryNotFound`] when no such entry exists for the owner.
pub async fn delete_entry<C>(db: &C, owner_id: &str, entry_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Entry::delete_many()
        .filter(entry::Column::UserId.eq(owner_id))
        .filter(entry::Column::Id.eq(entry_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::EntryNotFound { id: entry_id });
    }

    tracing::info!(owner_id, entry_id, "Deleted entry");
    Ok(())
}
