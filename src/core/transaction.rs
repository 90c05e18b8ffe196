//! Transaction classification - turns stored entries into typed transactions.
//!
//! A stored entry only carries a signed amount and a free-text category. This
//! module derives whether it is income or an expense, which payment method it
//! came through, and which calendar day it belongs to.

use crate::{
    config::DateFallback,
    core::method::PaymentMethod,
    entities::entry,
    errors::{Error, Result},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Label given to expenses stored without a category.
pub const DEFAULT_EXPENSE_CATEGORY: &str = "general";

/// Direction of a transaction, derived from the sign of the stored amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received (stored amount `>= 0`)
    Income,
    /// Money spent (stored amount `< 0`)
    Expense,
}

/// A classified ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Identifier of the stored entry
    pub id: i64,
    /// Owner of the entry
    pub owner_id: String,
    /// Income or expense
    pub kind: TransactionKind,
    /// Magnitude of the amount, never negative
    pub amount: f64,
    /// Payment method, only for income entries tagged with one
    pub method: Option<PaymentMethod>,
    /// Expense label, only for expense entries
    pub category: Option<String>,
    /// Calendar day the entry counts towards
    pub date: NaiveDate,
    /// Optional annotation
    pub note: Option<String>,
}

impl Transaction {
    /// Whether this is an income transaction.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Classifies a stored entry.
///
/// - `amount >= 0` is income, anything below zero an expense. Zero counts as income.
/// - The method is only inferred for income entries.
/// - A blank `entry_date` falls back to the creation date; a malformed one is
///   handled according to `fallback`.
///
/// # Errors
/// Returns [`Error::InvalidDate`] when the entry date is malformed and the
/// fallback policy is [`DateFallback::Reject`].
pub fn classify(row: &entry::Model, fallback: DateFallback) -> Result<Transaction> {
    let signed = if row.amount.is_finite() {
        row.amount
    } else {
        tracing::warn!(entry_id = row.id, "Entry has a non-finite amount, counting it as zero");
        0.0
    };

    let kind = if signed >= 0.0 {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    let method = match kind {
        TransactionKind::Income => row.category.as_deref().and_then(PaymentMethod::from_category),
        TransactionKind::Expense => None,
    };

    let category = match kind {
        TransactionKind::Income => None,
        TransactionKind::Expense => Some(
            row.category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_EXPENSE_CATEGORY)
                .to_string(),
        ),
    };

    Ok(Transaction {
        id: row.id,
        owner_id: row.user_id.clone(),
        kind,
        amount: signed.abs(),
        method,
        category,
        date: resolve_date(row, fallback)?,
        note: row.note.clone(),
    })
}

/// Classifies a batch of entries, failing on the first unusable one.
pub fn classify_all(rows: &[entry::Model], fallback: DateFallback) -> Result<Vec<Transaction>> {
    rows.iter().map(|row| classify(row, fallback)).collect()
}

fn resolve_date(row: &entry::Model, fallback: DateFallback) -> Result<NaiveDate> {
    let raw = row.entry_date.trim();
    if raw.is_empty() {
        return Ok(row.created_at.date_naive());
    }

    if let Some(date) = parse_entry_date(raw) {
        return Ok(date);
    }

    match fallback {
        DateFallback::Reject => Err(Error::InvalidDate {
            entry_id: row.id,
            value: row.entry_date.clone(),
        }),
        DateFallback::Today => {
            tracing::warn!(
                entry_id = row.id,
                entry_date = %row.entry_date,
                "Malformed entry date, using today"
            );
            Ok(Utc::now().date_naive())
        }
    }
}

/// Parses a stored entry date: either `YYYY-MM-DD` or an RFC 3339 timestamp.
#[must_use]
pub fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.date_naive())
    })
}
