//! Unified error type for the ledger.
//!
//! Storage failures are passed through untouched so callers see exactly what the
//! database reported.

use thiserror::Error;

/// Errors produced by the ledger, its store and its configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Error raised by the database layer, propagated as-is
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable is missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A stored entry carries a date that cannot be parsed
    #[error("Entry {entry_id} has an invalid date: '{value}'")]
    InvalidDate {
        /// Identifier of the offending entry
        entry_id: i64,
        /// The raw date value
        value: String,
    },

    /// Requested year or month does not describe a calendar period
    #[error("Invalid period: {period}")]
    InvalidPeriod {
        /// The requested period, e.g. `2024-13`
        period: String,
    },

    /// An entry amount is zero or not a finite number
    #[error("Invalid amount: {value}")]
    InvalidAmount {
        /// The rejected amount
        value: f64,
    },

    /// No entry with this id exists for the owner
    #[error("Entry {id} not found")]
    EntryNotFound {
        /// Identifier that was looked up
        id: i64,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
