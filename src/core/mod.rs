//! Core business logic - framework-agnostic ledger operations.
//!
//! The aggregation engine ([`method`], [`transaction`], [`period`], [`summary`],
//! [`entry`]) is pure and synchronous. [`store`] talks to the database and
//! [`ledger`] combines both into the operations presentation code calls.

/// Daily form amounts and the rows they produce
pub mod entry;
/// Summary, create, update and delete operations for an owner
pub mod ledger;
/// Payment methods and per-method totals
pub mod method;
/// Calendar day, month and year ranges
pub mod period;
/// Plain-text report formatting
pub mod report;
/// Entry persistence
pub mod store;
/// Daily, monthly and yearly aggregation
pub mod summary;
/// Classification of stored entries
pub mod transaction;
