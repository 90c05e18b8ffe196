//! Entry entity - One signed ledger row as it is stored.
//!
//! Income rows hold a positive `amount` and a payment method tag in `category`;
//! expense rows hold a negative `amount` and a free label. The calendar day the
//! entry counts towards lives in `entry_date`, separate from `created_at`.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ledger entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    /// Unique identifier assigned by the database
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owner of the entry; every query is scoped by it
    pub user_id: String,
    /// Calendar day of the entry, `YYYY-MM-DD`
    pub entry_date: String,
    /// Signed amount (positive for income, negative for expenses)
    pub amount: f64,
    /// Payment method tag (`card`, `cash`, `app`) or expense label
    pub category: Option<String>,
    /// Optional free-text annotation
    pub note: Option<String>,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Entries have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
