//! Entity module - SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod entry;

pub use entry::{Column as EntryColumn, Entity as Entry, Model as EntryModel};
