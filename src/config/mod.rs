/// Database connection and table creation
pub mod database;

/// Application settings loaded from config.toml
pub mod settings;

pub use settings::{DateFallback, Settings};
