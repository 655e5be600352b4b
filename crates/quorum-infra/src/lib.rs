//! # Quorum Infrastructure
//!
//! Concrete implementations of the ports defined in `quorum-core`: the
//! storage gateway and the record repositories built on it.
//!
//! ## Feature Flags
//!
//! - `sqlite` (default) - SeaORM gateway over SQLite
//! - `minimal` - Generic repositories only; supply your own `StorageGateway`

pub mod database;

pub use database::{DatabaseConfig, QuestionStore, RecordRepository};

#[cfg(feature = "sqlite")]
pub use database::SeaOrmGateway;
