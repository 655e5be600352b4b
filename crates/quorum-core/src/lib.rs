//! # Quorum Core
//!
//! The domain layer of the Quorum Q&A data-access layer.
//! Records, their static schema descriptors and the ports that storage
//! backends implement. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod record;

pub use error::RepoError;
pub use record::{Column, ColumnKind, Record, RecordId, Row, Schema, Value};
