//! The record abstraction shared by every entity type.

mod row;
mod schema;

pub use row::{Row, Value};
pub use schema::{Column, ColumnKind, Schema};

use crate::error::RepoError;

/// Store-generated row identifier.
pub type RecordId = i64;

/// An in-memory object representing one row of a table.
///
/// Implementors declare their [`Schema`] and convert to and from rows; the
/// generic finders and `save` are written once against this trait.
pub trait Record: Clone + Send + Sync + 'static {
    const SCHEMA: Schema;

    /// `None` until the record is first saved.
    fn id(&self) -> Option<RecordId>;

    fn set_id(&mut self, id: RecordId);

    /// Build a record from a row carrying every column of [`Self::SCHEMA`].
    fn from_row(row: &Row) -> Result<Self, RepoError>;

    /// Current values of `SCHEMA.fields`, in the same order.
    fn field_values(&self) -> Vec<Value>;
}
