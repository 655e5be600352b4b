use async_trait::async_trait;

use crate::error::RepoError;
use crate::record::{Column, RecordId, Row, Value};

/// Outcome of a write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecOutcome {
    pub rows_affected: u64,
    /// Identifier generated by this statement, set for inserts only.
    pub last_insert_id: Option<RecordId>,
}

/// Storage gateway - the narrow interface to the relational store.
///
/// Statements use positional `?` placeholders and values are always bound,
/// never spliced into the SQL text. Every call is one round trip; nothing is
/// cached and nothing is retried.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// Run a read statement. `columns` describes the result shape so each
    /// field decodes to its native type; rows keep that column order.
    async fn query(
        &self,
        sql: &str,
        params: Vec<Value>,
        columns: &[Column],
    ) -> Result<Vec<Row>, RepoError>;

    /// Run a write statement.
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecOutcome, RepoError>;

    /// Identifier generated by the most recent successful insert through
    /// this gateway. Callers sharing a gateway must serialize their writes
    /// for this to be meaningful.
    async fn last_insert_id(&self) -> Option<RecordId>;
}
