use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use quorum_core::ports::{BaseRepository, StorageGateway};
use quorum_core::{Column, Record, RecordId, RepoError, Row, Value};

/// Generic record repository: `find_by_id`, `all` and `save` for any
/// [`Record`], driven by its static schema.
pub struct RecordRepository<R>
where
    R: Record,
{
    pub(crate) gateway: Arc<dyn StorageGateway>,
    _record: PhantomData<R>,
}

impl<R> RecordRepository<R>
where
    R: Record,
{
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self {
            gateway,
            _record: PhantomData,
        }
    }

    /// A repository for another record type over the same gateway.
    pub(crate) fn related<T: Record>(&self) -> RecordRepository<T> {
        RecordRepository::new(Arc::clone(&self.gateway))
    }

    /// Run a `SELECT` whose columns are exactly `R`'s and map every row.
    pub(crate) async fn fetch_all(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Vec<R>, RepoError> {
        let rows = self
            .gateway
            .query(sql, params, &R::SCHEMA.columns())
            .await?;

        rows.iter().map(R::from_row).collect()
    }

    /// Like [`Self::fetch_all`], keeping only the first row.
    pub(crate) async fn fetch_first(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<R>, RepoError> {
        Ok(self.fetch_all(sql, params).await?.into_iter().next())
    }

    /// Run an aggregate statement and return its single row, if any.
    pub(crate) async fn fetch_aggregate(
        &self,
        sql: &str,
        params: Vec<Value>,
        column: Column,
    ) -> Result<Option<Row>, RepoError> {
        let rows = self.gateway.query(sql, params, &[column]).await?;
        Ok(rows.into_iter().next())
    }
}

impl<R: Record> Clone for RecordRepository<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.gateway))
    }
}

#[async_trait]
impl<R> BaseRepository<R> for RecordRepository<R>
where
    R: Record,
{
    async fn find_by_id(&self, id: RecordId) -> Result<Option<R>, RepoError> {
        self.fetch_first(&R::SCHEMA.select_by_id_sql(), vec![id.into()])
            .await
    }

    async fn all(&self) -> Result<Vec<R>, RepoError> {
        self.fetch_all(&R::SCHEMA.select_all_sql(), Vec::new()).await
    }

    async fn save(&self, record: &mut R) -> Result<RecordId, RepoError> {
        let schema = R::SCHEMA;
        let mut values = record.field_values();

        // A record that disagrees with its own schema is a programming error.
        assert_eq!(
            values.len(),
            schema.fields.len(),
            "{} produced {} field values for {} columns",
            schema.entity,
            values.len(),
            schema.fields.len()
        );

        match record.id() {
            None => {
                let outcome = self.gateway.execute(&schema.insert_sql(), values).await?;
                let id = outcome.last_insert_id.ok_or_else(|| {
                    RepoError::Query(format!(
                        "insert into {} returned no identifier",
                        schema.table
                    ))
                })?;

                record.set_id(id);
                tracing::debug!(entity = schema.entity, id, "Inserted record");
                Ok(id)
            }
            Some(id) => {
                values.push(id.into());
                let outcome = self.gateway.execute(&schema.update_sql(), values).await?;

                if outcome.rows_affected == 0 {
                    tracing::warn!(entity = schema.entity, id, "Update matched no rows");
                } else {
                    tracing::debug!(entity = schema.entity, id, "Updated record");
                }
                Ok(id)
            }
        }
    }
}
