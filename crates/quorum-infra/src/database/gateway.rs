//! SeaORM-backed storage gateway.

use async_trait::async_trait;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, QueryResult, SqlErr, Statement,
};
use tokio::sync::RwLock;

use quorum_core::ports::{ExecOutcome, StorageGateway};
use quorum_core::{Column, ColumnKind, RecordId, RepoError, Row, Value};

use super::config::DatabaseConfig;

/// Storage gateway over a single SeaORM connection.
///
/// Statements are written for SQLite: positional `?` placeholders and
/// `last_insert_rowid` semantics for generated identifiers.
pub struct SeaOrmGateway {
    db: DbConn,
    last_insert_id: RwLock<Option<RecordId>>,
}

impl SeaOrmGateway {
    /// Wrap an existing connection (including a `MockDatabase` one).
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            last_insert_id: RwLock::new(None),
        }
    }

    /// Open the store described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!(
            max_connections = config.max_connections,
            "Connecting to question store..."
        );

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .sqlx_logging(config.sqlx_logging)
            .to_owned();

        let db = Database::connect(opts).await.map_err(map_db_err)?;
        tracing::info!("Question store connected");

        Ok(Self::new(db))
    }

    /// The underlying connection.
    pub fn connection(&self) -> &DbConn {
        &self.db
    }

    /// Give back the connection, e.g. to read a mock's transaction log.
    pub fn into_connection(self) -> DbConn {
        self.db
    }

    fn statement(&self, sql: &str, params: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            params.into_iter().map(to_db_value),
        )
    }
}

#[async_trait]
impl StorageGateway for SeaOrmGateway {
    async fn query(
        &self,
        sql: &str,
        params: Vec<Value>,
        columns: &[Column],
    ) -> Result<Vec<Row>, RepoError> {
        let results = self
            .db
            .query_all(self.statement(sql, params))
            .await
            .map_err(|e| rejected(sql, e))?;

        tracing::debug!(sql, rows = results.len(), "Query executed");

        results.iter().map(|r| decode_row(r, columns)).collect()
    }

    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecOutcome, RepoError> {
        let result = self
            .db
            .execute(self.statement(sql, params))
            .await
            .map_err(|e| rejected(sql, e))?;

        let last_insert_id = if is_insert(sql) {
            RecordId::try_from(result.last_insert_id()).ok()
        } else {
            None
        };

        if let Some(id) = last_insert_id {
            *self.last_insert_id.write().await = Some(id);
        }

        tracing::debug!(
            sql,
            rows_affected = result.rows_affected(),
            "Statement executed"
        );

        Ok(ExecOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id,
        })
    }

    async fn last_insert_id(&self) -> Option<RecordId> {
        *self.last_insert_id.read().await
    }
}

fn is_insert(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("INSERT"))
}

fn to_db_value(value: Value) -> sea_orm::Value {
    match value {
        Value::Null => sea_orm::Value::BigInt(None),
        Value::Integer(v) => v.into(),
        Value::Real(v) => v.into(),
        Value::Text(v) => v.into(),
    }
}

fn decode_row(result: &QueryResult, columns: &[Column]) -> Result<Row, RepoError> {
    let mut row = Row::new();
    for column in columns {
        let value = match column.kind {
            ColumnKind::Integer => result.try_get::<Option<i64>>("", column.name).map(Value::from),
            ColumnKind::Real => result.try_get::<Option<f64>>("", column.name).map(Value::from),
            ColumnKind::Text => result
                .try_get::<Option<String>>("", column.name)
                .map(Value::from),
        }
        .map_err(|e| RepoError::Decode(format!("column `{}`: {e}", column.name)))?;

        row.push(column.name, value);
    }
    Ok(row)
}

fn rejected(sql: &str, err: DbErr) -> RepoError {
    let err = map_db_err(err);
    tracing::error!(sql, error = %err, "Store rejected statement");
    err
}

/// Map a SeaORM error to a repository error, keeping the store's message.
fn map_db_err(err: DbErr) -> RepoError {
    let message = err.to_string();

    if let Some(
        SqlErr::UniqueConstraintViolation(_) | SqlErr::ForeignKeyConstraintViolation(_),
    ) = err.sql_err()
    {
        return RepoError::Constraint(message);
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(message),
        _ => RepoError::Query(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_insert_ignores_case_and_leading_space() {
        assert!(is_insert("INSERT INTO users (f_name) VALUES (?)"));
        assert!(is_insert("  insert into users (f_name) values (?)"));
        assert!(!is_insert("UPDATE users SET f_name = ? WHERE id = ?"));
        assert!(!is_insert("INS"));
    }

    #[test]
    fn test_null_binds_as_typed_null() {
        assert_eq!(to_db_value(Value::Null), sea_orm::Value::BigInt(None));
        assert_eq!(to_db_value(Value::Integer(3)), sea_orm::Value::BigInt(Some(3)));
    }

    #[test]
    fn test_connection_errors_are_classified() {
        let err = map_db_err(DbErr::Conn(sea_orm::RuntimeErr::Internal("down".into())));
        assert!(matches!(err, RepoError::Connection(_)));

        let err = map_db_err(DbErr::Custom("boom".into()));
        assert!(matches!(err, RepoError::Query(_)));
    }
}
