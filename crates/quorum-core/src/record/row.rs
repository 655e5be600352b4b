use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RepoError;

/// A single field value as stored in, or bound to, a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One result row: field names mapped to values, in statement column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Row::push`], handy for fixtures.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn field(&self, name: &str) -> Result<&Value, RepoError> {
        self.get(name)
            .ok_or_else(|| RepoError::Decode(format!("missing column `{name}`")))
    }

    /// Nullable integer column.
    pub fn integer(&self, name: &str) -> Result<Option<i64>, RepoError> {
        match self.field(name)? {
            Value::Null => Ok(None),
            Value::Integer(v) => Ok(Some(*v)),
            other => Err(mismatch(name, "integer", other)),
        }
    }

    /// Non-null integer column.
    pub fn require_integer(&self, name: &str) -> Result<i64, RepoError> {
        self.integer(name)?
            .ok_or_else(|| RepoError::Decode(format!("column `{name}` is NULL")))
    }

    /// Nullable real column. Integers widen, since stores may hand back
    /// whole-number aggregates with integer affinity.
    pub fn real(&self, name: &str) -> Result<Option<f64>, RepoError> {
        match self.field(name)? {
            Value::Null => Ok(None),
            Value::Real(v) => Ok(Some(*v)),
            #[allow(clippy::cast_precision_loss)]
            Value::Integer(v) => Ok(Some(*v as f64)),
            other => Err(mismatch(name, "real", other)),
        }
    }

    /// Non-null text column.
    pub fn text(&self, name: &str) -> Result<String, RepoError> {
        match self.field(name)? {
            Value::Text(v) => Ok(v.clone()),
            Value::Null => Err(RepoError::Decode(format!("column `{name}` is NULL"))),
            other => Err(mismatch(name, "text", other)),
        }
    }
}

fn mismatch(name: &str, expected: &str, found: &Value) -> RepoError {
    RepoError::Decode(format!("column `{name}`: expected {expected}, found {found}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_converts_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7_i64)), Value::Integer(7));
    }

    #[test]
    fn test_row_keeps_column_order() {
        let row = Row::new().with("id", 1_i64).with("body", "hi");
        let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "body"]);
    }

    #[test]
    fn test_typed_getters() {
        let row = Row::new()
            .with("id", 3_i64)
            .with("parent_id", Value::Null)
            .with("body", "text")
            .with("karma", 1.5);

        assert_eq!(row.integer("parent_id").unwrap(), None);
        assert_eq!(row.require_integer("id").unwrap(), 3);
        assert_eq!(row.text("body").unwrap(), "text");
        assert_eq!(row.real("karma").unwrap(), Some(1.5));
        assert_eq!(row.real("id").unwrap(), Some(3.0));
    }

    #[test]
    fn test_missing_and_mismatched_columns_fail_to_decode() {
        let row = Row::new().with("id", "not a number");

        assert!(matches!(row.integer("id"), Err(RepoError::Decode(_))));
        assert!(matches!(row.text("title"), Err(RepoError::Decode(_))));
        assert!(matches!(
            Row::new().with("id", Value::Null).require_integer("id"),
            Err(RepoError::Decode(_))
        ));
    }
}
