use serde::{Deserialize, Serialize};

use crate::error::RepoError;
use crate::record::{Column, Record, RecordId, Row, Schema, Value};

/// User entity - someone who asks, answers, follows and likes questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Create an unsaved user.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

const FIELDS: &[Column] = &[Column::text("f_name"), Column::text("l_name")];

impl Record for User {
    const SCHEMA: Schema = Schema::new("User", "users", FIELDS);

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn from_row(row: &Row) -> Result<Self, RepoError> {
        Ok(Self {
            id: row.integer("id")?,
            first_name: row.text("f_name")?,
            last_name: row.text("l_name")?,
        })
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
        ]
    }
}
