use serde::{Deserialize, Serialize};

use crate::error::RepoError;
use crate::record::{Column, Record, RecordId, Row, Schema, Value};

/// Question entity - a titled post by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Option<RecordId>,
    pub title: String,
    pub body: String,
    /// Stored as `user_id`.
    pub author_id: RecordId,
}

impl Question {
    /// Create an unsaved question.
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: RecordId) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }
}

const FIELDS: &[Column] = &[
    Column::text("title"),
    Column::text("body"),
    Column::integer("user_id"),
];

impl Record for Question {
    const SCHEMA: Schema = Schema::new("Question", "questions", FIELDS);

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn from_row(row: &Row) -> Result<Self, RepoError> {
        Ok(Self {
            id: row.integer("id")?,
            title: row.text("title")?,
            body: row.text("body")?,
            author_id: row.require_integer("user_id")?,
        })
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            self.title.as_str().into(),
            self.body.as_str().into(),
            self.author_id.into(),
        ]
    }
}
