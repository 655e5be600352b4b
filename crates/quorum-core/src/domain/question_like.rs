use serde::{Deserialize, Serialize};

use crate::error::RepoError;
use crate::record::{Column, Record, RecordId, Row, Schema, Value};

/// Join entity - a user liking a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLike {
    pub id: Option<RecordId>,
    pub user_id: RecordId,
    pub question_id: RecordId,
}

impl QuestionLike {
    pub fn new(user_id: RecordId, question_id: RecordId) -> Self {
        Self {
            id: None,
            user_id,
            question_id,
        }
    }
}

const FIELDS: &[Column] = &[Column::integer("user_id"), Column::integer("question_id")];

impl Record for QuestionLike {
    const SCHEMA: Schema = Schema::new("QuestionLike", "question_likes", FIELDS);

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn from_row(row: &Row) -> Result<Self, RepoError> {
        Ok(Self {
            id: row.integer("id")?,
            user_id: row.require_integer("user_id")?,
            question_id: row.require_integer("question_id")?,
        })
    }

    fn field_values(&self) -> Vec<Value> {
        vec![self.user_id.into(), self.question_id.into()]
    }
}
