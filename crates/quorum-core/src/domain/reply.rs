use serde::{Deserialize, Serialize};

use crate::error::RepoError;
use crate::record::{Column, Record, RecordId, Row, Schema, Value};

/// Reply entity - an answer to a question, optionally nested under another
/// reply on the same question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Option<RecordId>,
    pub body: String,
    pub question_id: RecordId,
    /// `None` for top-level replies.
    pub parent_id: Option<RecordId>,
    pub user_id: RecordId,
}

impl Reply {
    /// Create an unsaved top-level reply.
    pub fn new(body: impl Into<String>, question_id: RecordId, user_id: RecordId) -> Self {
        Self {
            id: None,
            body: body.into(),
            question_id,
            parent_id: None,
            user_id,
        }
    }

    /// Create an unsaved reply nested under `parent`.
    pub fn child_of(parent: &Reply, body: impl Into<String>, user_id: RecordId) -> Self {
        Self {
            parent_id: parent.id,
            ..Self::new(body, parent.question_id, user_id)
        }
    }
}

const FIELDS: &[Column] = &[
    Column::text("body"),
    Column::integer("question_id"),
    Column::integer("parent_id"),
    Column::integer("user_id"),
];

impl Record for Reply {
    const SCHEMA: Schema = Schema::new("Reply", "replies", FIELDS);

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn from_row(row: &Row) -> Result<Self, RepoError> {
        Ok(Self {
            id: row.integer("id")?,
            body: row.text("body")?,
            question_id: row.require_integer("question_id")?,
            parent_id: row.integer("parent_id")?,
            user_id: row.require_integer("user_id")?,
        })
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            self.body.as_str().into(),
            self.question_id.into(),
            self.parent_id.into(),
            self.user_id.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_inherits_question_and_parent() {
        let mut parent = Reply::new("first", 4, 1);
        parent.id = Some(9);

        let child = Reply::child_of(&parent, "second", 2);
        assert_eq!(child.question_id, 4);
        assert_eq!(child.parent_id, Some(9));
        assert_eq!(child.user_id, 2);
        assert_eq!(child.id, None);
    }

    #[test]
    fn test_top_level_reply_binds_null_parent() {
        let reply = Reply::new("body", 1, 1);
        assert_eq!(reply.field_values()[2], Value::Null);
    }
}
