//! Domain entities - one record type per table.

mod question;
mod question_follow;
mod question_like;
mod reply;
mod user;

pub use question::Question;
pub use question_follow::QuestionFollow;
pub use question_like::QuestionLike;
pub use reply::Reply;
pub use user::User;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, Row, Value};

    fn round_trip<R: Record + PartialEq + std::fmt::Debug>(mut record: R, id: i64) {
        record.set_id(id);
        let mut row = Row::new().with("id", id);
        for (column, value) in R::SCHEMA.fields.iter().zip(record.field_values()) {
            row.push(column.name, value);
        }
        assert_eq!(R::from_row(&row).unwrap(), record);
    }

    #[test]
    fn test_field_values_match_schema_order() {
        round_trip(User::new("Ada", "Lovelace"), 1);
        round_trip(Question::new("T", "B", 1), 2);
        round_trip(QuestionFollow::new(1, 2), 3);
        round_trip(QuestionLike::new(1, 2), 4);
        round_trip(Reply::new("B", 2, 1), 5);
    }

    #[test]
    fn test_user_from_query_row() {
        let row = Row::new()
            .with("id", 7_i64)
            .with("f_name", "Grace")
            .with("l_name", "Hopper");

        let user = User::from_row(&row).unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.first_name, "Grace");
        assert_eq!(user.last_name, "Hopper");
    }

    #[test]
    fn test_new_records_are_unsaved() {
        assert_eq!(User::new("a", "b").id(), None);
        assert_eq!(Question::new("t", "b", 1).id(), None);
        assert_eq!(QuestionLike::new(1, 1).id(), None);
    }

    #[test]
    fn test_question_author_is_stored_as_user_id() {
        let names: Vec<&str> = Question::SCHEMA.fields.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["title", "body", "user_id"]);
        assert_eq!(
            Question::new("t", "b", 5).field_values()[2],
            Value::Integer(5)
        );
    }

    #[test]
    fn test_reply_row_with_null_parent() {
        let row = Row::new()
            .with("id", 1_i64)
            .with("body", "hi")
            .with("question_id", 2_i64)
            .with("parent_id", Value::Null)
            .with("user_id", 3_i64);

        let reply = Reply::from_row(&row).unwrap();
        assert_eq!(reply.parent_id, None);
        assert_eq!(reply.user_id, 3);
    }
}
