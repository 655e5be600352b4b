use async_trait::async_trait;

use crate::domain::{Question, QuestionFollow, QuestionLike, Reply, User};
use crate::error::RepoError;
use crate::record::{Record, RecordId};

/// Generic repository trait shared by every record type.
///
/// There is no delete: rows are only ever created and updated.
#[async_trait]
pub trait BaseRepository<T: Record>: Send + Sync {
    /// Find a record by its identifier.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<T>, RepoError>;

    /// Every record in the table, in the store's natural order.
    async fn all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert the record if it has no identifier, update it otherwise.
    /// On insert the generated identifier is written back into `record`.
    async fn save(&self, record: &mut T) -> Result<RecordId, RepoError>;
}

/// User repository with relationship and karma queries.
#[async_trait]
pub trait UserRepository: BaseRepository<User> {
    /// Exact match on both names; first match only.
    async fn find_by_name(&self, first: &str, last: &str) -> Result<Option<User>, RepoError>;

    /// Same lookup as [`QuestionRepository::find_by_author_id`], so at most
    /// one question comes back.
    async fn authored_questions(&self, user: &User) -> Result<Option<Question>, RepoError>;

    async fn authored_replies(&self, user: &User) -> Result<Vec<Reply>, RepoError>;

    async fn followed_questions(&self, user: &User) -> Result<Vec<Question>, RepoError>;

    async fn liked_questions(&self, user: &User) -> Result<Vec<Question>, RepoError>;

    /// Likes across the user's questions divided by the number of distinct
    /// liked questions. `None` when none of them has a like.
    async fn average_karma(&self, user: &User) -> Result<Option<f64>, RepoError>;
}

/// Question repository.
#[async_trait]
pub trait QuestionRepository: BaseRepository<Question> {
    /// Only the first question by this author, even when there are several.
    async fn find_by_author_id(&self, author_id: RecordId) -> Result<Option<Question>, RepoError>;

    async fn author(&self, question: &Question) -> Result<Option<User>, RepoError>;

    async fn replies(&self, question: &Question) -> Result<Vec<Reply>, RepoError>;

    async fn followers(&self, question: &Question) -> Result<Vec<User>, RepoError>;

    async fn likers(&self, question: &Question) -> Result<Vec<User>, RepoError>;

    async fn num_likes(&self, question: &Question) -> Result<i64, RepoError>;

    /// At most `n` followed questions, ordered by ascending follower count.
    async fn most_followed(&self, n: u32) -> Result<Vec<Question>, RepoError>;

    /// At most `n` liked questions, ordered by ascending like count.
    async fn most_liked(&self, n: u32) -> Result<Vec<Question>, RepoError>;
}

/// Follow join-table repository.
#[async_trait]
pub trait QuestionFollowRepository: BaseRepository<QuestionFollow> {
    async fn followers_for_question_id(
        &self,
        question_id: RecordId,
    ) -> Result<Vec<User>, RepoError>;

    async fn followed_questions_for_user_id(
        &self,
        user_id: RecordId,
    ) -> Result<Vec<Question>, RepoError>;

    async fn most_followed_questions(&self, n: u32) -> Result<Vec<Question>, RepoError>;
}

/// Like join-table repository.
#[async_trait]
pub trait QuestionLikeRepository: BaseRepository<QuestionLike> {
    async fn likers_for_question_id(&self, question_id: RecordId)
    -> Result<Vec<User>, RepoError>;

    async fn num_likes_for_question_id(&self, question_id: RecordId) -> Result<i64, RepoError>;

    async fn liked_questions_for_user_id(
        &self,
        user_id: RecordId,
    ) -> Result<Vec<Question>, RepoError>;

    async fn most_liked_questions(&self, n: u32) -> Result<Vec<Question>, RepoError>;
}

/// Reply repository, including the reply tree.
#[async_trait]
pub trait ReplyRepository: BaseRepository<Reply> {
    async fn find_by_user_id(&self, user_id: RecordId) -> Result<Vec<Reply>, RepoError>;

    async fn find_by_question_id(&self, question_id: RecordId) -> Result<Vec<Reply>, RepoError>;

    async fn author(&self, reply: &Reply) -> Result<Option<User>, RepoError>;

    async fn question(&self, reply: &Reply) -> Result<Option<Question>, RepoError>;

    /// `None` for top-level replies.
    async fn parent_reply(&self, reply: &Reply) -> Result<Option<Reply>, RepoError>;

    async fn child_replies(&self, reply: &Reply) -> Result<Vec<Reply>, RepoError>;
}
