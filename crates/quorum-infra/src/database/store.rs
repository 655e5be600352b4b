use std::sync::Arc;

use quorum_core::ports::StorageGateway;
#[cfg(feature = "sqlite")]
use quorum_core::RepoError;

#[cfg(feature = "sqlite")]
use super::config::DatabaseConfig;
#[cfg(feature = "sqlite")]
use super::gateway::SeaOrmGateway;
use super::record_repo::{
    SqlQuestionFollowRepository, SqlQuestionLikeRepository, SqlQuestionRepository,
    SqlReplyRepository, SqlUserRepository,
};

/// Every repository, sharing one gateway.
///
/// Cloning is cheap; clones share the same connection.
#[derive(Clone)]
pub struct QuestionStore {
    gateway: Arc<dyn StorageGateway>,
    pub users: SqlUserRepository,
    pub questions: SqlQuestionRepository,
    pub follows: SqlQuestionFollowRepository,
    pub likes: SqlQuestionLikeRepository,
    pub replies: SqlReplyRepository,
}

impl QuestionStore {
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self {
            users: SqlUserRepository::new(Arc::clone(&gateway)),
            questions: SqlQuestionRepository::new(Arc::clone(&gateway)),
            follows: SqlQuestionFollowRepository::new(Arc::clone(&gateway)),
            likes: SqlQuestionLikeRepository::new(Arc::clone(&gateway)),
            replies: SqlReplyRepository::new(Arc::clone(&gateway)),
            gateway,
        }
    }

    /// Connect a [`SeaOrmGateway`] and build the repositories on it.
    #[cfg(feature = "sqlite")]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let gateway = SeaOrmGateway::connect(config).await?;
        Ok(Self::new(Arc::new(gateway)))
    }

    pub fn gateway(&self) -> &Arc<dyn StorageGateway> {
        &self.gateway
    }
}
