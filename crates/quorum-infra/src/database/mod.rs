//! Storage gateway and record repositories.

mod config;
mod record_base;
mod record_repo;
mod store;

#[cfg(feature = "sqlite")]
mod gateway;

pub use config::{DEFAULT_DATABASE_URL, DatabaseConfig};
pub use record_base::RecordRepository;
pub use record_repo::{
    SqlQuestionFollowRepository, SqlQuestionLikeRepository, SqlQuestionRepository,
    SqlReplyRepository, SqlUserRepository,
};
pub use store::QuestionStore;

#[cfg(feature = "sqlite")]
pub use gateway::SeaOrmGateway;
