//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod gateway;
mod repository;

pub use gateway::{ExecOutcome, StorageGateway};
pub use repository::{
    BaseRepository, QuestionFollowRepository, QuestionLikeRepository, QuestionRepository,
    ReplyRepository, UserRepository,
};
