//! Shared fixtures: a fresh in-memory store with the question schema.

use quorum_core::domain::{Question, User};
use quorum_core::ports::BaseRepository;
use quorum_infra::{DatabaseConfig, QuestionStore};
use tracing_subscriber::EnvFilter;

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        f_name TEXT NOT NULL,
        l_name TEXT NOT NULL
    )",
    "CREATE TABLE questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        body TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES users(id)
    )",
    "CREATE TABLE question_follows (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        question_id INTEGER NOT NULL REFERENCES questions(id)
    )",
    "CREATE TABLE replies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        body TEXT NOT NULL,
        question_id INTEGER NOT NULL REFERENCES questions(id),
        parent_id INTEGER REFERENCES replies(id),
        user_id INTEGER NOT NULL REFERENCES users(id)
    )",
    "CREATE TABLE question_likes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        question_id INTEGER NOT NULL REFERENCES questions(id)
    )",
];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,quorum_infra=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub async fn setup_store() -> QuestionStore {
    init_tracing();

    let store = QuestionStore::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory store should open");

    for ddl in SCHEMA {
        store
            .gateway()
            .execute(ddl, Vec::new())
            .await
            .expect("schema should apply");
    }

    store
}

pub async fn saved_user(store: &QuestionStore, first: &str, last: &str) -> User {
    let mut user = User::new(first, last);
    store.users.save(&mut user).await.expect("user should save");
    user
}

pub async fn saved_question(store: &QuestionStore, title: &str, author: &User) -> Question {
    let author_id = author.id.expect("author must be saved");
    let mut question = Question::new(title, format!("{title} body"), author_id);
    store
        .questions
        .save(&mut question)
        .await
        .expect("question should save");
    question
}
