#![allow(dead_code)]

use std::{
    str::FromStr,
    sync::atomic::{AtomicU32, Ordering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use trivia_bundles::{
    db::Db,
    models::{Answer, TriviaBundle},
};

fn database_options() -> PgConnectOptions {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must name a Postgres database for this test");
    PgConnectOptions::from_str(&url).expect("DATABASE_URL should be a postgres url")
}

/// Connect to the Postgres named by `DATABASE_URL`, bootstrapping the schema.
pub async fn create_test_db() -> Db {
    Db::connect_with(database_options())
        .await
        .expect("failed to create test database")
}

/// A raw pool on the same database, for checking rows the store does not expose.
pub async fn create_test_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .connect_with(database_options())
        .await
        .expect("failed to connect test pool")
}

/// A handle whose pool points at a closed port. Nothing connects until a query runs.
pub fn unreachable_db() -> Db {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("nobody")
        .database("nowhere");
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy_with(options);
    Db::from_pool(pool)
}

/// A label no other test run will produce, for isolating rows in a shared database.
pub fn unique(prefix: &str) -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{prefix}-{}-{nanos}-{n}", std::process::id())
}

pub fn math_bundle(category: &str) -> TriviaBundle {
    TriviaBundle {
        id: None,
        question: "2+2?".to_string(),
        category: category.to_string(),
        answers: vec![Answer::new("4", true), Answer::new("5", false)],
        show_answer: true,
    }
}
