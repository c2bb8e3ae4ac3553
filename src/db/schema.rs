// Database schema initialization

use color_eyre::Result;
use sqlx::PgPool;

// Serializes concurrent bootstraps; CREATE TABLE IF NOT EXISTS alone races on pg_type.
const SCHEMA_LOCK_KEY: i64 = 0x7472_6976_6961;

pub async fn create_schema(pool: &PgPool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trivia_bundle (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            category TEXT NOT NULL,
            show_answer BOOLEAN NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS answer (
            id SERIAL PRIMARY KEY,
            trivia_bundle_id INTEGER NOT NULL REFERENCES trivia_bundle(id) ON DELETE CASCADE,
            answer_text TEXT NOT NULL,
            is_correct BOOLEAN NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_trivia_bundle_category ON trivia_bundle(category)",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_answer_trivia_bundle_id ON answer(trivia_bundle_id)",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}
