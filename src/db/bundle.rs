use sqlx::{Postgres, Transaction};

use super::error::StoreError;
use super::models::{AnswerRow, BundleRow};
use super::Db;
use crate::models::{TriviaBundle, TriviaBundles};

impl Db {
    /// Insert a bundle with all of its answers atomically in a transaction.
    /// Any failed statement rolls the whole bundle back.
    /// Returns the id assigned to the new bundle.
    pub async fn create_bundle(&self, bundle: &TriviaBundle) -> Result<i32, StoreError> {
        tracing::debug!("creating trivia bundle: {}", bundle.question);

        let mut tx = self.pool.begin().await?;

        let bundle_id = match insert_bundle(&mut tx, bundle).await {
            Ok(id) => id,
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!("rollback after failed bundle insert failed: {rollback_err}");
                }
                return Err(err);
            }
        };

        tx.commit().await?;

        tracing::info!(
            "new trivia bundle created with id: {bundle_id} ({} answers)",
            bundle.answers.len()
        );
        Ok(bundle_id)
    }

    pub async fn get_bundle(&self, id: i32) -> Result<TriviaBundle, StoreError> {
        let row = sqlx::query_as::<_, BundleRow>(
            "SELECT id, question, category, show_answer FROM trivia_bundle WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })?;

        let answers = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, trivia_bundle_id, answer_text, is_correct
            FROM answer
            WHERE trivia_bundle_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(row.into_bundle(answers))
    }

    /// All bundles, parent fields only. Answers are left empty.
    pub async fn bundles(&self) -> Result<TriviaBundles, StoreError> {
        let rows = sqlx::query_as::<_, BundleRow>(
            "SELECT id, question, category, show_answer FROM trivia_bundle ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.into_bundle(Vec::new())).collect())
    }

    /// Bundles whose category matches exactly, parent fields only.
    pub async fn bundles_by_category(&self, category: &str) -> Result<TriviaBundles, StoreError> {
        let rows = sqlx::query_as::<_, BundleRow>(
            r#"
            SELECT id, question, category, show_answer
            FROM trivia_bundle
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.into_bundle(Vec::new())).collect())
    }

    /// Replace the question, category and flag of a bundle. Answers are not touched.
    pub async fn update_bundle(&self, id: i32, bundle: &TriviaBundle) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE trivia_bundle SET question = $1, category = $2, show_answer = $3 WHERE id = $4",
        )
        .bind(&bundle.question)
        .bind(&bundle.category)
        .bind(bundle.show_answer)
        .bind(id)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            "trivia bundle updated with id: {id}: {:?}",
            result.rows_affected()
        );
        Ok(())
    }

    /// Delete a bundle. Its answers are removed by the foreign key cascade.
    pub async fn delete_bundle(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM trivia_bundle WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!(
            "trivia bundle deleted with id: {id}: {:?}",
            result.rows_affected()
        );
        Ok(())
    }
}

async fn insert_bundle(
    tx: &mut Transaction<'_, Postgres>,
    bundle: &TriviaBundle,
) -> Result<i32, StoreError> {
    let bundle_id: i32 = sqlx::query_scalar(
        "INSERT INTO trivia_bundle (question, category, show_answer) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&bundle.question)
    .bind(&bundle.category)
    .bind(bundle.show_answer)
    .fetch_one(&mut **tx)
    .await?;

    if bundle.answers.is_empty() {
        return Ok(bundle_id);
    }

    // Batch INSERT all answers via UNNEST; ids follow the input order
    let texts: Vec<String> = bundle
        .answers
        .iter()
        .map(|a| a.answer_text.clone())
        .collect();
    let is_correct: Vec<bool> = bundle.answers.iter().map(|a| a.is_correct).collect();

    sqlx::query(
        r#"
        INSERT INTO answer (trivia_bundle_id, answer_text, is_correct)
        SELECT $1, t.answer_text, t.is_correct
        FROM UNNEST($2::TEXT[], $3::BOOL[]) WITH ORDINALITY AS t(answer_text, is_correct, ord)
        ORDER BY t.ord
        "#,
    )
    .bind(bundle_id)
    .bind(&texts)
    .bind(&is_correct)
    .execute(&mut **tx)
    .await?;

    Ok(bundle_id)
}
