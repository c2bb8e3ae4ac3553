use std::time::Duration;

use thiserror::Error;

/// Failures surfaced by the bundle store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("trivia bundle {id} not found")]
    NotFound { id: i32 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("database did not respond within {0:?}")]
    Timeout(Duration),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
