use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::StoreError;

/// Error returned by handlers. Rendered as a plain-text body carrying the message.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Input(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::Input(msg) | AppError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::NotFound(msg) | AppError::Input(msg) | AppError::Internal(msg) => {
                (status, msg).into_response()
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            AppError::NotFound(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

pub trait ResultExt<T> {
    /// Log the failure under `context` and turn it into an [`AppError`].
    fn reject(self, context: &'static str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, StoreError> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|err| {
            if err.is_not_found() {
                tracing::debug!("{context}: {err}");
            } else {
                tracing::error!("{context}: {err}");
            }
            AppError::from(err)
        })
    }
}
