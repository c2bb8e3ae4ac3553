use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::rejections::AppError;

/// Numeric bundle identifier taken from the `{id}` path segment.
/// A non-numeric segment is an input error carrying the parse failure.
pub struct BundleId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for BundleId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Input(e.body_text()))?;

        raw.parse::<i32>()
            .map(BundleId)
            .map_err(|e| AppError::Input(format!("invalid bundle id {raw:?}: {e}")))
    }
}

/// JSON body extractor whose rejections are plain-text `400 Bad Request`s.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Input(e.body_text()))?;
        Ok(JsonBody(value))
    }
}
