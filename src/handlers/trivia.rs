use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    db::Db,
    extractors::{BundleId, JsonBody},
    models::{TriviaBundle, TriviaBundles},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CREATE_URL, post(create_bundle))
        .route(names::TRIVIA_URL, get(list_bundles))
        .route(
            names::TRIVIA_BUNDLE_ROUTE,
            get(get_bundle).put(update_bundle).delete(delete_bundle),
        )
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    #[serde(default)]
    pub category: Option<String>,
}

impl CategoryQuery {
    /// The requested category; an empty value means no filter.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// List bundles, narrowed to one category when asked.
pub async fn fetch_bundles(db: &Db, category: Option<&str>) -> Result<TriviaBundles, AppError> {
    match category {
        Some(category) => db
            .bundles_by_category(category)
            .await
            .reject("could not list trivia bundles by category"),
        None => db.bundles().await.reject("could not list trivia bundles"),
    }
}

async fn get_bundle(
    State(state): State<AppState>,
    BundleId(id): BundleId,
) -> Result<Json<TriviaBundle>, AppError> {
    let bundle = state
        .db
        .get_bundle(id)
        .await
        .reject("could not get trivia bundle")?;

    Ok(Json(bundle))
}

async fn list_bundles(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<TriviaBundles>, AppError> {
    let bundles = fetch_bundles(&state.db, query.category()).await?;
    Ok(Json(bundles))
}

async fn create_bundle(
    State(state): State<AppState>,
    JsonBody(bundle): JsonBody<TriviaBundle>,
) -> Result<(StatusCode, String), AppError> {
    tracing::debug!("handler: creating trivia bundle: {}", bundle.question);

    let id = state
        .db
        .create_bundle(&bundle)
        .await
        .reject("could not create trivia bundle")?;

    Ok((StatusCode::CREATED, id.to_string()))
}

async fn update_bundle(
    State(state): State<AppState>,
    BundleId(id): BundleId,
    JsonBody(bundle): JsonBody<TriviaBundle>,
) -> Result<StatusCode, AppError> {
    state
        .db
        .update_bundle(id, &bundle)
        .await
        .reject("could not update trivia bundle")?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_bundle(
    State(state): State<AppState>,
    BundleId(id): BundleId,
) -> Result<StatusCode, AppError> {
    state
        .db
        .delete_bundle(id)
        .await
        .reject("could not delete trivia bundle")?;

    Ok(StatusCode::NO_CONTENT)
}
