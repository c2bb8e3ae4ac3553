use std::{collections::BTreeMap, time::Duration};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::trivia::{fetch_bundles, CategoryQuery};
use crate::{names, rejections::AppError, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HOME_URL, get(homepage))
        .route(names::HEALTH_URL, get(health))
}

async fn homepage(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<maud::Markup, AppError> {
    let category = query.category();
    let bundles = fetch_bundles(&state.db, category).await?;

    Ok(views::page(
        "Trivia",
        views::homepage::bundle_list(&bundles, category),
    ))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<BTreeMap<&'static str, String>>) {
    let deadline = Duration::from_secs(names::HEALTH_CHECK_TIMEOUT_SECS);

    match state.db.health(deadline).await {
        Ok(()) => (
            StatusCode::OK,
            Json(BTreeMap::from([("message", "It's healthy".to_owned())])),
        ),
        Err(err) => {
            tracing::error!("health check failed: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(BTreeMap::from([("message", format!("db down: {err}"))])),
            )
        }
    }
}
