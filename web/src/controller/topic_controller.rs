use crate::error::{Context, ErrorResponse};
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::topic as TopicApi;

use log::*;

/// GET all topics available for selection, sorted ascending
#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "Successfully retrieved all topics", body = [String]),
        (status = 500, description = "Failed to fetch topics", body = ErrorResponse)
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    debug!("GET all Topics");

    let topics = TopicApi::find_all(app_state.store())
        .await
        .context("Failed to fetch topics")?;

    debug!("Found {} Topics", topics.len());

    Ok(Json(topics))
}
