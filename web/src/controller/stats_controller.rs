use crate::error::{Context, ErrorResponse};
use crate::params::topics::TopicsParams;
use crate::{AppState, Error};
use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;
use axum::Json;
use domain::stats as StatsApi;

use log::*;

const FAILURE_MESSAGE: &str = "Failed to fetch stats";

/// GET comment counts and sentiment distributions for the selected topics
#[utoipa::path(
    get,
    path = "/api/stats",
    params(TopicsParams),
    responses(
        (status = 200, description = "Successfully aggregated comment statistics", body = domain::stats::StatsSummary),
        (status = 500, description = "Failed to fetch stats", body = ErrorResponse)
    )
)]
pub async fn index(
    State(app_state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, Error> {
    let topics = TopicsParams::from_query(query.as_deref())
        .context(FAILURE_MESSAGE)?
        .into_topics();

    debug!("GET Stats for topics: {topics:?}");

    let stats = StatsApi::aggregate(app_state.store(), &topics)
        .await
        .context(FAILURE_MESSAGE)?;

    debug!(
        "Aggregated {} comments across {} topics",
        stats.aggregated.total_comments,
        stats.breakdown.len()
    );

    Ok(Json(stats))
}
