use crate::error::{Context, ErrorResponse};
use crate::params::topics::TopicsParams;
use crate::{AppState, Error};
use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;
use axum::Json;
use domain::trend as TrendApi;

use log::*;

const FAILURE_MESSAGE: &str = "Failed to fetch trends";

/// GET the daily mean sentiment of each selected topic, ordered by date
///
/// Each element holds a `date` plus one numeric field per topic that has
/// scored comments on that date.
#[utoipa::path(
    get,
    path = "/api/trends",
    params(TopicsParams),
    responses(
        (status = 200, description = "Successfully built the sentiment time series"),
        (status = 500, description = "Failed to fetch trends", body = ErrorResponse)
    )
)]
pub async fn index(
    State(app_state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, Error> {
    let topics = TopicsParams::from_query(query.as_deref())
        .context(FAILURE_MESSAGE)?
        .into_topics();

    debug!("GET Trends for topics: {topics:?}");

    let trends = TrendApi::find_by_topics(app_state.store(), &topics)
        .await
        .context(FAILURE_MESSAGE)?;

    Ok(Json(trends))
}
