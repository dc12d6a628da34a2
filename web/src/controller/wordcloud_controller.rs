use crate::error::{Context, ErrorResponse};
use crate::params::topics::TopicsParams;
use crate::{AppState, Error};
use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;
use axum::Json;
use domain::wordcloud as WordcloudApi;

use log::*;

const FAILURE_MESSAGE: &str = "Failed to fetch wordclouds";

/// GET the most frequent words of each selected topic
#[utoipa::path(
    get,
    path = "/api/wordclouds",
    params(TopicsParams),
    responses(
        (status = 200, description = "Successfully retrieved word clouds", body = [domain::wordcloud::TopicWordcloud]),
        (status = 500, description = "Failed to fetch wordclouds", body = ErrorResponse)
    )
)]
pub async fn index(
    State(app_state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, Error> {
    let topics = TopicsParams::from_query(query.as_deref())
        .context(FAILURE_MESSAGE)?
        .into_topics();

    debug!("GET Wordclouds for topics: {topics:?}");

    let wordclouds = WordcloudApi::find_by_topics(app_state.store(), &topics)
        .await
        .context(FAILURE_MESSAGE)?;

    Ok(Json(wordclouds))
}
