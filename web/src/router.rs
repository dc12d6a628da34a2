use crate::controller::{
    health_check_controller, stats_controller, topic_controller, trend_controller,
    wordcloud_controller,
};
use crate::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use log::*;
use service::config::Config;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Sentiment Dashboard API"
        ),
        paths(
            health_check_controller::health_check,
            topic_controller::index,
            stats_controller::index,
            trend_controller::index,
            wordcloud_controller::index,
        ),
        components(
            schemas(
                domain::stats::StatsSummary,
                domain::stats::AggregatedStats,
                domain::stats::TopicStats,
                domain::stats::SentimentDistribution,
                domain::wordcloud::TopicWordcloud,
                domain::wordcloud::WordFrequency,
                crate::error::ErrorResponse,
            )
        ),
        tags(
            (name = "sentiment_dashboard", description = "Read-only sentiment analytics over a fixed comment dataset")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    let cors = cors_layer(app_state.config());
    let serve_api_docs = !app_state.config().is_production();

    let router = Router::new()
        .merge(health_routes())
        .merge(topic_routes(app_state.clone()))
        .merge(stats_routes(app_state.clone()))
        .merge(trend_routes(app_state.clone()))
        .merge(wordcloud_routes(app_state));

    let router = if serve_api_docs {
        router.merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
    } else {
        router
    };

    router.layer(cors)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn topic_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/topics", get(topic_controller::index))
        .with_state(app_state)
}

fn stats_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/stats", get(stats_controller::index))
        .with_state(app_state)
}

fn trend_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/trends", get(trend_controller::index))
        .with_state(app_state)
}

fn wordcloud_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/wordclouds", get(wordcloud_controller::index))
        .with_state(app_state)
}

/// Every endpoint is readable cross-origin, either from any origin or from the
/// configured list.
fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {origin}");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
