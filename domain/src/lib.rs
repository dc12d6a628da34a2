//! Domain layer of the sentiment dashboard.
//!
//! Holds the aggregation and reshaping logic behind each dashboard view. All of
//! it is written against the [`store::SentimentStore`] trait rather than a
//! concrete connection, so the `web` layer never talks to `entity_api` directly.
pub use entity_api::{
    comment::{DailyMeanScore, SentimentCount},
    sentiment::Sentiment,
    wordcloud::WordFrequencyBlob,
};

pub mod cache;
pub mod error;
pub mod stats;
pub mod store;
pub mod topic;
pub mod topics_input;
pub mod trend;
pub mod wordcloud;

#[cfg(test)]
pub(crate) mod test_support;
