//! The data access seam between the aggregation logic and the dataset.
//!
//! One method per query. Production code uses the `DatabaseConnection`
//! implementation below; [`crate::cache::CachedStore`] wraps any store to
//! memoize results.
use crate::error::Error;
use crate::{DailyMeanScore, SentimentCount, WordFrequencyBlob};
use async_trait::async_trait;
use entity_api::{comment, video, wordcloud};
use sea_orm::DatabaseConnection;

#[async_trait]
pub trait SentimentStore: Send + Sync {
    /// Distinct topic names, sorted ascending.
    async fn topic_names(&self) -> Result<Vec<String>, Error>;

    /// Comment counts grouped by `(topic, sentiment label)`.
    async fn sentiment_counts(&self, topics: &[String]) -> Result<Vec<SentimentCount>, Error>;

    /// Mean sentiment score grouped by `(day, topic)`, ordered by day.
    async fn daily_mean_scores(&self, topics: &[String]) -> Result<Vec<DailyMeanScore>, Error>;

    /// Stored word frequency blobs, at most one per topic.
    async fn word_frequency_blobs(
        &self,
        topics: &[String],
    ) -> Result<Vec<WordFrequencyBlob>, Error>;
}

#[async_trait]
impl SentimentStore for DatabaseConnection {
    async fn topic_names(&self) -> Result<Vec<String>, Error> {
        Ok(video::find_distinct_topic_names(self).await?)
    }

    async fn sentiment_counts(&self, topics: &[String]) -> Result<Vec<SentimentCount>, Error> {
        Ok(comment::count_by_topic_and_label(self, topics).await?)
    }

    async fn daily_mean_scores(&self, topics: &[String]) -> Result<Vec<DailyMeanScore>, Error> {
        Ok(comment::mean_score_by_day_and_topic(self, topics).await?)
    }

    async fn word_frequency_blobs(
        &self,
        topics: &[String],
    ) -> Result<Vec<WordFrequencyBlob>, Error> {
        Ok(wordcloud::find_by_topic_names(self, topics).await?)
    }
}
