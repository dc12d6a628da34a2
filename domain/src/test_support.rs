//! In-memory [`SentimentStore`] used by the domain unit tests.
use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use crate::store::SentimentStore;
use crate::{DailyMeanScore, SentimentCount, WordFrequencyBlob};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub(crate) struct FakeStore {
    pub(crate) topics: Vec<String>,
    pub(crate) counts: Vec<SentimentCount>,
    pub(crate) scores: Vec<DailyMeanScore>,
    pub(crate) blobs: Vec<WordFrequencyBlob>,
    pub(crate) fail: bool,
    pub(crate) calls: AtomicUsize,
}

impl FakeStore {
    pub(crate) fn failing() -> Self {
        FakeStore {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "store failure".to_string(),
                )),
            });
        }
        Ok(())
    }
}

pub(crate) fn count(topic: &str, label: Option<&str>, count: i64) -> SentimentCount {
    SentimentCount {
        topic_name: topic.to_string(),
        sentiment_label: label.map(str::to_string),
        count,
    }
}

pub(crate) fn score(date: Option<&str>, topic: &str, avg_score: f64) -> DailyMeanScore {
    DailyMeanScore {
        date: date.map(str::to_string),
        topic_name: topic.to_string(),
        avg_score: Some(avg_score),
    }
}

pub(crate) fn blob(topic: &str, word_freqs: Option<&str>) -> WordFrequencyBlob {
    WordFrequencyBlob {
        topic_name: topic.to_string(),
        word_freqs: word_freqs.map(str::to_string),
    }
}

pub(crate) fn topics(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[async_trait]
impl SentimentStore for FakeStore {
    async fn topic_names(&self) -> Result<Vec<String>, Error> {
        self.record_call()?;
        Ok(self.topics.clone())
    }

    async fn sentiment_counts(&self, topics: &[String]) -> Result<Vec<SentimentCount>, Error> {
        self.record_call()?;
        Ok(self
            .counts
            .iter()
            .filter(|row| topics.contains(&row.topic_name))
            .cloned()
            .collect())
    }

    async fn daily_mean_scores(&self, topics: &[String]) -> Result<Vec<DailyMeanScore>, Error> {
        self.record_call()?;
        Ok(self
            .scores
            .iter()
            .filter(|row| topics.contains(&row.topic_name))
            .cloned()
            .collect())
    }

    async fn word_frequency_blobs(
        &self,
        topics: &[String],
    ) -> Result<Vec<WordFrequencyBlob>, Error> {
        self.record_call()?;
        Ok(self
            .blobs
            .iter()
            .filter(|row| topics.contains(&row.topic_name))
            .cloned()
            .collect())
    }
}
