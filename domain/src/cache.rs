//! Memoizing [`SentimentStore`] wrapper.
//!
//! The dataset never changes while the service runs, so query results can be
//! kept for the lifetime of the process. Results are keyed by the set of
//! requested topics (order and duplicates don't change a query's rows) and
//! only successful reads are stored. Topic sets come straight from clients,
//! so each map holds at most `max_entries` sets; once full, further misses
//! are answered from the inner store without being remembered.
use crate::error::Error;
use crate::store::SentimentStore;
use crate::{DailyMeanScore, SentimentCount, WordFrequencyBlob};
use async_trait::async_trait;
use dashmap::DashMap;
use log::*;
use std::collections::BTreeSet;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::OnceCell;

type TopicSet = BTreeSet<String>;

pub struct CachedStore {
    inner: Arc<dyn SentimentStore>,
    topic_names: OnceCell<Vec<String>>,
    sentiment_counts: DashMap<TopicSet, Vec<SentimentCount>>,
    daily_mean_scores: DashMap<TopicSet, Vec<DailyMeanScore>>,
    word_frequency_blobs: DashMap<TopicSet, Vec<WordFrequencyBlob>>,
    max_entries: usize,
}

impl CachedStore {
    pub fn new(inner: Arc<dyn SentimentStore>, max_entries: usize) -> Self {
        CachedStore {
            inner,
            topic_names: OnceCell::new(),
            sentiment_counts: DashMap::new(),
            daily_mean_scores: DashMap::new(),
            word_frequency_blobs: DashMap::new(),
            max_entries,
        }
    }
}

fn topic_set(topics: &[String]) -> TopicSet {
    topics.iter().cloned().collect()
}

async fn get_or_load<K, V, F, Fut>(
    cache: &DashMap<K, V>,
    max_entries: usize,
    key: K,
    load: F,
) -> Result<V, Error>
where
    K: Eq + Hash + std::fmt::Debug,
    V: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, Error>>,
{
    let cached = cache.get(&key).map(|hit| hit.value().clone());
    if let Some(hit) = cached {
        trace!("Cache hit for {key:?}");
        return Ok(hit);
    }

    // Concurrent misses for the same key may both load; the dataset is
    // immutable so whichever insert lands last is equivalent.
    let loaded = load().await?;
    // The length check and insert race, so the bound can be overshot by the
    // number of concurrent misses.
    if cache.len() < max_entries {
        cache.insert(key, loaded.clone());
    } else {
        debug!("Cache full ({max_entries} topic sets), not caching {key:?}");
    }
    Ok(loaded)
}

#[async_trait]
impl SentimentStore for CachedStore {
    async fn topic_names(&self) -> Result<Vec<String>, Error> {
        self.topic_names
            .get_or_try_init(|| self.inner.topic_names())
            .await
            .cloned()
    }

    async fn sentiment_counts(&self, topics: &[String]) -> Result<Vec<SentimentCount>, Error> {
        get_or_load(&self.sentiment_counts, self.max_entries, topic_set(topics), || {
            self.inner.sentiment_counts(topics)
        })
        .await
    }

    async fn daily_mean_scores(&self, topics: &[String]) -> Result<Vec<DailyMeanScore>, Error> {
        get_or_load(&self.daily_mean_scores, self.max_entries, topic_set(topics), || {
            self.inner.daily_mean_scores(topics)
        })
        .await
    }

    async fn word_frequency_blobs(
        &self,
        topics: &[String],
    ) -> Result<Vec<WordFrequencyBlob>, Error> {
        get_or_load(&self.word_frequency_blobs, self.max_entries, topic_set(topics), || {
            self.inner.word_frequency_blobs(topics)
        })
        .await
    }
}
