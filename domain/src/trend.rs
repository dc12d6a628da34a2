//! Day by day mean sentiment per topic.
use crate::error::Error;
use crate::store::SentimentStore;
use crate::DailyMeanScore;
use log::*;
use serde::Serialize;
use std::collections::BTreeMap;

const DATE_KEY: &str = "date";

/// Mean sentiment of each topic on a single day. Topics without comments on
/// that day are absent rather than zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    #[serde(flatten)]
    pub scores: BTreeMap<String, f64>,
}

/// Builds the sentiment time series for `topics`, ordered by ascending date.
/// An empty selection yields an empty series without touching the store.
pub async fn find_by_topics<S>(store: &S, topics: &[String]) -> Result<Vec<TrendPoint>, Error>
where
    S: SentimentStore + ?Sized,
{
    if topics.is_empty() {
        return Ok(Vec::new());
    }

    let scores = store.daily_mean_scores(topics).await?;
    Ok(group_by_date(scores))
}

/// Collapses `(day, topic, mean)` rows into one [`TrendPoint`] per day.
pub fn group_by_date(scores: Vec<DailyMeanScore>) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    for row in scores {
        let (Some(date), Some(avg_score)) = (row.date, row.avg_score) else {
            trace!("Skipping undated or unscored trend row for topic {}", row.topic_name);
            continue;
        };
        // Flattened next to `date`, so a topic of that name would repeat the key
        if row.topic_name == DATE_KEY {
            warn!("Skipping trend row for topic named {DATE_KEY:?} on {date}");
            continue;
        }
        by_date
            .entry(date)
            .or_default()
            .insert(row.topic_name, avg_score);
    }

    by_date
        .into_iter()
        .map(|(date, scores)| TrendPoint { date, scores })
        .collect()
}
