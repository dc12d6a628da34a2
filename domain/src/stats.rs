//! Comment counts and sentiment distributions for a topic selection.
use crate::error::Error;
use crate::store::SentimentStore;
use crate::topics_input::distinct_in_order;
use crate::{Sentiment, SentimentCount};
use log::*;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SentimentDistribution {
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

impl SentimentDistribution {
    /// Sets the bucket for `sentiment` to `count`.
    fn set(&mut self, sentiment: Sentiment, count: i64) {
        match sentiment {
            Sentiment::Positive => self.positive = count,
            Sentiment::Negative => self.negative = count,
            Sentiment::Neutral => self.neutral = count,
        }
    }

    fn accumulate(&mut self, other: &SentimentDistribution) {
        self.positive += other.positive;
        self.negative += other.negative;
        self.neutral += other.neutral;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedStats {
    pub total_comments: i64,
    pub sentiment_distribution: SentimentDistribution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicStats {
    pub topic: String,
    pub total_comments: i64,
    pub sentiment_distribution: SentimentDistribution,
}

impl TopicStats {
    fn empty(topic: String) -> Self {
        TopicStats {
            topic,
            total_comments: 0,
            sentiment_distribution: SentimentDistribution::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatsSummary {
    pub aggregated: AggregatedStats,
    pub breakdown: Vec<TopicStats>,
}

/// Builds the overall and per-topic comment statistics for `topics`.
///
/// The breakdown holds one entry per distinct requested topic in first-seen
/// order, including topics without any comments. An empty selection yields
/// the zero summary without touching the store.
pub async fn aggregate<S>(store: &S, topics: &[String]) -> Result<StatsSummary, Error>
where
    S: SentimentStore + ?Sized,
{
    if topics.is_empty() {
        return Ok(StatsSummary::default());
    }

    let counts = store.sentiment_counts(topics).await?;
    Ok(summarize(topics, &counts))
}

/// Folds grouped `(topic, label, count)` rows into a [`StatsSummary`].
pub fn summarize(topics: &[String], counts: &[SentimentCount]) -> StatsSummary {
    let mut breakdown: Vec<TopicStats> = distinct_in_order(topics)
        .into_iter()
        .map(TopicStats::empty)
        .collect();
    let positions: HashMap<String, usize> = breakdown
        .iter()
        .enumerate()
        .map(|(position, stats)| (stats.topic.clone(), position))
        .collect();

    for row in counts {
        let Some(&position) = positions.get(&row.topic_name) else {
            warn!("Ignoring comment counts for unrequested topic: {}", row.topic_name);
            continue;
        };
        let topic_stats = &mut breakdown[position];
        topic_stats.total_comments += row.count;

        // The grouping yields a single row per (topic, label), so each bucket is written once.
        if let Some(sentiment) = row
            .sentiment_label
            .as_deref()
            .and_then(|label| label.parse::<Sentiment>().ok())
        {
            topic_stats.sentiment_distribution.set(sentiment, row.count);
        }
    }

    let mut aggregated = AggregatedStats::default();
    for topic_stats in &breakdown {
        aggregated.total_comments += topic_stats.total_comments;
        aggregated
            .sentiment_distribution
            .accumulate(&topic_stats.sentiment_distribution);
    }

    StatsSummary {
        aggregated,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{count, topics, FakeStore};
    use serde_json::json;

    fn distribution(positive: i64, negative: i64, neutral: i64) -> SentimentDistribution {
        SentimentDistribution {
            positive,
            negative,
            neutral,
        }
    }

    #[tokio::test]
    async fn empty_selection_yields_zero_summary_without_querying() {
        let store = FakeStore::default();

        let summary = aggregate(&store, &[]).await.unwrap();

        assert_eq!(summary, StatsSummary::default());
        assert_eq!(store.calls(), 0);
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "aggregated": {
                    "totalComments": 0,
                    "sentimentDistribution": {"positive": 0, "negative": 0, "neutral": 0}
                },
                "breakdown": []
            })
        );
    }

    #[tokio::test]
    async fn counts_labels_for_a_single_topic() {
        let store = FakeStore {
            counts: vec![count("A", Some("positive"), 2), count("A", Some("negative"), 1)],
            ..Default::default()
        };

        let summary = aggregate(&store, &topics(&["A"])).await.unwrap();

        assert_eq!(
            summary.breakdown[0],
            TopicStats {
                topic: "A".to_string(),
                total_comments: 3,
                sentiment_distribution: distribution(2, 1, 0),
            }
        );
        assert_eq!(summary.aggregated.total_comments, 3);
    }

    #[test]
    fn unlabeled_and_unknown_labels_only_count_towards_totals() {
        let summary = summarize(
            &topics(&["A"]),
            &[
                count("A", Some("neutral"), 5),
                count("A", None, 4),
                count("A", Some("sarcastic"), 3),
            ],
        );

        assert_eq!(summary.breakdown[0].total_comments, 12);
        assert_eq!(summary.breakdown[0].sentiment_distribution, distribution(0, 0, 5));
    }

    #[test]
    fn topics_without_comments_still_appear_in_request_order() {
        let summary = summarize(
            &topics(&["B", "A", "B", "C"]),
            &[count("A", Some("positive"), 1)],
        );

        let order: Vec<&str> = summary.breakdown.iter().map(|s| s.topic.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(summary.breakdown[0].total_comments, 0);
        assert_eq!(summary.breakdown[2].sentiment_distribution, distribution(0, 0, 0));
    }

    #[test]
    fn rows_for_unrequested_topics_are_ignored() {
        let summary = summarize(
            &topics(&["A"]),
            &[count("A", Some("positive"), 1), count("Z", Some("positive"), 9)],
        );

        assert_eq!(summary.breakdown.len(), 1);
        assert_eq!(summary.aggregated.total_comments, 1);
    }

    #[test]
    fn aggregated_values_are_sums_over_the_breakdown() {
        let summary = summarize(
            &topics(&["A", "B", "C"]),
            &[
                count("A", Some("positive"), 4),
                count("A", Some("negative"), 2),
                count("B", Some("neutral"), 7),
                count("B", Some("positive"), 1),
                count("B", None, 3),
                count("C", Some("negative"), 6),
            ],
        );

        let total: i64 = summary.breakdown.iter().map(|s| s.total_comments).sum();
        assert_eq!(summary.aggregated.total_comments, total);
        assert_eq!(summary.aggregated.total_comments, 23);

        let mut buckets = SentimentDistribution::default();
        for topic_stats in &summary.breakdown {
            buckets.accumulate(&topic_stats.sentiment_distribution);
        }
        assert_eq!(summary.aggregated.sentiment_distribution, buckets);
        assert_eq!(buckets, distribution(5, 8, 7));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let summary = summarize(&topics(&["A"]), &[count("A", Some("positive"), 2)]);

        assert_eq!(
            serde_json::to_value(&summary.breakdown[0]).unwrap(),
            json!({
                "topic": "A",
                "totalComments": 2,
                "sentimentDistribution": {"positive": 2, "negative": 0, "neutral": 0}
            })
        );
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let store = FakeStore::failing();

        assert!(aggregate(&store, &topics(&["A"])).await.is_err());
    }
}
