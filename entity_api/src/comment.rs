//! Grouped aggregate queries over the comments table.

use super::error::Error;
use entity::comments::{Column, Entity};
use log::*;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Number of comments for one `(topic, label)` pair.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SentimentCount {
    pub topic_name: String,
    pub sentiment_label: Option<String>,
    pub count: i64,
}

/// Mean sentiment score of one topic on one calendar day.
///
/// `date` is `None` when SQLite could not interpret the stored comment date.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DailyMeanScore {
    pub date: Option<String>,
    pub topic_name: String,
    pub avg_score: Option<f64>,
}

fn comment_day() -> SimpleExpr {
    Expr::cust(r#"DATE("comments"."comment_date")"#)
}

/// Counts comments per `(topic, sentiment label)` for the given topics.
pub async fn count_by_topic_and_label(
    db: &impl ConnectionTrait,
    topics: &[String],
) -> Result<Vec<SentimentCount>, Error> {
    debug!("Counting comments by sentiment label for topics: {topics:?}");

    Ok(Entity::find()
        .select_only()
        .column(Column::TopicName)
        .column(Column::SentimentLabel)
        .column_as(Expr::cust("COUNT(*)"), "count")
        .filter(Column::TopicName.is_in(topics.iter().cloned()))
        .group_by(Column::TopicName)
        .group_by(Column::SentimentLabel)
        .into_model::<SentimentCount>()
        .all(db)
        .await?)
}

/// Averages the sentiment score per calendar day and topic, ordered by day.
/// Comments without a score or a date are left out.
pub async fn mean_score_by_day_and_topic(
    db: &impl ConnectionTrait,
    topics: &[String],
) -> Result<Vec<DailyMeanScore>, Error> {
    debug!("Averaging daily sentiment scores for topics: {topics:?}");

    Ok(Entity::find()
        .select_only()
        .column_as(comment_day(), "date")
        .column(Column::TopicName)
        .column_as(
            Expr::cust(r#"AVG(CAST("comments"."sentiment_score" AS FLOAT))"#),
            "avg_score",
        )
        .filter(Column::TopicName.is_in(topics.iter().cloned()))
        .filter(Column::SentimentScore.is_not_null())
        .filter(Column::CommentDate.is_not_null())
        .group_by(comment_day())
        .group_by(Column::TopicName)
        .order_by_asc(Expr::cust("date"))
        .into_model::<DailyMeanScore>()
        .all(db)
        .await?)
}
