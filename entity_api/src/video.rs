//! Queries over the videos table.

use super::error::Error;
use entity::videos::{Column, Entity};
use log::*;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
struct TopicName {
    topic_name: String,
}

/// Returns every distinct topic name, sorted ascending.
pub async fn find_distinct_topic_names(db: &impl ConnectionTrait) -> Result<Vec<String>, Error> {
    debug!("Finding distinct topic names");

    let topics = Entity::find()
        .select_only()
        .column(Column::TopicName)
        .distinct()
        .filter(Column::TopicName.is_not_null())
        .order_by_asc(Column::TopicName)
        .into_model::<TopicName>()
        .all(db)
        .await?;

    Ok(topics.into_iter().map(|row| row.topic_name).collect())
}
