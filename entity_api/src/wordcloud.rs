//! Queries over the wordclouds table.

use super::error::Error;
use entity::wordclouds::{Column, Entity};
use log::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter, QuerySelect};

/// Raw, still serialized word frequencies stored for a topic.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct WordFrequencyBlob {
    pub topic_name: String,
    pub word_freqs: Option<String>,
}

/// Finds the stored word frequency blobs for the given topics. Topics
/// without a stored row are simply absent from the result.
pub async fn find_by_topic_names(
    db: &impl ConnectionTrait,
    topics: &[String],
) -> Result<Vec<WordFrequencyBlob>, Error> {
    debug!("Finding word frequency blobs for topics: {topics:?}");

    Ok(Entity::find()
        .select_only()
        .column(Column::TopicName)
        .column(Column::WordFreqs)
        .filter(Column::TopicName.is_in(topics.iter().cloned()))
        .into_model::<WordFrequencyBlob>()
        .all(db)
        .await?)
}
