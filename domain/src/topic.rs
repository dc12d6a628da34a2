use crate::error::Error;
use crate::store::SentimentStore;
use log::*;

/// Lists every topic available for selection, sorted ascending.
pub async fn find_all<S>(store: &S) -> Result<Vec<String>, Error>
where
    S: SentimentStore + ?Sized,
{
    let topics = store.topic_names().await?;
    debug!("Found {} topics", topics.len());
    Ok(topics)
}
