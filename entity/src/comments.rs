//! SeaORM Entity for the comments table.
//! One row per scraped comment with the label and score assigned upstream.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub comment_id: String,

    pub topic_name: String,

    /// One of `positive`, `negative` or `neutral` when present. See [`crate::sentiment::Sentiment`].
    pub sentiment_label: Option<String>,

    /// Continuous score produced by the sentiment model
    #[sea_orm(column_type = "Double", nullable)]
    pub sentiment_score: Option<f64>,

    /// Stored as text; anything SQLite's `DATE()` understands
    pub comment_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
