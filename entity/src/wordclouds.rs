//! SeaORM Entity for the wordclouds table.
//! Holds at most one precomputed word frequency blob per topic.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wordclouds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub topic_name: String,

    /// JSON object mapping each word to its frequency
    #[sea_orm(column_type = "Text", nullable)]
    pub word_freqs: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
