//! Read queries against the sentiment dataset.
//!
//! Each module owns the queries for one table and returns plain row structs
//! (`FromQueryResult`) shaped exactly like the grouped result sets, leaving
//! any reshaping to the `domain` layer.

pub use entity::{comments, sentiment, videos, wordclouds};

pub mod comment;
pub mod error;
pub mod video;
pub mod wordcloud;
