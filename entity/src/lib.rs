//! SeaORM entities for the sentiment dataset.
//!
//! Every table is populated by an external labeling pipeline and is read-only
//! from this service's point of view, so none of the entities define relations
//! or active model behavior beyond the defaults.

pub mod comments;
pub mod sentiment;
pub mod videos;
pub mod wordclouds;
