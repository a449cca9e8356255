//! Relevance-scoring discovery engine over the local learning-resource
//! vault: query classification, keyword inference, multi-
//! dimension scoring, ordering/cutoff, and suggestion generation.

pub mod classify;
pub mod engine;
pub mod keywords;
pub mod scoring;

pub use classify::SearchMode;
pub use engine::{discover, DiscoveryResult};
