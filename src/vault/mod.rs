//! In-memory indexed collection of learning-resource records with filtered
//! browse.

pub mod seed;
pub mod store;
pub mod types;

pub use store::{BrowseFilter, VaultStore};
pub use types::{ConceptArea, Difficulty, Freshness, ResourceCategory, ResourceRecord, ScoredResource};
