use super::types::{ConceptArea, Difficulty, Freshness, ResourceCategory, ResourceRecord};
use std::collections::HashMap;
use std::sync::RwLock;

/// Predicate set for a filtered vault scan.
#[derive(Debug, Clone, Default)]
pub struct BrowseFilter {
    pub category: Option<ResourceCategory>,
    pub concept: Option<ConceptArea>,
    pub min_difficulty: Option<Difficulty>,
    pub max_difficulty: Option<Difficulty>,
    pub resource_type: Option<String>,
    pub freshness: Option<Freshness>,
}

impl BrowseFilter {
    fn matches(&self, record: &ResourceRecord) -> bool {
        if let Some(category) = self.category {
            if !record.categories.contains(&category) {
                return false;
            }
        }
        if let Some(concept) = self.concept {
            if !record.concepts.contains(&concept) {
                return false;
            }
        }
        if let Some(min) = self.min_difficulty {
            if record.difficulty < min {
                return false;
            }
        }
        if let Some(max) = self.max_difficulty {
            if record.difficulty > max {
                return false;
            }
        }
        if let Some(t) = &self.resource_type {
            if !record.resource_type.eq_ignore_ascii_case(t) {
                return false;
            }
        }
        if let Some(freshness) = self.freshness {
            if record.freshness != freshness {
                return false;
            }
        }
        true
    }
}

/// In-memory indexed collection of [`ResourceRecord`], hydrated once at
/// startup. The seeded collection is read-only; session-local
/// additions from the URL-add tool land in a separate append-only layer
/// behind a single exclusive writer lock, so concurrent readers never
/// observe a partially constructed record.
pub struct VaultStore {
    seeded: Vec<ResourceRecord>,
    seeded_index: HashMap<String, usize>,
    session_additions: RwLock<Vec<ResourceRecord>>,
}

impl VaultStore {
    #[must_use]
    pub fn new(seeded: Vec<ResourceRecord>) -> Self {
        let seeded_index = seeded
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self {
            seeded,
            seeded_index,
            session_additions: RwLock::new(Vec::new()),
        }
    }

    /// Combined view of the seeded collection plus any session-local
    /// additions, in that order. Never persisted.
    #[must_use]
    pub fn all(&self) -> Vec<ResourceRecord> {
        let mut out = self.seeded.clone();
        out.extend(self.session_additions.read().unwrap().iter().cloned());
        out
    }

    #[must_use]
    pub fn browse(&self, filter: &BrowseFilter) -> Vec<ResourceRecord> {
        self.all().into_iter().filter(|r| filter.matches(r)).collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<ResourceRecord> {
        if let Some(&idx) = self.seeded_index.get(id) {
            return self.seeded.get(idx).cloned();
        }
        self.session_additions
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Appends a session-local record under a single exclusive writer lock.
    /// Promotion to the persistent seed data is out of scope.
    pub fn add_session_record(&self, record: ResourceRecord) {
        self.session_additions.write().unwrap().push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seeded.len() + self.session_additions.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
