use atlassian_learning_mcp::vault::{BrowseFilter, Difficulty, Freshness, ResourceCategory, ResourceRecord, VaultStore};
use std::collections::BTreeSet;

fn sample(id: &str, category: ResourceCategory) -> ResourceRecord {
    ResourceRecord {
        id: id.to_string(),
        title: format!("Title {id}"),
        description: String::new(),
        url: String::new(),
        resource_type: "article".to_string(),
        difficulty: Difficulty::Beginner,
        freshness: Freshness::Evergreen,
        language_scope: String::new(),
        official: false,
        free: true,
        author: String::new(),
        categories: BTreeSet::from([category]),
        concepts: BTreeSet::new(),
        tags: Vec::new(),
    }
}

#[test]
fn lookup_by_id_finds_seeded_record() {
    let store = VaultStore::new(vec![sample("a", ResourceCategory::Java)]);
    assert!(store.get("a").is_some());
    assert!(store.get("missing").is_none());
}

#[test]
fn browse_filters_by_category() {
    let store = VaultStore::new(vec![
        sample("a", ResourceCategory::Java),
        sample("b", ResourceCategory::Python),
    ]);
    let filter = BrowseFilter {
        category: Some(ResourceCategory::Python),
        ..Default::default()
    };
    let results = store.browse(&filter);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "b");
}

#[test]
fn session_addition_is_visible_but_not_in_seeded_index() {
    let store = VaultStore::new(vec![sample("a", ResourceCategory::Java)]);
    store.add_session_record(sample("b", ResourceCategory::Python));
    assert_eq!(store.len(), 2);
    assert!(store.get("b").is_some());
}
