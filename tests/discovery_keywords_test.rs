use atlassian_learning_mcp::discovery::keywords::{infer, tokenize};
use atlassian_learning_mcp::vault::{ConceptArea, ResourceCategory};

#[test]
fn tokenizes_and_drops_short_stopwords() {
    let tokens = tokenize("I want to learn Java concurrency!");
    assert!(tokens.contains(&"java".to_string()));
    assert!(tokens.contains(&"concurrency".to_string()));
    assert!(!tokens.contains(&"to".to_string()));
}

#[test]
fn infers_concept_and_category_from_tokens() {
    let tokens = tokenize("java concurrency");
    let inferences = infer(&tokens);
    assert!(inferences.concepts.contains(&ConceptArea::Concurrency));
    assert!(inferences.categories.contains(&ResourceCategory::Java));
}
