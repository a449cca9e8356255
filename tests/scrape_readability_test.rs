use atlassian_learning_mcp::scrape::readability::{score, to_difficulty};
use atlassian_learning_mcp::vault::Difficulty;

#[test]
fn short_plain_text_scores_beginner() {
    let text = "This is easy. It is short. Anyone can read it.";
    let raw = score(text, 0);
    assert_eq!(to_difficulty(raw), Difficulty::Beginner);
}

#[test]
fn advanced_keywords_push_score_up() {
    let text = "Asynchronous concurrency and lock-free distributed consensus protocols are notoriously subtle to reason about correctly.";
    let raw = score(text, 0);
    assert!(to_difficulty(raw) >= Difficulty::Advanced);
}

#[test]
fn dense_code_blocks_increase_score() {
    let text = "A short example.";
    let low = score(text, 0);
    let high = score(text, 20);
    assert!(high > low);
}
