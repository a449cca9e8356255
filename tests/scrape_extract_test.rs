use atlassian_learning_mcp::scrape::extract::{derive_title, reading_time_minutes, strip_markup, summarize};

#[test]
fn strips_tags_and_decodes_entities() {
    let html = "<p>Rust &amp; Cargo &nbsp;rock</p>";
    assert_eq!(strip_markup(html), "Rust & Cargo  rock");
}

#[test]
fn derives_title_from_first_heading() {
    let html = "<html><head><title>Page Title</title></head><body><h1>Heading One</h1></body></html>";
    assert_eq!(derive_title(html), "Heading One");
}

#[test]
fn falls_back_to_title_tag_when_no_heading() {
    let html = "<html><head><title>Only Title</title></head><body><p>No heading</p></body></html>";
    assert_eq!(derive_title(html), "Only Title");
}

#[test]
fn reading_time_rounds_up() {
    assert_eq!(reading_time_minutes(225), 1);
    assert_eq!(reading_time_minutes(226), 2);
    assert_eq!(reading_time_minutes(0), 0);
}

#[test]
fn summarize_takes_first_two_sentences() {
    let text = "First sentence. Second sentence. Third sentence that should not appear.";
    assert_eq!(summarize(text), "First sentence. Second sentence.");
}
