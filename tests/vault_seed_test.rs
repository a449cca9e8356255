use atlassian_learning_mcp::vault::seed::load_seed;
use atlassian_learning_mcp::vault::Difficulty;
use std::io::Write;

#[test]
fn parses_minimal_seed_json() {
    let json = r#"[{
        "id": "junit5",
        "title": "JUnit 5 User Guide",
        "description": "Official JUnit 5 documentation",
        "url": "https://junit.org/junit5/docs/current/user-guide/",
        "type": "doc",
        "difficulty": "INTERMEDIATE",
        "freshness": "ACTIVELY_MAINTAINED",
        "official": true,
        "categories": ["JAVA"],
        "concepts": ["TESTING"],
        "tags": ["junit", "testing", "java"]
    }]"#;

    let mut fixture = tempfile::NamedTempFile::new().expect("create seed fixture");
    fixture.write_all(json.as_bytes()).expect("write seed fixture");

    let records = load_seed(fixture.path()).expect("load seed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "JUnit 5 User Guide");
    assert!(records[0].official);
    assert_eq!(records[0].difficulty, Difficulty::Intermediate);
}

#[test]
fn missing_seed_file_is_a_config_load_error() {
    let err = load_seed(std::path::Path::new("/nonexistent-vault-seed-for-tests.json")).unwrap_err();
    assert!(err.to_string().contains("vault seed file"));
}
