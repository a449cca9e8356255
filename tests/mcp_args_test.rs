use atlassian_learning_mcp::mcp::args::{optional_u32, require, require_u64};
use std::collections::HashMap;

#[test]
fn missing_required_argument_names_the_field() {
    let args = HashMap::new();
    let err = require(&args, "prId").unwrap_err();
    assert_eq!(err.to_string(), "argument error: Missing required argument: 'prId'");
}

#[test]
fn blank_value_is_treated_as_missing() {
    let mut args = HashMap::new();
    args.insert("workspace".to_string(), "   ".to_string());
    assert!(require(&args, "workspace").is_err());
}

#[test]
fn unparseable_numeric_argument_names_the_field() {
    let mut args = HashMap::new();
    args.insert("prId".to_string(), "not-a-number".to_string());
    let err = require_u64(&args, "prId").unwrap_err();
    assert!(err.to_string().contains("prId"));
}

#[test]
fn optional_numeric_falls_back_to_default() {
    let args = HashMap::new();
    assert_eq!(optional_u32(&args, "limit", 10).unwrap(), 10);
}
