//! Embedded JSON extraction

use keyward_accountkit::extract::{balanced_objects, extract_json_object};

#[test]
fn test_object_inside_framing() {
    let text = "\u{fffd}\u{fffd}b{\"a\":1}\u{fffd}sig";
    assert_eq!(extract_json_object(text), Some("{\"a\":1}"));
}

#[test]
fn test_nested_object() {
    let text = "x{\"a\":{\"b\":{\"c\":2}}}y";
    assert_eq!(extract_json_object(text), Some("{\"a\":{\"b\":{\"c\":2}}}"));
}

#[test]
fn test_braces_inside_strings() {
    let text = r#"{"key":"-----}{-----","escaped":"\"}"}"#;
    assert_eq!(extract_json_object(text), Some(text));
}

#[test]
fn test_trailing_object_not_swallowed() {
    let text = "{\"kit\":true} {\"meta\":1}";
    assert_eq!(extract_json_object(text), Some("{\"kit\":true}"));
}

#[test]
fn test_unclosed_prefix_brace_is_skipped() {
    let text = "{ garbage {\"kit\":true}";
    assert_eq!(extract_json_object(text), Some("{\"kit\":true}"));
}

#[test]
fn test_valid_json_preferred_over_earlier_span() {
    let text = "{not json} {\"kit\":true}";
    assert_eq!(extract_json_object(text), Some("{\"kit\":true}"));
}

#[test]
fn test_invalid_span_returned_when_nothing_parses() {
    assert_eq!(extract_json_object("a {not json} b"), Some("{not json}"));
}

#[test]
fn test_no_object() {
    assert_eq!(extract_json_object("no braces at all"), None);
    assert_eq!(extract_json_object("} only closing {"), None);
}

#[test]
fn test_every_balanced_span_is_listed() {
    let spans: Vec<&str> = balanced_objects("{a{b}}").collect();
    assert_eq!(spans, vec!["{a{b}}", "{b}"]);
}
