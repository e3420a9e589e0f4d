//! Integration tests for fail-soft text extraction.

use serde_json::{json, Value};
use unlexical::render::{extract_field_text, to_text, to_value};
use unlexical::{build_document, extract_text, RenderOptions};

#[test]
fn test_strings_are_returned_unchanged() {
    for s in ["", "a", "Hello, world", "  two  spaces ", "multi\nline\n", "🚤 boat"] {
        assert_eq!(extract_text(&json!(s)), s);
    }
}

#[test]
fn test_non_document_values_yield_empty() {
    assert_eq!(extract_text(&Value::Null), "");
    assert_eq!(extract_field_text(None), "");
    assert_eq!(extract_text(&json!(42)), "");
    assert_eq!(extract_text(&json!([])), "");
    assert_eq!(extract_text(&json!(false)), "");
}

#[test]
fn test_documents_without_children_yield_empty() {
    assert_eq!(extract_text(&json!({"root": {}})), "");
    assert_eq!(extract_text(&json!({"root": {"children": []}})), "");
    assert_eq!(extract_text(&json!({"root": null})), "");
    assert_eq!(extract_text(&json!({"root": {"children": "nope"}})), "");
}

#[test]
fn test_runs_within_a_block_are_concatenated() {
    let value = json!({"root": {"children": [
        {"children": [{"text": "Hello"}, {"text": "World"}]}
    ]}});
    assert_eq!(extract_text(&value), "HelloWorld");
}

#[test]
fn test_blocks_are_joined_with_one_space() {
    let value = json!({"root": {"children": [
        {"type": "paragraph", "children": [{"type": "text", "text": "A"}]},
        {"type": "paragraph", "children": [{"type": "text", "text": "B"}]}
    ]}});
    assert_eq!(extract_text(&value), "A B");
}

#[test]
fn test_build_then_extract_round_trip() {
    for s in ["plain text", "x", "# heading", "line one\nline two", "tab\there"] {
        let value = to_value(&build_document(s)).unwrap();
        assert_eq!(extract_text(&value), s);
    }
}

#[test]
fn test_build_empty_then_extract() {
    let value = to_value(&build_document("")).unwrap();
    assert_eq!(value["root"]["children"][0]["children"][0]["text"], "");
    assert_eq!(extract_text(&value), "");
}

#[test]
fn test_malformed_block_does_not_panic() {
    let value = json!({"root": {"children": [{"children": null}]}});
    assert_eq!(extract_text(&value), "");

    let value = json!({"root": {"children": [
        {"children": [{"text": "kept"}]},
        {"children": 7},
        null,
        {"type": "paragraph", "children": {"text": "not a list"}}
    ]}});
    assert_eq!(extract_text(&value), "kept");
}

#[test]
fn test_heading_tag_does_not_affect_extraction() {
    let value = json!({"root": {"children": [
        {"type": "paragraph", "children": [{"text": "A"}]},
        {"type": "heading", "tag": "h7", "children": [{"type": "text", "text": "Title"}]},
        {"type": "heading", "children": [{"type": "text", "text": "NoTag"}]}
    ]}});
    assert_eq!(extract_text(&value), "A Title NoTag");
}

#[test]
fn test_to_text_of_built_document_is_trimmed_input() {
    let options = RenderOptions::default();
    for s in ["plain text", "  padded  ", "line one\nline two\n", "", " \n "] {
        assert_eq!(to_text(&build_document(s), &options), s.trim());
    }
}

#[test]
fn test_editor_output_with_other_node_kinds() {
    let value = json!({"root": {"type": "root", "children": [
        {"type": "heading", "tag": "h2", "children": [{"type": "text", "text": "Specs"}]},
        {"type": "paragraph", "children": [
            {"type": "text", "text": "Length "},
            {"type": "link", "url": "/a", "children": [{"type": "text", "text": "42m"}]},
            {"type": "text", "text": "!"}
        ]},
        {"type": "horizontalrule"},
        {"type": "custom-widget", "children": [{"type": "text", "text": "widget"}]}
    ]}});
    assert_eq!(extract_text(&value), "Specs Length ! widget");
}

#[test]
fn test_extraction_is_concurrent_safe() {
    let value = json!({"root": {"children": [{"children": [{"text": "shared"}]}]}});
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = value.clone();
            std::thread::spawn(move || extract_text(&value))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "shared");
    }
}
