//! Benchmarks for unlexical extraction and conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic editor documents of growing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

/// Creates a synthetic document with the given number of paragraphs.
fn create_test_document(paragraph_count: usize) -> Value {
    let children: Vec<Value> = (0..paragraph_count)
        .map(|i| {
            json!({
                "type": "paragraph",
                "children": [
                    {"type": "text", "text": format!("Paragraph {} opens with ", i), "format": 0},
                    {"type": "text", "text": "bold words", "format": 1},
                    {"type": "text", "text": " and closes plainly.", "format": 0}
                ],
                "direction": "ltr",
                "format": "",
                "indent": 0,
                "version": 1
            })
        })
        .collect();

    json!({"root": {"type": "root", "children": children}})
}

/// Creates Markdown with the given number of sections.
fn create_test_markdown(section_count: usize) -> String {
    let mut markdown = String::new();
    for i in 0..section_count {
        markdown.push_str(&format!("## Section {}\n\n", i));
        markdown.push_str("Some **bold** and *italic* text with a [link](https://example.com).\n\n");
        markdown.push_str("- first\n- second\n\n");
    }
    markdown
}

/// Benchmark summary extraction at various sizes.
fn bench_extract_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_text");

    for paragraph_count in [1, 10, 100].iter() {
        let value = create_test_document(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| unlexical::extract_text(black_box(&value)));
        });
    }

    group.finish();
}

/// Benchmark the plain string fast path.
fn bench_extract_plain(c: &mut Criterion) {
    let value = json!("Already plain text, returned unchanged.");

    c.bench_function("extract_plain_string", |b| {
        b.iter(|| unlexical::extract_text(black_box(&value)));
    });
}

/// Benchmark building and serializing a document.
fn bench_build_document(c: &mut Criterion) {
    let text = "A short product description. ".repeat(20);

    c.bench_function("build_document_to_json", |b| {
        b.iter(|| {
            let doc = unlexical::build_document(black_box(&text));
            unlexical::render::to_json(&doc, unlexical::JsonFormat::Compact)
        });
    });
}

/// Benchmark Markdown conversion.
fn bench_markdown(c: &mut Criterion) {
    let markdown = create_test_markdown(20);
    let options = unlexical::MarkdownOptions::default();

    c.bench_function("markdown_to_document", |b| {
        b.iter(|| unlexical::markdown_to_document(black_box(&markdown), &options));
    });
}

criterion_group!(
    benches,
    bench_extract_text,
    bench_extract_plain,
    bench_build_document,
    bench_markdown,
);
criterion_main!(benches);
