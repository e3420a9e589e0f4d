//! Plain text rendering for rich-text documents.

use crate::model::{Document, Node};

use super::visitor::{dispatch, DefaultVisitor, DocumentVisitor, VisitorAction};
use super::RenderOptions;

/// Convert a document to plain text.
///
/// Every text node is collected depth-first; the block separator is appended
/// after each top-level node that is not itself a text node.
pub fn to_text(doc: &Document, options: &RenderOptions) -> String {
    to_text_with_visitor(doc, options, &mut DefaultVisitor)
}

/// Convert a document to plain text, letting `visitor` skip or replace nodes.
pub fn to_text_with_visitor(
    doc: &Document,
    options: &RenderOptions,
    visitor: &mut dyn DocumentVisitor,
) -> String {
    let mut output = String::new();

    for (index, block) in doc.blocks().iter().enumerate() {
        visitor.on_block_start(index);
        let rendered = render_node(block, 0, visitor, &mut output);
        if rendered && !block.is_text() {
            output.push_str(&options.block_separator);
        }
        visitor.on_block_end(index);
    }

    if options.trim {
        output.trim().to_string()
    } else {
        output
    }
}

/// Render one node into `output`. Returns `false` if the visitor skipped it.
fn render_node(
    node: &Node,
    depth: usize,
    visitor: &mut dyn DocumentVisitor,
    output: &mut String,
) -> bool {
    match dispatch(visitor, node, depth) {
        VisitorAction::Skip => return false,
        VisitorAction::Replace(content) => {
            output.push_str(&content);
            return true;
        }
        VisitorAction::Continue => {}
    }

    if let Some(text) = node.text_content() {
        output.push_str(text);
    }
    if let Some(children) = node.children() {
        for child in children {
            render_node(child, depth + 1, visitor, output);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeNode, Element, HeadingTag};
    use crate::render::visitor::SkipCodeVisitor;

    fn sample() -> Document {
        Document::from_blocks(vec![
            Node::heading(HeadingTag::H1, vec![Node::text("Title")]),
            Node::paragraph(vec![Node::text("Hello, "), Node::text("world!")]),
            Node::Code(CodeNode {
                language: Some("rust".to_string()),
                element: Element::new(vec![Node::text("let x = 1;")]),
            }),
        ])
    }

    #[test]
    fn test_to_text() {
        let text = to_text(&sample(), &RenderOptions::default());
        assert_eq!(text, "Title\n\nHello, world!\n\nlet x = 1;");
    }

    #[test]
    fn test_custom_separator_without_trim() {
        let options = RenderOptions::new()
            .with_block_separator("|")
            .with_trim(false);
        let text = to_text(&sample(), &options);
        assert_eq!(text, "Title|Hello, world!|let x = 1;|");
    }

    #[test]
    fn test_skipped_blocks_add_no_separator() {
        let options = RenderOptions::default();
        let text = to_text_with_visitor(&sample(), &options, &mut SkipCodeVisitor);
        assert_eq!(text, "Title\n\nHello, world!");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_text(&Document::new(), &RenderOptions::default()), "");
    }
}
