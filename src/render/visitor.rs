//! Visitor pattern for customizing text rendering.
//!
//! The visitor pattern allows users to customize how different document
//! nodes are rendered without modifying the core rendering logic.
//!
//! # Example
//!
//! ```
//! use unlexical::render::visitor::{DocumentVisitor, VisitorAction};
//! use unlexical::model::CodeNode;
//!
//! struct OmitCode;
//!
//! impl DocumentVisitor for OmitCode {
//!     fn visit_code(&mut self, _code: &CodeNode) -> VisitorAction {
//!         VisitorAction::Replace("[code]".to_string())
//!     }
//! }
//! ```

use crate::model::{CodeNode, HeadingNode, ImageNode, LinkNode, Node, TextNode};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the node (and its children) with custom output.
    Replace(String),

    /// Skip this node entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the node should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting document nodes during rendering.
///
/// Typed hooks are tried first; when they return `Continue`, `visit_node`
/// gets a chance. All methods return `VisitorAction::Continue` by default.
pub trait DocumentVisitor: Send + Sync {
    /// Called before rendering a text node.
    fn visit_text(&mut self, text: &TextNode) -> VisitorAction {
        let _ = text;
        VisitorAction::Continue
    }

    /// Called before rendering a heading.
    fn visit_heading(&mut self, heading: &HeadingNode) -> VisitorAction {
        let _ = heading;
        VisitorAction::Continue
    }

    /// Called before rendering a code block.
    fn visit_code(&mut self, code: &CodeNode) -> VisitorAction {
        let _ = code;
        VisitorAction::Continue
    }

    /// Called before rendering a link.
    fn visit_link(&mut self, link: &LinkNode) -> VisitorAction {
        let _ = link;
        VisitorAction::Continue
    }

    /// Called before rendering an image.
    fn visit_image(&mut self, image: &ImageNode) -> VisitorAction {
        let _ = image;
        VisitorAction::Continue
    }

    /// Called for every node whose typed hook returned `Continue`.
    ///
    /// # Arguments
    /// * `node` - The node about to be rendered
    /// * `depth` - 0 for top-level blocks
    fn visit_node(&mut self, node: &Node, depth: usize) -> VisitorAction {
        let _ = (node, depth);
        VisitorAction::Continue
    }

    /// Called before a top-level block is rendered.
    fn on_block_start(&mut self, index: usize) {
        let _ = index;
    }

    /// Called after a top-level block is rendered.
    fn on_block_end(&mut self, index: usize) {
        let _ = index;
    }
}

/// Dispatch a node to the matching visitor hooks.
pub(crate) fn dispatch(
    visitor: &mut dyn DocumentVisitor,
    node: &Node,
    depth: usize,
) -> VisitorAction {
    let action = match node {
        Node::Text(text) => visitor.visit_text(text),
        Node::Heading(heading) => visitor.visit_heading(heading),
        Node::Code(code) => visitor.visit_code(code),
        Node::Link(link) => visitor.visit_link(link),
        Node::Image(image) => visitor.visit_image(image),
        _ => VisitorAction::Continue,
    };

    match action {
        VisitorAction::Continue => visitor.visit_node(node, depth),
        other => other,
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that drops code blocks.
#[derive(Debug, Clone, Default)]
pub struct SkipCodeVisitor;

impl DocumentVisitor for SkipCodeVisitor {
    fn visit_code(&mut self, _code: &CodeNode) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Visitor that renders images as their alt text.
#[derive(Debug, Clone, Default)]
pub struct ImageAltTextVisitor;

impl DocumentVisitor for ImageAltTextVisitor {
    fn visit_image(&mut self, image: &ImageNode) -> VisitorAction {
        if image.alt_text.is_empty() {
            VisitorAction::Skip
        } else {
            VisitorAction::Replace(image.alt_text.clone())
        }
    }
}

/// Visitor that appends link targets after link text, as `text (url)`.
#[derive(Debug, Clone, Default)]
pub struct LinkUrlVisitor;

impl DocumentVisitor for LinkUrlVisitor {
    fn visit_link(&mut self, link: &LinkNode) -> VisitorAction {
        let text: String = link
            .element
            .children
            .iter()
            .filter_map(Node::text_content)
            .collect();
        if text.is_empty() || text == link.url {
            VisitorAction::Replace(link.url.clone())
        } else {
            VisitorAction::Replace(format!("{} ({})", text, link.url))
        }
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Number of chained visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Check if no visitors are chained.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn visit_text(&mut self, text: &TextNode) -> VisitorAction {
        first_action(&mut self.visitors, |v| v.visit_text(text))
    }

    fn visit_heading(&mut self, heading: &HeadingNode) -> VisitorAction {
        first_action(&mut self.visitors, |v| v.visit_heading(heading))
    }

    fn visit_code(&mut self, code: &CodeNode) -> VisitorAction {
        first_action(&mut self.visitors, |v| v.visit_code(code))
    }

    fn visit_link(&mut self, link: &LinkNode) -> VisitorAction {
        first_action(&mut self.visitors, |v| v.visit_link(link))
    }

    fn visit_image(&mut self, image: &ImageNode) -> VisitorAction {
        first_action(&mut self.visitors, |v| v.visit_image(image))
    }

    fn visit_node(&mut self, node: &Node, depth: usize) -> VisitorAction {
        first_action(&mut self.visitors, |v| v.visit_node(node, depth))
    }

    fn on_block_start(&mut self, index: usize) {
        for visitor in &mut self.visitors {
            visitor.on_block_start(index);
        }
    }

    fn on_block_end(&mut self, index: usize) {
        for visitor in &mut self.visitors {
            visitor.on_block_end(index);
        }
    }
}

fn first_action<F>(visitors: &mut [Box<dyn DocumentVisitor>], mut call: F) -> VisitorAction
where
    F: FnMut(&mut Box<dyn DocumentVisitor>) -> VisitorAction,
{
    for visitor in visitors.iter_mut() {
        let action = call(visitor);
        if !matches!(action, VisitorAction::Continue) {
            return action;
        }
    }
    VisitorAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;

    #[test]
    fn test_visitor_action_default() {
        let action = VisitorAction::default();
        assert!(matches!(action, VisitorAction::Continue));
    }

    #[test]
    fn test_visitor_action_replacement() {
        assert!(VisitorAction::Continue.replacement().is_none());
        assert!(VisitorAction::Skip.replacement().is_none());
        assert!(VisitorAction::Skip.should_skip());
        assert_eq!(
            VisitorAction::Replace("hello".into()).replacement(),
            Some("hello")
        );
    }

    #[test]
    fn test_image_alt_text_visitor() {
        let mut visitor = ImageAltTextVisitor;
        let action = visitor.visit_image(&ImageNode::new("/a.png", "A boat"));
        assert_eq!(action.replacement(), Some("A boat"));

        let action = visitor.visit_image(&ImageNode::new("/a.png", ""));
        assert!(action.should_skip());
    }

    #[test]
    fn test_link_url_visitor() {
        let mut visitor = LinkUrlVisitor;
        let link = LinkNode {
            url: "https://example.com".to_string(),
            title: None,
            rel: None,
            target: None,
            element: Element::new(vec![Node::text("Example")]),
        };
        assert_eq!(
            visitor.visit_link(&link).replacement(),
            Some("Example (https://example.com)")
        );
    }

    #[test]
    fn test_dispatch_falls_back_to_visit_node() {
        struct DepthRecorder(Vec<usize>);
        impl DocumentVisitor for DepthRecorder {
            fn visit_node(&mut self, _node: &Node, depth: usize) -> VisitorAction {
                self.0.push(depth);
                VisitorAction::Continue
            }
        }

        let mut recorder = DepthRecorder(Vec::new());
        dispatch(&mut recorder, &Node::text("x"), 2);
        assert_eq!(recorder.0, vec![2]);
    }

    #[test]
    fn test_composite_visitor() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(SkipCodeVisitor)
            .with_visitor(DefaultVisitor);
        assert_eq!(composite.len(), 2);

        let code = CodeNode {
            language: None,
            element: Element::new(vec![Node::text("fn main() {}")]),
        };
        assert!(composite.visit_code(&code).should_skip());
        assert!(matches!(
            composite.visit_text(&TextNode::new("x")),
            VisitorAction::Continue
        ));
    }
}
