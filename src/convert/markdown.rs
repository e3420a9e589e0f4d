//! Markdown to rich-text conversion.
//!
//! Markdown is parsed with `pulldown-cmark` and the event stream is folded
//! into document nodes with an explicit stack of open containers.

use std::fmt;
use std::sync::Arc;

use linkify::{LinkFinder, LinkKind};
use log::warn;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use crate::model::{
    CodeNode, Document, Element, HeadingTag, ImageNode, LinkNode, ListItemNode, ListNode,
    ListType, Node, TextFormat, TextNode,
};

/// Default `maxWidth` given to converted images.
pub const DEFAULT_IMAGE_MAX_WIDTH: u32 = 800;

type ImageResolver = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options for converting Markdown.
#[derive(Clone)]
pub struct MarkdownOptions {
    /// Prefix added to relative image paths
    pub image_path_prefix: Option<String>,

    /// `maxWidth` given to images
    pub image_max_width: u32,

    /// Recognize `~~strikethrough~~`
    pub strikethrough: bool,

    /// Turn bare URLs and email addresses in text into links
    pub linkify: bool,

    image_resolver: Option<ImageResolver>,
}

impl MarkdownOptions {
    /// Create new Markdown options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix for relative image paths (e.g., "/media/").
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = Some(prefix.into());
        self
    }

    /// Set a function that maps every image path to its final URL.
    ///
    /// Takes precedence over the image prefix.
    pub fn with_image_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.image_resolver = Some(Arc::new(resolver));
        self
    }

    /// Set the `maxWidth` given to images.
    pub fn with_image_max_width(mut self, width: u32) -> Self {
        self.image_max_width = width;
        self
    }

    /// Enable or disable strikethrough syntax.
    pub fn with_strikethrough(mut self, enabled: bool) -> Self {
        self.strikethrough = enabled;
        self
    }

    /// Enable or disable linking of bare URLs and email addresses.
    pub fn with_linkify(mut self, enabled: bool) -> Self {
        self.linkify = enabled;
        self
    }

    /// Map an image path from the Markdown source to the stored URL.
    pub fn resolve_image(&self, src: &str) -> String {
        if let Some(ref resolver) = self.image_resolver {
            return resolver(src);
        }
        match self.image_path_prefix {
            Some(ref prefix) if is_relative_path(src) => format!("{}{}", prefix, src),
            _ => src.to_string(),
        }
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            image_path_prefix: None,
            image_max_width: DEFAULT_IMAGE_MAX_WIDTH,
            strikethrough: true,
            linkify: true,
            image_resolver: None,
        }
    }
}

impl fmt::Debug for MarkdownOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownOptions")
            .field("image_path_prefix", &self.image_path_prefix)
            .field("image_max_width", &self.image_max_width)
            .field("strikethrough", &self.strikethrough)
            .field("linkify", &self.linkify)
            .field("image_resolver", &self.image_resolver.is_some())
            .finish()
    }
}

fn is_relative_path(src: &str) -> bool {
    !(src.is_empty() || src.starts_with('/') || src.starts_with("data:") || src.contains("://"))
}

/// Convert Markdown to a document.
///
/// # Example
///
/// ```
/// use unlexical::convert::{markdown_to_document, MarkdownOptions};
/// use unlexical::model::Node;
///
/// let doc = markdown_to_document("# Hello\n\nThis is **bold** text", &MarkdownOptions::default());
/// assert!(matches!(doc.blocks()[0], Node::Heading(_)));
/// assert!(matches!(doc.blocks()[1], Node::Paragraph(_)));
/// ```
pub fn markdown_to_document(markdown: &str, options: &MarkdownOptions) -> Document {
    MarkdownConverter::new(options.clone()).convert(markdown)
}

/// Markdown converter.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: MarkdownOptions,
}

impl MarkdownConverter {
    /// Create a new Markdown converter.
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Convert Markdown to a document.
    ///
    /// Empty input yields a document with a single empty paragraph.
    pub fn convert(&self, markdown: &str) -> Document {
        if markdown.is_empty() {
            return empty_document();
        }

        let mut parser_options = Options::empty();
        if self.options.strikethrough {
            parser_options.insert(Options::ENABLE_STRIKETHROUGH);
        }

        let mut builder = TreeBuilder::new(&self.options);
        for event in Parser::new_ext(markdown, parser_options) {
            builder.handle(event);
        }
        builder.finish()
    }
}

/// A document with one paragraph holding one empty text node.
pub fn empty_document() -> Document {
    Document::from_blocks(vec![Node::paragraph(vec![Node::text("")])])
}

/// An open container while folding the event stream.
enum Frame {
    Paragraph(Vec<Node>),
    Heading(HeadingTag, Vec<Node>),
    Quote(Vec<Node>),
    List {
        start: Option<u64>,
        items: Vec<Node>,
    },
    Item(Vec<Node>),
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Link {
        url: String,
        title: Option<String>,
        children: Vec<Node>,
    },
    Image {
        src: String,
        alt: String,
    },
    Format(TextFormat),
    Ignored,
}

struct TreeBuilder<'a> {
    options: &'a MarkdownOptions,
    blocks: Vec<Node>,
    stack: Vec<Frame>,
}

impl<'a> TreeBuilder<'a> {
    fn new(options: &'a MarkdownOptions) -> Self {
        Self {
            options,
            blocks: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(_) => {
                if let Some(frame) = self.stack.pop() {
                    self.close(frame);
                }
            }
            Event::Text(text) => {
                let format = self.current_format();
                if self.options.linkify && self.accepts_links() {
                    self.push_linkified(&text, format);
                } else {
                    self.push_text(&text, format);
                }
            }
            Event::Code(code) => self.push_text(&code, self.current_format() | TextFormat::CODE),
            // Soft breaks join lines of the same paragraph.
            Event::SoftBreak => self.push_text(" ", self.current_format()),
            Event::HardBreak => self.push_inline(Node::line_break()),
            Event::Rule => self.push_block(Node::horizontal_rule()),
            Event::Html(html) | Event::InlineHtml(html) => {
                warn!("ignoring raw HTML in Markdown: {}", html.trim());
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph(Vec::new()),
            Tag::Heading { level, .. } => Frame::Heading(heading_tag(level), Vec::new()),
            Tag::BlockQuote(_) => Frame::Quote(Vec::new()),
            Tag::CodeBlock(kind) => Frame::CodeBlock {
                language: match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_string)
                    }
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::List(start) => Frame::List {
                start,
                items: Vec::new(),
            },
            Tag::Item => Frame::Item(Vec::new()),
            Tag::Emphasis => Frame::Format(TextFormat::ITALIC),
            Tag::Strong => Frame::Format(TextFormat::BOLD),
            Tag::Strikethrough => Frame::Format(TextFormat::STRIKETHROUGH),
            Tag::Link {
                dest_url, title, ..
            } => Frame::Link {
                url: dest_url.to_string(),
                title: Some(title.to_string()).filter(|t| !t.is_empty()),
                children: Vec::new(),
            },
            Tag::Image { dest_url, .. } => Frame::Image {
                src: self.options.resolve_image(&dest_url),
                alt: String::new(),
            },
            _ => Frame::Ignored,
        };
        self.stack.push(frame);
    }

    fn close(&mut self, frame: Frame) {
        match frame {
            Frame::Paragraph(children) => {
                // List items hold their inline content directly.
                if let Some(Frame::Item(item)) = self.container_mut() {
                    item.extend(children);
                } else {
                    self.push_block(Node::paragraph(non_empty(children)));
                }
            }
            Frame::Heading(tag, children) => {
                self.push_block(Node::heading(tag, non_empty(children)));
            }
            Frame::Quote(children) => {
                let children = if children.is_empty() {
                    vec![Node::paragraph(non_empty(Vec::new()))]
                } else {
                    children
                };
                self.push_block(Node::quote(children));
            }
            Frame::List { start, items } => {
                let list_type = if start.is_some() {
                    ListType::Number
                } else {
                    ListType::Bullet
                };
                let start = start.and_then(|n| u32::try_from(n).ok()).unwrap_or(1);
                let items = items
                    .into_iter()
                    .zip(start..)
                    .map(|(item, value)| match item {
                        Node::ListItem(mut item) => {
                            item.value = value;
                            Node::ListItem(item)
                        }
                        other => other,
                    })
                    .collect();
                self.push_block(Node::List(ListNode::new(list_type, start, items)));
            }
            Frame::Item(children) => {
                let item = Node::ListItem(ListItemNode {
                    value: 1,
                    element: Element::new(non_empty(children)),
                });
                match self.stack.last_mut() {
                    Some(Frame::List { items, .. }) => items.push(item),
                    _ => self.push_block(item),
                }
            }
            Frame::CodeBlock { language, mut code } => {
                if code.ends_with('\n') {
                    code.pop();
                }
                self.push_block(Node::Code(CodeNode {
                    language,
                    element: Element::new(vec![Node::text(code)]),
                }));
            }
            Frame::Link {
                url,
                title,
                children,
            } => {
                let children = if children.is_empty() {
                    vec![Node::text(url.clone())]
                } else {
                    children
                };
                self.push_inline(Node::Link(LinkNode {
                    url,
                    title,
                    rel: None,
                    target: None,
                    element: Element::new(children),
                }));
            }
            Frame::Image { src, alt } => {
                let mut image = ImageNode::new(src, alt);
                image.max_width = Some(self.options.image_max_width);
                image.show_caption = Some(false);
                self.push_inline(Node::Image(image));
            }
            Frame::Format(_) | Frame::Ignored => {}
        }
    }

    fn current_format(&self) -> TextFormat {
        self.stack
            .iter()
            .fold(TextFormat::NONE, |format, frame| match frame {
                Frame::Format(flag) => format | *flag,
                _ => format,
            })
    }

    /// The innermost open frame that is not a format marker.
    fn container(&self) -> Option<&Frame> {
        self.stack
            .iter()
            .rev()
            .find(|frame| !matches!(frame, Frame::Format(_)))
    }

    /// Whether text at this point may be split into autolinks.
    fn accepts_links(&self) -> bool {
        matches!(
            self.container(),
            Some(Frame::Paragraph(_)) | Some(Frame::Heading(..)) | Some(Frame::Item(_))
        )
    }

    fn push_linkified(&mut self, text: &str, format: TextFormat) {
        let finder = LinkFinder::new();
        for span in finder.spans(text) {
            let url = match span.kind() {
                Some(LinkKind::Url) => span.as_str().to_string(),
                Some(LinkKind::Email) => format!("mailto:{}", span.as_str()),
                _ => {
                    self.push_text(span.as_str(), format);
                    continue;
                }
            };
            self.push_inline(Node::Link(LinkNode {
                url,
                title: None,
                rel: None,
                target: None,
                element: Element::new(vec![Node::Text(TextNode::with_format(
                    span.as_str(),
                    format,
                ))]),
            }));
        }
    }

    /// The innermost open frame that is not a format marker.
    fn container_mut(&mut self) -> Option<&mut Frame> {
        self.stack
            .iter_mut()
            .rev()
            .find(|frame| !matches!(frame, Frame::Format(_)))
    }

    fn push_text(&mut self, text: &str, format: TextFormat) {
        let children = match self.container_mut() {
            Some(Frame::CodeBlock { code, .. }) => {
                code.push_str(text);
                return;
            }
            Some(Frame::Image { alt, .. }) => {
                alt.push_str(text);
                return;
            }
            Some(Frame::Paragraph(children))
            | Some(Frame::Heading(_, children))
            | Some(Frame::Item(children))
            | Some(Frame::Link { children, .. }) => children,
            _ => return,
        };

        let node = TextNode::with_format(text, format);
        if let Some(Node::Text(last)) = children.last_mut() {
            if last.can_merge(&node) {
                last.text.push_str(&node.text);
                return;
            }
        }
        children.push(Node::Text(node));
    }

    fn push_inline(&mut self, node: Node) {
        match self.container_mut() {
            Some(Frame::Paragraph(children))
            | Some(Frame::Heading(_, children))
            | Some(Frame::Item(children))
            | Some(Frame::Link { children, .. }) => children.push(node),
            _ => {}
        }
    }

    fn push_block(&mut self, node: Node) {
        match self.container_mut() {
            Some(Frame::Quote(children)) | Some(Frame::Item(children)) => children.push(node),
            Some(Frame::Ignored) => {}
            Some(_) => warn!("dropping misplaced {} block", node.kind()),
            None => self.blocks.push(node),
        }
    }

    fn finish(mut self) -> Document {
        while let Some(frame) = self.stack.pop() {
            self.close(frame);
        }
        if self.blocks.is_empty() {
            return empty_document();
        }
        Document::from_blocks(self.blocks)
    }
}

fn non_empty(children: Vec<Node>) -> Vec<Node> {
    if children.is_empty() {
        vec![Node::text("")]
    } else {
        children
    }
}

fn heading_tag(level: HeadingLevel) -> HeadingTag {
    match level {
        HeadingLevel::H1 => HeadingTag::H1,
        HeadingLevel::H2 => HeadingTag::H2,
        HeadingLevel::H3 => HeadingTag::H3,
        HeadingLevel::H4 => HeadingTag::H4,
        HeadingLevel::H5 => HeadingTag::H5,
        HeadingLevel::H6 => HeadingTag::H6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(markdown: &str) -> Document {
        markdown_to_document(markdown, &MarkdownOptions::default())
    }

    fn runs(node: &Node) -> Vec<(String, u32)> {
        node.children()
            .unwrap()
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some((text.text.clone(), text.format.bits())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let doc = convert("");
        assert_eq!(doc, empty_document());
        assert_eq!(convert("   \n"), empty_document());
    }

    #[test]
    fn test_heading_and_paragraph() {
        let doc = convert("# Hello\n\nThis is **bold** text");
        assert_eq!(doc.block_count(), 2);

        match &doc.blocks()[0] {
            Node::Heading(heading) => assert_eq!(heading.tag, HeadingTag::H1),
            other => panic!("unexpected node: {:?}", other),
        }
        assert_eq!(
            runs(&doc.blocks()[1]),
            vec![
                ("This is ".to_string(), 0),
                ("bold".to_string(), 1),
                (" text".to_string(), 0)
            ]
        );
    }

    #[test]
    fn test_nested_formats_combine() {
        let doc = convert("***both*** ~~gone~~ `code`");
        let runs = runs(&doc.blocks()[0]);
        assert_eq!(runs[0], ("both".to_string(), 3));
        assert_eq!(runs[2], ("gone".to_string(), 4));
        assert_eq!(runs[4], ("code".to_string(), 16));
    }

    #[test]
    fn test_soft_break_joins_lines() {
        let doc = convert("one\ntwo");
        assert_eq!(runs(&doc.blocks()[0]), vec![("one two".to_string(), 0)]);
    }

    #[test]
    fn test_code_block_language() {
        let doc = convert("```rust extra\nfn main() {}\n```");
        match &doc.blocks()[0] {
            Node::Code(code) => {
                assert_eq!(code.language.as_deref(), Some("rust"));
                assert_eq!(code.element.children[0].text_content(), Some("fn main() {}"));
            }
            other => panic!("unexpected node: {:?}", other),
        }

        let doc = convert("    indented");
        match &doc.blocks()[0] {
            Node::Code(code) => assert_eq!(code.language, None),
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_ordered_list_start() {
        let doc = convert("3. three\n4. four");
        match &doc.blocks()[0] {
            Node::List(list) => {
                assert_eq!(list.list_type, ListType::Number);
                assert_eq!(list.start, 3);
                let values: Vec<u32> = list
                    .element
                    .children
                    .iter()
                    .filter_map(|item| match item {
                        Node::ListItem(item) => Some(item.value),
                        _ => None,
                    })
                    .collect();
                assert_eq!(values, vec![3, 4]);
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_image_prefix_and_resolver() {
        let options = MarkdownOptions::new().with_image_prefix("/media/");
        assert_eq!(options.resolve_image("boat.png"), "/media/boat.png");
        assert_eq!(options.resolve_image("/abs.png"), "/abs.png");
        assert_eq!(
            options.resolve_image("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );

        let options = options.with_image_resolver(|src| format!("media:{}", src));
        assert_eq!(options.resolve_image("/abs.png"), "media:/abs.png");
    }

    #[test]
    fn test_linkify_skips_code_and_links() {
        let doc = convert("`https://a.io` [x](https://b.io)\n\n    https://c.io");
        let inlines = doc.blocks()[0].children().unwrap();
        assert_eq!(inlines[0].text_content(), Some("https://a.io"));
        match &inlines[2] {
            Node::Link(link) => assert_eq!(link.url, "https://b.io"),
            other => panic!("unexpected node: {:?}", other),
        }
        assert!(matches!(doc.blocks()[1], Node::Code(_)));
    }

    #[test]
    fn test_html_is_ignored() {
        let doc = convert("<div>raw</div>\n\ntext");
        assert_eq!(doc.block_count(), 1);
        assert_eq!(runs(&doc.blocks()[0]), vec![("text".to_string(), 0)]);
    }
}
