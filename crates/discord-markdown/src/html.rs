//! HTML parsing support.
//!
//! This module parses HTML fragments with scraper and copies the result into
//! the owned [`Node`] tree used by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;
use crate::{ConvertError, Result};

/// Parse an HTML fragment into a Node tree.
///
/// The returned node is a synthesized document root. The parser recovers from
/// malformed markup on its own, so this never fails.
///
/// # Example
///
/// ```rust
/// use discord_markdown::parse_html;
///
/// let doc = parse_html("<p>Hello <code>World</code></p>");
/// assert_eq!(doc.text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    let mut root = Node::document();
    root.add_child(scraper_to_node(document.root_element()));
    root
}

/// Parse raw bytes as an HTML fragment.
///
/// Bytes that are not valid UTF-8 cannot be tokenized and fail with
/// [`ConvertError::Parse`].
pub fn parse_html_bytes(bytes: &[u8]) -> Result<Node> {
    let html = std::str::from_utf8(bytes).map_err(|e| {
        ConvertError::Parse(format!(
            "invalid UTF-8 after {} bytes",
            e.valid_up_to()
        ))
    })?;
    Ok(parse_html(html))
}

fn scraper_to_node(element: ElementRef) -> Node {
    let value = element.value();
    let mut node = Node::element_with_attrs(value.name(), value.attrs().collect());

    for child in element.children() {
        if let ScraperNode::Text(text) = child.value() {
            node.add_child(Node::text(text));
        } else if let Some(child_element) = ElementRef::wrap(child) {
            node.add_child(scraper_to_node(child_element));
        }
        // comments, doctypes and processing instructions never render
    }

    node
}
