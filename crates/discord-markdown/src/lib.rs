//! # discord-markdown
//!
//! Convert HTML fragments returned by AI completion services to the markdown
//! dialect understood by Discord.
//!
//! ## Design
//!
//! The HTML is parsed with scraper into an owned [`Node`] tree, then rendered
//! by a single depth-first walk into a flat buffer:
//!
//! - `<pre>` becomes a fenced code block with its text kept byte for byte
//! - `<code>` outside `<pre>` becomes an inline code span
//! - `<div>` elements whose class marks secondary UI chrome are dropped
//! - all other text is reflowed onto one line and padded with spaces
//!
//! No other tags produce delimiters; their text simply flows through.
//!
//! ## Example
//!
//! ```rust
//! use discord_markdown::DiscordMarkdown;
//!
//! let service = DiscordMarkdown::new();
//! let markdown = service.convert("<p>Use <code>cargo</code></p>").unwrap();
//! assert_eq!(markdown, " Use  `cargo` ");
//! ```
//!
//! The reverse direction, plain text from markdown, is [`strip_markdown`].

mod convert;
pub mod html;
pub mod node;
pub mod prompt;
mod service;
mod strip;
mod utilities;

pub use html::{parse_html, parse_html_bytes};
pub use node::{Node, NodeRef, NodeType};
pub use prompt::{
    compose_prompt, strip_mention, Persona, FORMAT_FAILURE_MESSAGE, REQUEST_FAILURE_MESSAGE,
};
pub use service::{DiscordMarkdown, Options};
pub use strip::strip_markdown;
pub use utilities::{class_has_markers, TagKind, SUPPRESSED_CLASS_MARKERS};

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input could not be tokenized at all
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Convert an HTML fragment with default options
pub fn html_to_discord_markdown(html: &str) -> Result<String> {
    DiscordMarkdown::new().convert(html)
}
