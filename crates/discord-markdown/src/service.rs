//! DiscordMarkdown - the main entry point for HTML to Discord markdown conversion.

use crate::convert::convert;
use crate::html::{parse_html, parse_html_bytes};
use crate::node::Node;
use crate::prompt::FORMAT_FAILURE_MESSAGE;
use crate::strip::strip_markdown;
use crate::utilities::SUPPRESSED_CLASS_MARKERS;
use crate::Result;

/// Options for DiscordMarkdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Fence string for code blocks
    pub fence: String,

    /// Inline code delimiter
    pub code_delimiter: char,

    /// Class fragments that hide a container when all are present.
    /// An empty list disables suppression.
    pub suppressed_class_markers: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fence: "```".to_string(),
            code_delimiter: '`',
            suppressed_class_markers: SUPPRESSED_CLASS_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// The main service for converting HTML to Discord markdown.
///
/// A service holds only its options, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct DiscordMarkdown {
    options: Options,
}

impl DiscordMarkdown {
    /// Create a new DiscordMarkdown with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DiscordMarkdown with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Convert an HTML fragment to markdown
    pub fn convert(&self, html: &str) -> Result<String> {
        let _span = tracing::debug_span!("html_to_discord_markdown", input_len = html.len()).entered();
        Ok(self.render(html.len(), &parse_html(html)))
    }

    /// Convert raw bytes holding an HTML fragment.
    ///
    /// Fails with [`crate::ConvertError::Parse`] if the bytes are not UTF-8.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String> {
        let _span = tracing::debug_span!("html_to_discord_markdown", input_len = bytes.len()).entered();
        let root = parse_html_bytes(bytes).inspect_err(|e| {
            tracing::warn!(error = %e, "could not parse HTML");
        })?;
        Ok(self.render(bytes.len(), &root))
    }

    /// Convert a Node tree that was built or parsed elsewhere
    pub fn convert_node(&self, root: &Node) -> String {
        convert(root, &self.options)
    }

    /// Convert, substituting the fixed user-facing fallback on failure
    pub fn convert_or_fallback(&self, bytes: &[u8]) -> String {
        self.convert_bytes(bytes)
            .unwrap_or_else(|_| FORMAT_FAILURE_MESSAGE.to_string())
    }

    /// Strip markdown punctuation back to plain text
    pub fn strip(&self, markdown: &str) -> String {
        strip_markdown(markdown)
    }

    fn render(&self, input_len: usize, root: &Node) -> String {
        let markdown = convert(root, &self.options);
        if markdown.is_empty() && input_len > 0 {
            tracing::warn!("HTML conversion produced empty output");
        }
        tracing::debug!(bytes = markdown.len(), "HTML converted to markdown");
        markdown
    }
}
