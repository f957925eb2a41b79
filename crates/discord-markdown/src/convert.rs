//! Render a Node tree as Discord markdown.
//!
//! A single depth-first walk appends to one output buffer. Two flags flow from
//! parent to child only: whether we are inside a preformatted block, and
//! whether the current subtree is suppressed. Siblings never see each other's
//! flags.

use crate::node::{Node, NodeRef};
use crate::service::Options;
use crate::utilities::{class_has_markers, normalize_text, TagKind};

/// Traversal state, copied into each recursive call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Flags {
    pub inside_pre: bool,
    pub suppress: bool,
}

/// Render the tree rooted at `root` into a fresh markdown string
pub(crate) fn convert(root: &Node, options: &Options) -> String {
    let mut buf = String::new();
    render(NodeRef::new(root), &mut buf, Flags::default(), options);
    buf
}

fn render(node: NodeRef, buf: &mut String, flags: Flags, options: &Options) {
    let flags = enter_element(node.node, buf, flags, options);

    if !flags.suppress {
        render_text(node, buf, flags.inside_pre);
    }

    for child in node.children() {
        render(child, buf, flags, options);
    }

    exit_element(node.node, buf, flags, options);
}

/// Entry rule: compute the flags for this node and emit opening markers
fn enter_element(node: &Node, buf: &mut String, flags: Flags, options: &Options) -> Flags {
    if !node.is_element() {
        return flags;
    }

    match TagKind::of(node.tag_name()) {
        TagKind::Preformatted => {
            // preformatted content is never suppressed, even inside hidden chrome
            buf.push('\n');
            buf.push_str(&options.fence);
            Flags {
                inside_pre: true,
                suppress: false,
            }
        }
        TagKind::Container => {
            let markers = options.suppressed_class_markers.as_slice();
            let hidden = node
                .attr("class")
                .is_some_and(|class| class_has_markers(class, markers));
            Flags {
                suppress: flags.suppress || hidden,
                ..flags
            }
        }
        TagKind::InlineCode => {
            // delimiters are emitted even inside a suppressed container
            if !flags.inside_pre {
                buf.push(' ');
                buf.push(options.code_delimiter);
            }
            flags
        }
        TagKind::Other => flags,
    }
}

/// Text rule. Callers skip it for suppressed subtrees.
fn render_text(node: NodeRef, buf: &mut String, inside_pre: bool) {
    let Some(text) = node.node.value().filter(|_| node.node.is_text()) else {
        return;
    };

    if inside_pre {
        buf.push_str(text);
        return;
    }

    let clean = normalize_text(text);
    if clean.is_empty() {
        return;
    }

    if TagKind::of(node.parent_tag().unwrap_or_default()) == TagKind::InlineCode {
        // delimiters already carry the separating spaces
        buf.push_str(&clean);
    } else {
        buf.push(' ');
        buf.push_str(&clean);
        buf.push(' ');
    }
}

/// Exit rule: emit closing markers using the flags computed on entry
fn exit_element(node: &Node, buf: &mut String, flags: Flags, options: &Options) {
    if !node.is_element() {
        return;
    }

    match TagKind::of(node.tag_name()) {
        TagKind::InlineCode if !flags.inside_pre => {
            buf.push(options.code_delimiter);
            buf.push(' ');
        }
        TagKind::Preformatted => buf.push_str(&options.fence),
        _ => {}
    }
}
