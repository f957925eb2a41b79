//! Tag vocabulary and small text helpers shared by the renderer rules.

/// Tag rendered as a fenced code block
pub const PREFORMATTED_TAG: &str = "pre";

/// Tag rendered as an inline code span outside preformatted blocks
pub const INLINE_CODE_TAG: &str = "code";

/// Container tag checked against the suppression markers
pub const CONTAINER_TAG: &str = "div";

/// Class-name fragments that mark secondary UI chrome in AI chat HTML.
/// A container is suppressed only when its class contains all of them.
pub const SUPPRESSED_CLASS_MARKERS: &[&str] =
    &["text-token-text-secondary", "bg-token-main-surface-secondary"];

/// The closed set of tags the renderer treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Preformatted,
    InlineCode,
    Container,
    Other,
}

impl TagKind {
    /// Classify a lowercase tag name
    pub fn of(tag: &str) -> Self {
        match tag {
            PREFORMATTED_TAG => TagKind::Preformatted,
            INLINE_CODE_TAG => TagKind::InlineCode,
            CONTAINER_TAG => TagKind::Container,
            _ => TagKind::Other,
        }
    }
}

/// Check whether a class attribute contains every marker as a substring.
///
/// Matching is case-sensitive and order-independent. An empty marker list
/// never matches.
pub fn class_has_markers<S: AsRef<str>>(class: &str, markers: &[S]) -> bool {
    !markers.is_empty() && markers.iter().all(|m| class.contains(m.as_ref()))
}

/// Normalize flow text: newlines become spaces, then surrounding whitespace is trimmed
pub fn normalize_text(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_kind() {
        assert_eq!(TagKind::of("pre"), TagKind::Preformatted);
        assert_eq!(TagKind::of("code"), TagKind::InlineCode);
        assert_eq!(TagKind::of("div"), TagKind::Container);
        assert_eq!(TagKind::of("b"), TagKind::Other);
        assert_eq!(TagKind::of("span"), TagKind::Other);
    }

    #[test]
    fn test_class_has_markers() {
        let markers = SUPPRESSED_CLASS_MARKERS;
        assert!(class_has_markers(
            "text-token-text-secondary bg-token-main-surface-secondary",
            markers
        ));
        assert!(class_has_markers(
            "p-2 bg-token-main-surface-secondary rounded text-token-text-secondary",
            markers
        ));
        assert!(!class_has_markers("text-token-text-secondary", markers));
        assert!(!class_has_markers(
            "TEXT-TOKEN-TEXT-SECONDARY bg-token-main-surface-secondary",
            markers
        ));
        assert!(!class_has_markers::<&str>("anything", &[]));
    }

    #[test]
    fn test_class_markers_are_substrings() {
        assert!(class_has_markers(
            "xtext-token-text-secondaryx-bg-token-main-surface-secondary-y",
            SUPPRESSED_CLASS_MARKERS
        ));
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Hello\nWorld \n"), "Hello World");
        assert_eq!(normalize_text("\n\n  "), "");
        assert_eq!(normalize_text("a  b"), "a  b");
    }
}
