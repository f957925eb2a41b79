//! Strip Discord markdown punctuation back to plain text.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]*)`").unwrap());
// ASCII whitespace only; non-breaking spaces are content
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\n\x0C\r ]+").unwrap());

/// Emphasis delimiters, widest first. A narrower pattern run earlier would eat
/// part of a wider delimiter.
static EMPHASIS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\*\*\*(.*?)\*\*\*", // bold + italic
        r"___(.*?)___",       // bold + italic
        r"\*\*(.*?)\*\*",     // bold
        r"__(.*?)__",         // bold
        r"\*(.*?)\*",         // italic
        r"_(.*?)_",           // italic
        r"~~(.*?)~~",         // strikethrough
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Remove markdown formatting while keeping the inner text.
///
/// Unmatched delimiters are left as literal characters. Afterwards the result
/// is trimmed, doubled newlines are folded, and every run of ASCII whitespace
/// becomes a single space.
pub fn strip_markdown(content: &str) -> String {
    let mut content = FENCED_CODE.replace_all(content, "$1").into_owned();
    content = INLINE_CODE.replace_all(&content, "$1").into_owned();

    for re in EMPHASIS.iter() {
        content = re.replace_all(&content, "$1").into_owned();
    }

    let content = content.trim().replace("\n\n", "\n");
    WHITESPACE.replace_all(&content, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_mixed() {
        assert_eq!(
            strip_markdown("**bold** and *italic* and `code`"),
            "bold and italic and code"
        );
    }

    #[test]
    fn test_strip_fenced_block() {
        assert_eq!(
            strip_markdown("before\n```\nlet x = 1;\nlet y = 2;\n```\nafter"),
            "before let x = 1; let y = 2; after"
        );
    }

    #[test]
    fn test_fenced_blocks_are_non_greedy() {
        assert_eq!(strip_markdown("```a``` mid ```b```"), "a mid b");
    }

    #[test]
    fn test_strip_bold_italic_before_narrower() {
        assert_eq!(strip_markdown("***both***"), "both");
        assert_eq!(strip_markdown("___both___"), "both");
        assert_eq!(strip_markdown("__bold__ _it_"), "bold it");
    }

    #[test]
    fn test_strip_strikethrough() {
        assert_eq!(strip_markdown("~~gone~~ text"), "gone text");
    }

    #[test]
    fn test_unmatched_delimiters_stay_literal() {
        assert_eq!(strip_markdown("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(strip_markdown("a ` b"), "a ` b");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(strip_markdown("  one\n\n\ntwo   three\t "), "one two three");
    }

    #[test]
    fn test_non_breaking_spaces_are_kept() {
        assert_eq!(strip_markdown("a\u{00A0}\u{00A0}b"), "a\u{00A0}\u{00A0}b");
        assert_eq!(strip_markdown("a\u{00A0} \t b"), "a\u{00A0} b");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let plain = "nothing to strip here";
        assert_eq!(strip_markdown(plain), plain);
        assert_eq!(strip_markdown(&strip_markdown(plain)), plain);
    }
}
