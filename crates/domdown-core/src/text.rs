//! Text joining rules for inline content.
//!
//! HTML treats whitespace between inline elements as insignificant except at
//! fragment boundaries, where any amount of it collapses to a single space.
//! These helpers reproduce that behavior on already rendered fragments.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace into a single space.
///
/// Leading and trailing whitespace survives (as one space): trimming is the
/// job of the joiners, which know where fragment boundaries are.
pub fn clean_inline_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Join plain text fragments into one string.
///
/// Concatenates the fragments, collapses the first whitespace run to a
/// single space and trims both ends. Fragments are expected to come from
/// [`clean_inline_text`], so the only runs longer than one character sit on
/// fragment boundaries.
pub fn join_inline_text<S: AsRef<str>>(fragments: &[S]) -> String {
    let joined: String = fragments.iter().map(|f| f.as_ref()).collect();
    WHITESPACE_RUN.replace(&joined, " ").trim().to_string()
}

/// Join rendered inline Markdown fragments with HTML whitespace semantics.
///
/// Each fragment is trimmed on both sides; whitespace removed from either
/// side turns into at most one separating space. Whitespace-only fragments
/// only request a separator before the next non-empty fragment. Fragment
/// content itself is copied verbatim.
pub fn join_inline_markdown<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut result = String::new();
    let mut needs_space = false;

    for fragment in fragments {
        let fragment = fragment.as_ref();
        let trimmed_start = fragment.trim_start();
        let trimmed = trimmed_start.trim_end();

        if trimmed.is_empty() {
            needs_space = needs_space || !fragment.is_empty();
            continue;
        }

        if needs_space || trimmed_start.len() != fragment.len() {
            result.push(' ');
        }
        result.push_str(trimmed);
        needs_space = trimmed.len() != trimmed_start.len();
    }

    // A leading separator can only come from the first emitted fragment.
    match result.strip_prefix(' ') {
        Some(rest) => rest.to_string(),
        None => result,
    }
}

/// Escape Markdown control characters so the text stays literal text.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '*' | '_' | '`' | '#' | '[' | ']' | '(' | ')' | '!' | '~' | '<' | '>' | '|'
            | '\\' | '{' | '}' | '-' | '+' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_inline_text() {
        assert_eq!(clean_inline_text("hello\n\t  world"), "hello world");
        assert_eq!(clean_inline_text("  padded  "), " padded ");
        assert_eq!(clean_inline_text("\n"), " ");
        assert_eq!(clean_inline_text(""), "");
    }

    #[test]
    fn test_join_inline_text() {
        assert_eq!(join_inline_text(&["hello", "world"]), "helloworld");
        assert_eq!(join_inline_text(&["hello", " world"]), "hello world");
        assert_eq!(join_inline_text(&["hello  ", "  world"]), "hello world");
        assert_eq!(join_inline_text(&["hello  ", " ", " ", "  world"]), "hello world");
        assert_eq!(join_inline_text(&["hello", "\n", "world"]), "hello world");
        assert_eq!(join_inline_text(&["hello\n\nworld"]), "hello world");
        assert_eq!(join_inline_text(&["\n   "]), "");
    }

    #[test]
    fn test_join_inline_text_collapses_first_run_only() {
        // Pinned behavior: only the first boundary run is collapsed.
        assert_eq!(join_inline_text(&["a ", " b ", " c"]), "a b  c");
    }

    #[test]
    fn test_join_inline_markdown() {
        assert_eq!(join_inline_markdown(&["hello", "world"]), "helloworld");
        assert_eq!(join_inline_markdown(&["hello", " world"]), "hello world");
        assert_eq!(join_inline_markdown(&["hello  ", " world"]), "hello world");
        assert_eq!(join_inline_markdown(&["\n   "]), "");
    }

    #[test]
    fn test_join_inline_markdown_whitespace_fragments() {
        assert_eq!(join_inline_markdown(&["hello", " ", "world"]), "hello world");
        assert_eq!(join_inline_markdown(&["hello", " ", "\n", " ", "world"]), "hello world");
        assert_eq!(join_inline_markdown(&[" ", "hello"]), "hello");
        assert_eq!(join_inline_markdown(&["hello", " "]), "hello");
        assert_eq!(join_inline_markdown(&["", "hello", "", "world"]), "helloworld");
    }

    #[test]
    fn test_join_inline_markdown_keeps_markup_verbatim() {
        assert_eq!(
            join_inline_markdown(&["Hello ", "**World**", " and ", "_more_"]),
            "Hello **World** and _more_"
        );
        assert_eq!(join_inline_markdown(&["a*b", "c_d"]), "a*bc_d");
    }

    #[test]
    fn test_join_inline_multiruns_diverge() {
        let fragments = ["a ", " b ", " c"];
        assert_eq!(join_inline_markdown(&fragments), "a b c");
        assert_ne!(join_inline_markdown(&fragments), join_inline_text(&fragments));
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("a *bold* text"), "a \\*bold\\* text");
        assert_eq!(escape_markdown("an _italic_ text"), "an \\_italic\\_ text");
        assert_eq!(escape_markdown("~~gone~~"), "\\~\\~gone\\~\\~");
        assert_eq!(escape_markdown(">quote"), "\\>quote");
        assert_eq!(
            escape_markdown("[link](https://example.com)"),
            "\\[link\\]\\(https://example.com\\)"
        );
        assert_eq!(
            escape_markdown("![image](https://example.com)"),
            "\\!\\[image\\]\\(https://example.com\\)"
        );
        assert_eq!(escape_markdown("normal"), "normal");
    }
}
