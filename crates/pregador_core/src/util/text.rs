//! Text normalization helpers.
//!
//! # Responsibility
//! - Sanitize user-facing titles into safe file names.
//! - Strip HTML tags from editor content.
//! - Normalize CSS font-family strings to one font name.
//!
//! # Invariants
//! - `sanitize_filename` output contains only word characters, `-` and `.`;
//!   it may be empty when the input has no usable characters.

use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^-\w.]").expect("valid filename regex"));
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid tag regex"));

const DEFAULT_FONT: &str = "Inter";

/// Converts a title into a safe file name: trims, replaces spaces with `_`,
/// then strips everything outside `[-\w.]` (word characters stay unicode).
pub fn sanitize_filename(name: &str) -> String {
    let spaced = name.trim().replace(' ', "_");
    UNSAFE_FILENAME_RE.replace_all(&spaced, "").into_owned()
}

/// Replaces HTML tags with line breaks, keeping the visible text.
pub fn clean_html_tags(text: &str) -> String {
    HTML_TAG_RE.replace_all(text, "\n").into_owned()
}

/// Reduces a CSS font-family list to its first font name, unquoted.
pub fn normalize_font(font_name: &str) -> String {
    let first = match font_name.split(',').next() {
        Some(first) => first.trim().replace(['\'', '"'], ""),
        None => String::new(),
    };
    if first.is_empty() {
        DEFAULT_FONT.to_string()
    } else {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_html_tags, normalize_font, sanitize_filename};

    #[test]
    fn sanitize_keeps_word_chars_and_replaces_spaces() {
        assert_eq!(
            sanitize_filename("  Sermão da Montanha: parte 1! "),
            "Sermão_da_Montanha_parte_1"
        );
    }

    #[test]
    fn sanitize_can_yield_empty() {
        assert_eq!(sanitize_filename("???///"), "");
    }

    #[test]
    fn tags_become_line_breaks() {
        assert_eq!(clean_html_tags("<p>graça</p><br/>e paz"), "\ngraça\n\ne paz");
    }

    #[test]
    fn font_list_reduces_to_first_name() {
        assert_eq!(normalize_font("'Roboto', sans-serif"), "Roboto");
        assert_eq!(normalize_font(""), "Inter");
    }
}
