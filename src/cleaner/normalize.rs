//! Whitespace flattening and mis-encoded symbol repair.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// UTF-8 symbols that were decoded as Mac Roman somewhere upstream.
pub static MISENCODED_SYMBOLS: &[(&str, &str)] = &[
    ("\u{00AC}\u{00A9}", "(c)"),
    ("\u{00AC}\u{00C6}", "(R)"),
    ("\u{201A}\u{00D1}\u{00A2}", "(TM)"),
];

/// Flatten multi-line literals onto one line and replace mis-encoded
/// copyright/registered/trademark glyphs with ASCII equivalents.
pub fn normalize_text(text: &str) -> String {
    // Escaped newlines become real ones first so both collapse the same way
    let text = text.replace("\\n", "\n").replace('\n', " ");
    let mut result = RE_WHITESPACE.replace_all(&text, " ").into_owned();

    for (glyph, ascii) in MISENCODED_SYMBOLS {
        result = result.replace(glyph, ascii);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_newlines_become_spaces() {
        assert_eq!(
            normalize_text("'Mobile Services\\nConnecting customers'"),
            "'Mobile Services Connecting customers'"
        );
    }

    #[test]
    fn test_real_newlines_and_runs_collapse() {
        assert_eq!(
            normalize_text("(1, 'a'),\n   (2,\t\t'b')"),
            "(1, 'a'), (2, 'b')"
        );
    }

    #[test]
    fn test_escaped_newline_next_to_space_collapses() {
        assert_eq!(normalize_text("test\\n line2"), "test line2");
    }

    #[test]
    fn test_misencoded_symbols() {
        assert_eq!(
            normalize_text("¬© 2025 e&. Brand¬Æ Product‚Ñ¢"),
            "(c) 2025 e&. Brand(R) Product(TM)"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(normalize_text("(1, 'plain')"), "(1, 'plain')");
    }
}
