//! Generic single-quote escaping for SQL Server string literals.
//!
//! This is the last pass of the chain. The literal matcher is lazy, so two
//! adjacent literals in a tuple (`'a', 'b'`) are never conflated, and a
//! doubled quote (`''`) always ends one match and starts the next rather
//! than being re-doubled.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_STRING_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)'((?:[^'\\]|\\.|'')*?)'").unwrap());

/// Re-escape single-quoted literals for SQL Server.
///
/// Only backslash escapes are rewritten. The matcher ends each literal at its
/// first unescaped quote, so a stray quote inside text (`'y'all good'`) splits
/// the literal in two and is left as is. Contractions are doubled earlier by
/// the apostrophe pass, which covers only its fixed vocabulary.
pub fn fix_quotes(text: &str) -> String {
    RE_STRING_LITERAL
        .replace_all(text, |caps: &Captures| format!("'{}'", escape_body(&caps[1])))
        .into_owned()
}

/// `\'` becomes `''`; any other backslash escape is passed through.
fn escape_body(body: &str) -> String {
    let mut result = String::with_capacity(body.len() + 2);
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\'') => result.push_str("''"),
                Some(next) => {
                    result.push(c);
                    result.push(next);
                }
                None => result.push(c),
            },
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_literals_not_conflated() {
        let input = "(1, 'a', 'b', NULL, 'c')";
        assert_eq!(fix_quotes(input), input);
    }

    #[test]
    fn test_doubled_quotes_are_not_redoubled() {
        let input = "(1, 'don''t stop', 'it''s ''T100'' here')";
        assert_eq!(fix_quotes(input), input);
    }

    #[test]
    fn test_backslash_escaped_quote_inside_literal() {
        assert_eq!(fix_quotes("'a\\'b'"), "'a''b'");
    }

    #[test]
    fn test_escaped_backslash_ends_literal() {
        assert_eq!(fix_quotes("('C:\\\\', 'x')"), "('C:\\\\', 'x')");
    }

    #[test]
    fn test_other_escapes_pass_through() {
        assert_eq!(fix_quotes("'tab\\there'"), "'tab\\there'");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "(1, 'plain'), (2, 'it''s fine')",
            "('a\\'b', 'c')",
            "(3, '', '''', 'x')",
        ];
        for input in inputs {
            let once = fix_quotes(input);
            assert_eq!(fix_quotes(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_quote_outside_vocabulary_left_unescaped() {
        let input = "(1, 'y'all good')";
        assert_eq!(fix_quotes(input), input);
    }

    #[test]
    fn test_escape_body_keeps_trailing_backslash() {
        assert_eq!(escape_body("trailing\\"), "trailing\\");
        assert_eq!(escape_body("it''s"), "it''s");
    }
}
