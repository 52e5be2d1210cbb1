//! Fixups for known-bad tokens observed in the source data.
//!
//! These are not general-purpose rules; they patch specific artifacts of the
//! scraped e& / Etisalat catalog exports.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_QUOTED_T_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'T(\d+)'").unwrap());

/// Literal replacements applied before the SMS-code rewrite.
static TERM_FIXES: &[(&str, &str)] = &[("e&amp;", "e&"), ("UAE's", "UAE''s")];

/// Backslash-escape artifacts applied after the SMS-code rewrite.
static ESCAPE_FIXES: &[(&str, &str)] = &[("kids\\'", "kids''"), ("\\'", "''")];

pub fn fix_business_terms(text: &str) -> String {
    let mut result = text.to_string();
    for (term, fixed) in TERM_FIXES {
        result = result.replace(term, fixed);
    }

    // SMS short codes such as 'T100' are quoted inside a literal
    result = RE_QUOTED_T_CODE
        .replace_all(&result, "''T${1}''")
        .into_owned();

    for (artifact, fixed) in ESCAPE_FIXES {
        result = result.replace(artifact, fixed);
    }
    result
}
