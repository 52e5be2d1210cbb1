//! Table/column detection and `VALUES` block extraction.
//!
//! Both functions degrade silently: a dump without an `INSERT INTO` header
//! falls back to the caller's table name, and a dump without a `VALUES`
//! keyword is treated as a bare values block.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_INSERT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)INSERT INTO `?(\w+)`?\s*\(([^)]+)\)").unwrap());

static RE_VALUES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\bVALUES\s*(\(.*?)(?:;|\n\s*--|\z)").unwrap());

/// Table name and column list found in (or defaulted for) a dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedTable {
    /// PascalCase table name, or the fallback name
    pub name: String,
    /// Column names in declaration order (empty on fallback)
    pub columns: Vec<String>,
    /// Whether an `INSERT INTO` header was found
    pub detected: bool,
}

/// The raw literal block following `VALUES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesBlock {
    pub text: String,
    /// False when the whole input was taken as the block
    pub keyword_found: bool,
}

/// Detect `INSERT INTO <name> (<cols>)` and return the PascalCase name plus
/// cleaned column names, falling back to `default_table` with no columns.
pub fn detect_table_and_columns(content: &str, default_table: &str) -> DetectedTable {
    match RE_INSERT_HEADER.captures(content) {
        Some(caps) => {
            let columns = caps[2]
                .split(',')
                .map(|col| col.trim().trim_matches('`').to_string())
                .collect();

            DetectedTable {
                name: to_pascal_case(&caps[1]),
                columns,
                detected: true,
            }
        }
        None => DetectedTable {
            name: default_table.to_string(),
            columns: Vec::new(),
            detected: false,
        },
    }
}

/// Extract the text between `VALUES` and the first `;`, comment line or end
/// of input. Without a `VALUES` keyword the whole trimmed input is returned.
///
/// The keyword only counts when a tuple follows it, so prose such as
/// "our values focus on" inside a bare values block is not mistaken for it.
pub fn extract_values(content: &str) -> ValuesBlock {
    match RE_VALUES.captures(content) {
        Some(caps) => {
            let text = caps[1].trim().trim_end_matches(';').trim().to_string();
            ValuesBlock {
                text,
                keyword_found: true,
            }
        }
        None => ValuesBlock {
            text: content.trim().to_string(),
            keyword_found: false,
        },
    }
}

/// `combined_addons` → `CombinedAddons`.
///
/// Each underscore-separated segment gets an uppercase first character and a
/// lowercase remainder, so `COMBINED_BIO` also becomes `CombinedBio`.
pub fn to_pascal_case(name: &str) -> String {
    name.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
