//! Warning system for the cleaner.
//!
//! Detection never fails outright; instead it degrades to fallbacks and
//! records what it had to guess so callers can surface it (or refuse it in
//! strict mode).

use serde::Serialize;

/// Diagnostics raised while cleaning a dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CleanWarning {
    /// No `INSERT INTO <table> (...)` header, fallback table name used
    TableNotDetected { fallback: String },
    /// No `VALUES` keyword, whole input used as the values block
    ValuesKeywordMissing,
    /// Neither a detected nor a default column list exists
    NoColumnList { table: String },
    /// Parenthesis count outside string literals does not balance
    UnbalancedParentheses { open: usize, close: usize },
    /// No `(<id>, ...` tuple start was found in the block
    NoRecords,
}

impl std::fmt::Display for CleanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanWarning::TableNotDetected { fallback } => {
                write!(
                    f,
                    "No INSERT INTO header found, using table name '{}'",
                    fallback
                )
            }
            CleanWarning::ValuesKeywordMissing => {
                write!(f, "No VALUES keyword found, treating entire input as values")
            }
            CleanWarning::NoColumnList { table } => {
                write!(
                    f,
                    "No column list for table '{}', INSERT will rely on column order",
                    table
                )
            }
            CleanWarning::UnbalancedParentheses { open, close } => {
                write!(
                    f,
                    "Unbalanced parentheses in values block ({} open, {} close)",
                    open, close
                )
            }
            CleanWarning::NoRecords => write!(f, "No records found in values block"),
        }
    }
}

/// Collects warnings during cleaning
#[derive(Debug)]
pub struct WarningCollector {
    warnings: Vec<CleanWarning>,
    max_warnings: usize,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            max_warnings: 100,
        }
    }

    /// Add a warning, dropping exact duplicates
    pub fn add(&mut self, warning: CleanWarning) {
        if self.warnings.len() < self.max_warnings && !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    pub fn into_vec(self) -> Vec<CleanWarning> {
        self.warnings
    }
}

impl Default for WarningCollector {
    fn default() -> Self {
        Self::new()
    }
}
