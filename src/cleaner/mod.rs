//! Clean command: turn a MySQL `INSERT ... VALUES` dump into a SQL Server
//! `INSERT` script.
//!
//! The values block runs through a fixed chain of text passes:
//! - Newline flattening, whitespace collapsing and glyph repair
//! - Contraction quote doubling from a fixed vocabulary
//! - Fixups for known-bad business terms and backslash escapes
//! - Generic quote doubling inside string literals
//!
//! The result is wrapped in a transactional script with `IDENTITY_INSERT`
//! toggled around it. Everything except [`run`] is pure string processing.

mod apostrophes;
mod business;
mod compression;
mod config;
mod detect;
mod normalize;
mod quotes;
mod script;
mod warnings;

pub use apostrophes::{fix_apostrophes, CONTRACTIONS};
pub use business::fix_business_terms;
pub use compression::Compression;
pub use config::{
    CleanerYamlConfig, ColumnDefault, VerificationConfig, DEFAULT_PREVIEW_ROWS,
    DEFAULT_PRIMARY_KEY, DEFAULT_TABLE,
};
pub use detect::{detect_table_and_columns, extract_values, to_pascal_case, DetectedTable, ValuesBlock};
pub use normalize::{normalize_text, MISENCODED_SYMBOLS};
pub use quotes::fix_quotes;
pub use script::ScriptTemplate;
pub use warnings::{CleanWarning, WarningCollector};

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem for the default output file
pub const OUTPUT_SUFFIX: &str = "_cleaned_sqlserver.sql";

static RE_RECORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\),)\s*\(\s*\d+\s*,").unwrap());

/// I/O failures at the edges of a clean run
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },
    #[error("error reading file '{}': {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing file '{}': {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One named pass over the values block
#[derive(Clone, Copy)]
pub struct TransformStep {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for TransformStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformStep")
            .field("name", &self.name)
            .finish()
    }
}

/// Ordered text passes applied to a values block
#[derive(Debug, Clone)]
pub struct TransformationChain {
    steps: Vec<TransformStep>,
}

impl TransformationChain {
    /// normalize → apostrophes → business terms → quotes
    pub fn standard() -> Self {
        Self {
            steps: vec![
                TransformStep {
                    name: "normalize",
                    apply: normalize_text,
                },
                TransformStep {
                    name: "apostrophes",
                    apply: fix_apostrophes,
                },
                TransformStep {
                    name: "business_terms",
                    apply: fix_business_terms,
                },
                TransformStep {
                    name: "quotes",
                    apply: fix_quotes,
                },
            ],
        }
    }

    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    pub fn apply(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |acc, step| (step.apply)(&acc))
    }
}

impl Default for TransformationChain {
    fn default() -> Self {
        Self::standard()
    }
}

/// Output of cleaning one dump
#[derive(Debug, Clone)]
pub struct CleanedScript {
    pub table: String,
    /// Column list used in the INSERT (detected or defaulted)
    pub columns: Vec<String>,
    /// Whether `columns` came from the dump itself
    pub columns_detected: bool,
    /// Values block after the transformation chain
    pub values: String,
    pub records: usize,
    pub script: String,
    pub warnings: Vec<CleanWarning>,
}

/// Pure dump → script transformer
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    config: CleanerYamlConfig,
    chain: TransformationChain,
}

impl Cleaner {
    pub fn new(config: CleanerYamlConfig) -> Self {
        Self {
            config,
            chain: TransformationChain::standard(),
        }
    }

    pub fn with_default_table(mut self, table: impl Into<String>) -> Self {
        self.config.default_table = table.into();
        self
    }

    /// Clean a dump and render the SQL Server script.
    pub fn clean(&self, content: &str) -> CleanedScript {
        let mut warnings = WarningCollector::new();

        let detected = detect_table_and_columns(content, &self.config.default_table);
        if !detected.detected {
            warnings.add(CleanWarning::TableNotDetected {
                fallback: detected.name.clone(),
            });
        }

        let block = extract_values(content);
        if !block.keyword_found {
            warnings.add(CleanWarning::ValuesKeywordMissing);
        }

        let values = self.chain.apply(&block.text);

        let (open, close) = count_parentheses(&values);
        if open != close {
            warnings.add(CleanWarning::UnbalancedParentheses { open, close });
        }

        let records = count_records(&values);
        if records == 0 {
            warnings.add(CleanWarning::NoRecords);
        }

        let columns_detected = !detected.columns.is_empty();
        let columns = if columns_detected {
            detected.columns
        } else {
            match self.config.default_columns_for(&detected.name) {
                Some(cols) => cols.to_vec(),
                None => {
                    warnings.add(CleanWarning::NoColumnList {
                        table: detected.name.clone(),
                    });
                    Vec::new()
                }
            }
        };

        let script = ScriptTemplate {
            table: &detected.name,
            columns: &columns,
            primary_key: &self.config.verification.primary_key,
            preview_rows: self.config.verification.preview_rows,
        }
        .render(&values);

        CleanedScript {
            table: detected.name,
            columns,
            columns_detected,
            values,
            records,
            script,
            warnings: warnings.into_vec(),
        }
    }
}

/// Count tuple starts such as `(12,` at the beginning of the block or right
/// after a closing `),`.
pub fn count_records(values: &str) -> usize {
    RE_RECORD_START.find_iter(values).count()
}

/// Count `(` and `)` outside single-quoted literals.
pub fn count_parentheses(values: &str) -> (usize, usize) {
    let mut open = 0;
    let mut close = 0;
    let mut in_string = false;
    let mut chars = values.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => in_string = !in_string,
            '\\' if in_string => {
                chars.next();
            }
            '(' if !in_string => open += 1,
            ')' if !in_string => close += 1,
            _ => {}
        }
    }
    (open, close)
}

/// `dumps/mysql_bio_data.txt` → `dumps/mysql_bio_data_cleaned_sqlserver.sql`
///
/// A compression extension is dropped before the stem is taken.
pub fn default_output_path(input: &Path) -> PathBuf {
    let base = if Compression::from_path(input) == Compression::None {
        input.to_path_buf()
    } else {
        input.with_extension("")
    };
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Configuration for the clean command
#[derive(Debug, Default)]
pub struct CleanConfig {
    /// Input dump file
    pub input: PathBuf,
    /// Output script (default: next to the input, see [`default_output_path`])
    pub output: Option<PathBuf>,
    pub settings: CleanerYamlConfig,
    /// Dry run mode
    pub dry_run: bool,
    /// Show progress
    pub progress: bool,
}

/// Statistics from a clean run
#[derive(Debug, Default, Serialize)]
pub struct CleanStats {
    pub input_file: String,
    /// None in dry-run mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    pub table: String,
    pub columns_detected: bool,
    pub column_count: usize,
    pub records: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub warnings: Vec<CleanWarning>,
}

/// Run the clean command: read, transform, write atomically.
pub fn run(config: &CleanConfig) -> Result<CleanStats, CleanError> {
    let content = read_input(&config.input)?;

    let progress_bar = if config.progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Cleaning {}...", config.input.display()));
        Some(pb)
    } else {
        None
    };

    let cleaner = Cleaner::new(config.settings.clone());
    let cleaned = cleaner.clean(&content);

    let output_path = config
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&config.input));

    if !config.dry_run {
        write_atomic(&output_path, &cleaned.script)?;
    }

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!("Cleaned {} records", cleaned.records));
    }

    Ok(CleanStats {
        input_file: config.input.display().to_string(),
        output_file: (!config.dry_run).then(|| output_path.display().to_string()),
        table: cleaned.table,
        columns_detected: cleaned.columns_detected,
        column_count: cleaned.columns.len(),
        records: cleaned.records,
        input_bytes: content.len(),
        output_bytes: cleaned.script.len(),
        warnings: cleaned.warnings,
    })
}

/// Read a dump as UTF-8, decompressing by extension.
pub fn read_input(path: &Path) -> Result<String, CleanError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CleanError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CleanError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let unreadable = |source| CleanError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = Compression::from_path(path)
        .wrap_reader(Box::new(file))
        .map_err(unreadable)?;
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(unreadable)?;
    Ok(content)
}

/// Write through a temp file in the target directory so a failed write
/// never leaves a partial script behind.
fn write_atomic(path: &Path, contents: &str) -> Result<(), CleanError> {
    let failure = |source| CleanError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(failure)?;

    // Plain-write mode (0666 less umask) instead of the temp file's 0600,
    // or the mode of the script being replaced.
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(failure)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(failure)?;
    }
    tmp.write_all(contents.as_bytes()).map_err(failure)?;
    tmp.persist(path).map_err(|e| failure(e.error))?;
    Ok(())
}
