//! Clean command CLI handler.

use crate::cleaner::{self, CleanConfig, CleanStats, CleanerYamlConfig};
use std::path::{Path, PathBuf};

use super::glob_util::{expand_file_pattern, MultiFileResult};

/// Settings shared by single-file, multi-file and interactive runs
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub settings: CleanerYamlConfig,
    pub strict: bool,
    pub json: bool,
    pub progress: bool,
    pub dry_run: bool,
}

impl CleanOptions {
    /// Build options from CLI flags, layering `--table` over the config file.
    pub fn from_args(
        table: Option<String>,
        config: Option<PathBuf>,
        strict: bool,
        json: bool,
        progress: bool,
        dry_run: bool,
    ) -> anyhow::Result<Self> {
        let mut settings = match config {
            Some(path) => CleanerYamlConfig::load(&path).map_err(|e| {
                anyhow::anyhow!("failed to load config '{}': {}", path.display(), e)
            })?,
            None => CleanerYamlConfig::default(),
        };
        if let Some(table) = table {
            settings.default_table = table;
        }

        Ok(Self {
            settings,
            strict,
            json,
            progress,
            dry_run,
        })
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    table: Option<String>,
    config: Option<PathBuf>,
    strict: bool,
    json: bool,
    progress: bool,
    dry_run: bool,
    fail_fast: bool,
) -> anyhow::Result<()> {
    let options = CleanOptions::from_args(table, config, strict, json, progress, dry_run)?;
    let expanded = expand_file_pattern(&file)?;

    if !expanded.pattern_was_glob {
        let file = expanded.files.into_iter().next().unwrap_or(file);
        run_single(&file, output, &options).map(|_| ())
    } else {
        run_multi(expanded.files, output, &options, fail_fast)
    }
}

/// Clean one file and report the outcome.
///
/// I/O failures are printed and swallowed so the caller sees `Ok(false)`;
/// only strict-mode warnings surface as an error.
pub fn run_single(
    file: &Path,
    output: Option<PathBuf>,
    options: &CleanOptions,
) -> anyhow::Result<bool> {
    if !options.json {
        eprintln!("Reading data from: {}", file.display());
    }

    let config = CleanConfig {
        input: file.to_path_buf(),
        output,
        settings: options.settings.clone(),
        dry_run: options.dry_run,
        progress: options.progress,
    };

    let stats = match cleaner::run(&config) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(false);
        }
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats, options.dry_run);
    }

    if options.strict && !stats.warnings.is_empty() {
        anyhow::bail!("Strict mode: {} warnings generated", stats.warnings.len());
    }

    Ok(true)
}

fn run_multi(
    files: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    options: &CleanOptions,
    fail_fast: bool,
) -> anyhow::Result<()> {
    let total = files.len();
    let mut result = MultiFileResult::new();
    result.total_files = total;

    if let (Some(dir), false) = (&output_dir, options.dry_run) {
        std::fs::create_dir_all(dir)?;
    }

    eprintln!("Cleaning {} files...\n", total);

    let mut all_stats = Vec::new();
    for (idx, file) in files.iter().enumerate() {
        eprintln!("[{}/{}] Cleaning: {}", idx + 1, total, file.display());

        let output = output_dir.as_ref().map(|dir| {
            let name = cleaner::default_output_path(file)
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| format!("output_{}.sql", idx));
            dir.join(name)
        });

        let config = CleanConfig {
            input: file.clone(),
            output,
            settings: options.settings.clone(),
            dry_run: options.dry_run,
            progress: false,
        };

        match cleaner::run(&config) {
            Ok(stats) => {
                let warning_str = if stats.warnings.is_empty() {
                    String::new()
                } else {
                    format!(" ({} warnings)", stats.warnings.len())
                };
                eprintln!(
                    "  {} → {} records{}",
                    stats.table, stats.records, warning_str
                );
                if let Some(out) = &stats.output_file {
                    eprintln!("  → {}", out);
                }
                eprintln!();

                if options.strict && !stats.warnings.is_empty() {
                    result.record_failure(
                        file.clone(),
                        format!("{} warnings in strict mode", stats.warnings.len()),
                    );
                    if fail_fast {
                        break;
                    }
                } else {
                    result.record_success();
                }
                all_stats.push(stats);
            }
            Err(e) => {
                eprintln!("  Error: {}\n", e);
                result.record_failure(file.clone(), e.to_string());
                if fail_fast {
                    break;
                }
            }
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&all_stats)?);
    }

    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("Cleaning Summary:");
    eprintln!("  Total files: {}", total);
    eprintln!("  Succeeded: {}", result.succeeded);
    eprintln!("  Failed: {}", result.failed);

    if result.has_failures() {
        eprintln!();
        eprintln!("Failed files:");
        for (path, error) in &result.errors {
            eprintln!("  - {}: {}", path.display(), error);
        }
        if options.strict {
            anyhow::bail!("Strict mode: {} files failed", result.failed);
        }
    }

    Ok(())
}

fn print_stats(stats: &CleanStats, dry_run: bool) {
    println!("Detected table: {}", stats.table);
    if stats.columns_detected {
        println!("Detected columns: {} columns", stats.column_count);
    } else {
        println!("Default columns: {} columns", stats.column_count);
    }

    for warning in &stats.warnings {
        eprintln!("  ⚠ {}", warning);
    }

    if dry_run {
        println!("\n✓ Dry run completed!");
        println!("  Would write {} bytes", stats.output_bytes);
    } else if let Some(out) = &stats.output_file {
        println!("\n✓ Cleaned data saved to: {}", out);
        println!("  Total size: {} bytes", stats.output_bytes);
    }
    println!("  Total records: {}", stats.records);
}
