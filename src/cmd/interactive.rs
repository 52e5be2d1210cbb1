//! Interactive file picker: list dump files, pick one, clean it.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use super::clean::{run_single, CleanOptions};
use super::glob_util::list_candidate_files;
use crate::cleaner;

pub fn run(dir: PathBuf, options: CleanOptions) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("MySQL to SQL Server Data Cleaner");
    println!("Supports: CombinedAddons, CombinedBio, and other tables");
    println!("{}", "=".repeat(60));

    let files = list_candidate_files(&dir)?;

    if files.is_empty() {
        println!("\n⚠ No input files found in {}.", dir.display());
        let answer = prompt(&mut rl, "Would you like to create sample input files? (y/n): ")?;

        if answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")) {
            super::samples::run(dir)?;
            println!("\nPlease add your MySQL INSERT data to the appropriate file and run this again.");
        } else {
            println!("Please create a .txt file with your MySQL INSERT data.");
        }
        return Ok(());
    }

    println!("\nFound files:");
    for (i, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("  {}. {}", i + 1, name);
    }

    let answer = prompt(&mut rl, &format!("\nSelect file (1-{}): ", files.len()))?;
    let input = match parse_choice(answer.as_deref(), files.len()) {
        Some(idx) => &files[idx],
        None => {
            println!("Invalid choice. Using default...");
            &files[0]
        }
    };

    let output = cleaner::default_output_path(input);
    if run_single(input, Some(output.clone()), &options)? {
        println!("\n✓ Data cleaning completed successfully!");
        if !options.dry_run {
            println!("Cleaned SQL Server script saved as: {}", output.display());
        }
        println!("\nNext steps:");
        println!("1. Review the generated SQL file");
        println!("2. Run it in SQL Server Management Studio");
        println!("3. Check for any remaining syntax errors");
        println!("4. Verify data integrity after insertion");
    } else {
        println!("\n✗ Data cleaning failed. Please check the error messages above.");
    }

    Ok(())
}

/// Read one line; Ctrl-C and Ctrl-D yield `None`.
fn prompt(rl: &mut DefaultEditor, message: &str) -> anyhow::Result<Option<String>> {
    match rl.readline(message) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// 1-based menu choice → 0-based index, `None` when out of range or not a number.
fn parse_choice(answer: Option<&str>, count: usize) -> Option<usize> {
    let choice: usize = answer?.trim().parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}
