//! Samples command CLI handler.

use crate::samples::create_sample_files;
use std::path::PathBuf;

pub fn run(dir: PathBuf) -> anyhow::Result<()> {
    std::fs::create_dir_all(&dir)?;
    let created = create_sample_files(&dir)?;

    println!("✓ Sample input files created:");
    for path in &created {
        println!("   - {}", path.display());
    }
    Ok(())
}
