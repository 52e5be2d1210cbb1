mod clean;
mod glob_util;
mod interactive;
mod samples;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mssql-cleaner")]
#[command(version)]
#[command(
    about = "Clean MySQL INSERT data into a SQL Server INSERT script",
    long_about = "Clean MySQL INSERT data into a SQL Server INSERT script.\n\n\
                  Run without a subcommand to pick a .txt/.sql file from the current directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a MySQL INSERT dump (or bare values block) into a SQL Server script
    Clean {
        /// Input file or glob pattern (e.g., *.txt, dumps/**/*.sql)
        /// Supports .gz, .bz2, .xz, .zst compression
        file: PathBuf,

        /// Output script, or output directory for glob patterns
        /// (default: <input>_cleaned_sqlserver.sql next to each input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Table name to use when no INSERT INTO header is found
        #[arg(short, long)]
        table: Option<String>,

        /// YAML config file (default table, column defaults, verification queries)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail if any warning is generated (e.g. detection fell back to defaults)
        #[arg(long)]
        strict: bool,

        /// Output statistics as JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Show progress during cleaning
        #[arg(short, long)]
        progress: bool,

        /// Preview without writing files (dry run)
        #[arg(long)]
        dry_run: bool,

        /// Stop on first file that fails (for glob patterns)
        #[arg(long)]
        fail_fast: bool,
    },

    /// Pick a dump file from a directory and clean it
    Interactive {
        /// Directory to search for .txt/.sql files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Table name to use when no INSERT INTO header is found
        #[arg(short, long)]
        table: Option<String>,

        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write sample CombinedAddons and CombinedBio input files
    Samples {
        /// Directory to write the sample files into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Clean {
            file,
            output,
            table,
            config,
            strict,
            json,
            progress,
            dry_run,
            fail_fast,
        }) => clean::run(
            file, output, table, config, strict, json, progress, dry_run, fail_fast,
        ),
        Some(Commands::Interactive { dir, table, config }) => {
            let options = clean::CleanOptions::from_args(table, config, false, false, false, false)?;
            interactive::run(dir, options)
        }
        Some(Commands::Samples { dir }) => samples::run(dir),
        Some(Commands::Completions { shell }) => {
            generate(
                shell,
                &mut Cli::command(),
                "mssql-cleaner",
                &mut io::stdout(),
            );
            Ok(())
        }
        None => interactive::run(PathBuf::from("."), clean::CleanOptions::default()),
    }
}
