//! Integration tests for the mssql-cleaner binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn mssql_cleaner() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mssql-cleaner"))
}

#[test]
fn test_clean_insert_statement() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("bio.sql");
    let output_file = temp_dir.path().join("bio_out.sql");

    let mysql_sql = r#"-- MySQL dump
INSERT INTO `combined_bio` (`internal_id`, `id`, `Biography`) VALUES
(1, 'abc', 'Our story began as Etisalat, the UAE\'s first telephone company.\nToday we\'re e&.'),
(2, 'def', 'Let\'s talk. ¬© 2025 e&. All Rights Reserved.');
-- end
"#;
    fs::write(&input_file, mysql_sql).unwrap();

    let output = mssql_cleaner()
        .args([
            "clean",
            input_file.to_str().unwrap(),
            "-o",
            output_file.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "Command failed: {:?}", output);

    let script = fs::read_to_string(&output_file).unwrap();
    assert!(script.contains("SET IDENTITY_INSERT CombinedBio ON;"));
    assert!(script.contains("INSERT INTO CombinedBio (internal_id, id, Biography) VALUES"));
    assert!(script.contains("the UAE''s first telephone company. Today we''re e&."));
    assert!(script.contains("'Let''s talk. (c) 2025 e&. All Rights Reserved.'"));
    assert!(!script.contains("\\'"), "Backslash escapes should be gone");
    assert!(script.contains("SELECT TOP 5 * FROM CombinedBio ORDER BY internal_id DESC;"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Detected table: CombinedBio"));
    assert!(stdout.contains("Total records: 2"));
}

#[test]
fn test_clean_default_output_path() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("mysql_addons_data.txt");
    fs::write(&input_file, "(1, 'addon', 'don't miss it')").unwrap();

    let output = mssql_cleaner()
        .args(["clean", input_file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success(), "Command failed: {:?}", output);

    let script = fs::read_to_string(
        temp_dir
            .path()
            .join("mysql_addons_data_cleaned_sqlserver.sql"),
    )
    .unwrap();
    assert!(script.contains("INSERT INTO CombinedAddons (internal_id, id, additional_details,"));
    assert!(script.contains("'don''t miss it'"));
}

#[test]
fn test_clean_table_flag_sets_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("values.txt");
    let output_file = temp_dir.path().join("out.sql");
    fs::write(&input_file, "(1, 'x'), (2, 'y')").unwrap();

    let output = mssql_cleaner()
        .args([
            "clean",
            input_file.to_str().unwrap(),
            "-o",
            output_file.to_str().unwrap(),
            "--table",
            "CombinedBio",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let script = fs::read_to_string(&output_file).unwrap();
    assert!(script.contains(
        "INSERT INTO CombinedBio (internal_id, id, Biography, brand_name, processed_at, run_id, segment, url) VALUES"
    ));
}

#[test]
fn test_clean_missing_file_reports_without_failing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let output = mssql_cleaner()
        .args(["clean", missing.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
    assert!(!temp_dir
        .path()
        .join("missing_cleaned_sqlserver.sql")
        .exists());
}

#[test]
fn test_clean_strict_fails_on_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("values.txt");
    fs::write(&input_file, "(1, 'x')").unwrap();

    let output = mssql_cleaner()
        .args(["clean", input_file.to_str().unwrap(), "--strict", "--dry-run"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Strict mode"));
}

#[test]
fn test_clean_dry_run_json() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("dump.sql");
    fs::write(
        &input_file,
        "INSERT INTO combined_addons (internal_id, id) VALUES (1, 'a'), (2, 'b');",
    )
    .unwrap();

    let output = mssql_cleaner()
        .args(["clean", input_file.to_str().unwrap(), "--dry-run", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["table"], "CombinedAddons");
    assert_eq!(json["records"], 2);
    assert_eq!(json["columns_detected"], true);
    assert!(json.get("output_file").is_none());
    assert!(!temp_dir.path().join("dump_cleaned_sqlserver.sql").exists());
}

#[test]
fn test_clean_glob_to_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "(1, 'a')").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "(1, 'b')").unwrap();
    let out_dir = temp_dir.path().join("out");

    let output = mssql_cleaner()
        .args([
            "clean",
            temp_dir.path().join("*.txt").to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(out_dir.join("a_cleaned_sqlserver.sql").exists());
    assert!(out_dir.join("b_cleaned_sqlserver.sql").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Succeeded: 2"));
}

#[test]
fn test_clean_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("plans.txt");
    let config_file = temp_dir.path().join("cleaner.yaml");
    let output_file = temp_dir.path().join("plans.sql");
    fs::write(&input_file, "(7, 'Basic')").unwrap();
    fs::write(
        &config_file,
        r#"
default_table: MobilePlans
column_defaults:
  - table_contains: Plans
    columns: [plan_id, name]
verification:
  primary_key: plan_id
  preview_rows: 3
"#,
    )
    .unwrap();

    let output = mssql_cleaner()
        .args([
            "clean",
            input_file.to_str().unwrap(),
            "-c",
            config_file.to_str().unwrap(),
            "-o",
            output_file.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "Command failed: {:?}", output);

    let script = fs::read_to_string(&output_file).unwrap();
    assert!(script.contains("INSERT INTO MobilePlans (plan_id, name) VALUES"));
    assert!(script.contains("SELECT TOP 3 * FROM MobilePlans ORDER BY plan_id DESC;"));
}

#[test]
fn test_clean_gzip_input() {
    use flate2::write::GzEncoder;

    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("dump.sql.gz");
    let output_file = temp_dir.path().join("out.sql");

    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(b"INSERT INTO combined_bio (internal_id) VALUES (1, 'it\\'s');")
        .unwrap();
    fs::write(&input_file, encoder.finish().unwrap()).unwrap();

    let output = mssql_cleaner()
        .args([
            "clean",
            input_file.to_str().unwrap(),
            "-o",
            output_file.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "Command failed: {:?}", output);

    let script = fs::read_to_string(&output_file).unwrap();
    assert!(script.contains("(1, 'it''s');"));
}

#[test]
fn test_samples_command() {
    let temp_dir = TempDir::new().unwrap();

    let output = mssql_cleaner()
        .args(["samples", "--dir", temp_dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert!(temp_dir.path().join("mysql_addons_data.txt").exists());
    assert!(temp_dir.path().join("mysql_bio_data.txt").exists());
}

#[test]
fn test_interactive_cleans_selected_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a_first.txt"), "(1, 'first')").unwrap();
    fs::write(temp_dir.path().join("b_second.txt"), "(2, 'second')").unwrap();

    let mut child = mssql_cleaner()
        .args(["interactive", "--dir", temp_dir.path().to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"2\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(temp_dir
        .path()
        .join("b_second_cleaned_sqlserver.sql")
        .exists());
    assert!(!temp_dir.path().join("a_first_cleaned_sqlserver.sql").exists());
}

#[test]
fn test_completions() {
    let output = mssql_cleaner().args(["completions", "bash"]).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("mssql-cleaner"));
}
