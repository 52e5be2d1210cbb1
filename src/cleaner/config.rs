//! YAML configuration for the clean command.
//!
//! Every section is optional; an empty file yields the built-in defaults
//! (fallback table `CombinedAddons`, column lists for the Addons and Bio
//! tables, verification ordered by `internal_id`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_TABLE: &str = "CombinedAddons";
pub const DEFAULT_PRIMARY_KEY: &str = "internal_id";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

const ADDONS_COLUMNS: &[&str] = &[
    "internal_id",
    "id",
    "additional_details",
    "amount",
    "amount_details",
    "best_seller",
    "billing_cycle",
    "brand_name",
    "description",
    "is_new",
    "limited_offer",
    "processed_at",
    "product_name",
    "run_id",
    "seasonal_offer",
    "segment",
    "url",
    "vat_applicable",
    "vat_included",
    "vat_percentage",
    "vat_percentage_details",
    "validity",
    "coverage_amount",
    "coverage_amount_details",
    "validity_details",
    "minutes",
    "minutes_type",
    "data_allowance",
    "data_allowance_details",
    "data_type",
    "minutes_details",
    "coverage_types",
];

const BIO_COLUMNS: &[&str] = &[
    "internal_id",
    "id",
    "Biography",
    "brand_name",
    "processed_at",
    "run_id",
    "segment",
    "url",
];

/// Column list used when a dump has no `INSERT INTO` header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefault {
    /// Applies when the table name contains this substring
    pub table_contains: String,
    pub columns: Vec<String>,
}

impl ColumnDefault {
    fn builtin(table_contains: &str, columns: &[&str]) -> Self {
        Self {
            table_contains: table_contains.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Settings for the trailing verification queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Column for `ORDER BY ... DESC` in the preview query
    pub primary_key: String,
    /// Row count for `SELECT TOP n`
    pub preview_rows: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            primary_key: DEFAULT_PRIMARY_KEY.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Complete YAML configuration for the clean command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerYamlConfig {
    /// Table name used when detection fails
    pub default_table: String,
    /// Ordered fallback column lists, first substring match wins
    pub column_defaults: Vec<ColumnDefault>,
    pub verification: VerificationConfig,
}

impl Default for CleanerYamlConfig {
    fn default() -> Self {
        Self {
            default_table: DEFAULT_TABLE.to_string(),
            column_defaults: vec![
                ColumnDefault::builtin("Addons", ADDONS_COLUMNS),
                ColumnDefault::builtin("Bio", BIO_COLUMNS),
            ],
            verification: VerificationConfig::default(),
        }
    }
}

impl CleanerYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CleanerYamlConfig = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Default column list for a table, matched by substring in order
    pub fn default_columns_for(&self, table: &str) -> Option<&[String]> {
        self.column_defaults
            .iter()
            .find(|d| table.contains(&d.table_contains))
            .map(|d| d.columns.as_slice())
    }
}
