//! CSV Data Loader Module
//! Reads the match and delivery tables using Polars and validates their schema.

use crate::data::{DataProcessor, Dataset};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Columns required in the match table.
pub const MATCH_COLUMNS: [&str; 4] = ["season", "team1", "team2", "winner"];

/// Columns required in the delivery table.
pub const DELIVERY_COLUMNS: [&str; 4] =
    ["batter", "batsman_runs", "player_dismissed", "dismissal_kind"];

/// Cell values read as missing, the same set pandas treats as NA by default.
pub const NA_VALUES: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Dataset not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("{} is missing required columns: {}", path.display(), missing.join(", "))]
    Schema { path: PathBuf, missing: Vec<String> },
}

/// Reads both datasets from fixed file locations. Nothing is cached:
/// every call goes back to storage.
#[derive(Debug, Clone)]
pub struct DataLoader {
    matches_path: PathBuf,
    deliveries_path: PathBuf,
}

impl DataLoader {
    pub fn new(matches_path: impl Into<PathBuf>, deliveries_path: impl Into<PathBuf>) -> Self {
        Self {
            matches_path: matches_path.into(),
            deliveries_path: deliveries_path.into(),
        }
    }

    /// Load both tables and convert them into typed records.
    pub fn load(&self) -> Result<Dataset, LoadError> {
        let matches_df = Self::load_csv(&self.matches_path, &MATCH_COLUMNS)?;
        let deliveries_df = Self::load_csv(&self.deliveries_path, &DELIVERY_COLUMNS)?;

        let matches = DataProcessor::matches_from_frame(&matches_df)?;
        let deliveries = DataProcessor::deliveries_from_frame(&deliveries_df)?;

        debug!(
            matches = matches.len(),
            deliveries = deliveries.len(),
            "datasets loaded"
        );

        Ok(Dataset::new(matches, deliveries))
    }

    /// Read one CSV file and check that every required column is present.
    pub fn load_csv(path: &Path, required: &[&str]) -> Result<DataFrame, LoadError> {
        if !path.is_file() {
            return Err(LoadError::Missing {
                path: path.to_path_buf(),
            });
        }

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .with_null_values(Some(NullValues::AllColumns(
                NA_VALUES.iter().map(|v| (*v).into()).collect(),
            )))
            .finish()?
            .collect()?;

        let missing = Self::missing_columns(&df, required);
        if !missing.is_empty() {
            return Err(LoadError::Schema {
                path: path.to_path_buf(),
                missing,
            });
        }

        Ok(df)
    }

    fn missing_columns(df: &DataFrame, required: &[&str]) -> Vec<String> {
        let present = df.get_column_names();
        required
            .iter()
            .filter(|name| !present.iter().any(|c| c.as_str() == **name))
            .map(|name| name.to_string())
            .collect()
    }
}
