//! Housing dataset loader
//!
//! Reads the tabular housing dataset once per session and derives the
//! per-column statistics (min/mean/max) that bound and default the
//! prediction sliders. The dataset is never mutated and never re-read.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Default on-disk location of the housing dataset
pub const DATASET_PATH: &str = "housing_data.csv";

/// Errors raised while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not readable: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset contains no rows")]
    Empty,
}

/// One row of the housing dataset. Extra columns in the file are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HousingRecord {
    /// Mean number of rooms per dwelling
    #[serde(rename = "RM")]
    pub rm: f64,
    /// Percentage of lower-status population
    #[serde(rename = "LSTAT")]
    pub lstat: f64,
    /// Pupil-teacher ratio
    #[serde(rename = "PTRATIO")]
    pub ptratio: f64,
    /// Weighted distance to employment centers
    #[serde(rename = "DIS")]
    pub dis: f64,
    /// Median home value in $1000s (the regression target)
    #[serde(rename = "MEDV")]
    pub medv: f64,
}

/// Min / mean / max of a single dataset column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl ColumnStats {
    fn from_values(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        for v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Self {
            min,
            mean: sum / count as f64,
            max,
        })
    }
}

/// Session-cached view of the housing dataset: the column statistics the
/// prediction form needs, plus summary figures for the home page.
#[derive(Debug, Clone)]
pub struct HousingDataset {
    pub rm: ColumnStats,
    pub lstat: ColumnStats,
    pub ptratio: ColumnStats,
    pub dis: ColumnStats,
    /// Number of rows in the dataset
    pub rows: usize,
    /// Mean of the MEDV column, in $1000s
    pub avg_price: f64,
}

impl HousingDataset {
    /// Load the dataset from a CSV file and reduce it to column statistics
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<HousingRecord>() {
            records.push(row?);
        }
        let dataset = Self::from_records(&records)?;
        info!(rows = dataset.rows, path = %path.display(), "housing dataset loaded");
        Ok(dataset)
    }

    /// Derive column statistics from in-memory records
    pub fn from_records(records: &[HousingRecord]) -> Result<Self, DatasetError> {
        let rm = ColumnStats::from_values(records.iter().map(|r| r.rm));
        let lstat = ColumnStats::from_values(records.iter().map(|r| r.lstat));
        let ptratio = ColumnStats::from_values(records.iter().map(|r| r.ptratio));
        let dis = ColumnStats::from_values(records.iter().map(|r| r.dis));
        let avg_price = ColumnStats::from_values(records.iter().map(|r| r.medv));

        match (rm, lstat, ptratio, dis, avg_price) {
            (Some(rm), Some(lstat), Some(ptratio), Some(dis), Some(price)) => Ok(Self {
                rm,
                lstat,
                ptratio,
                dis,
                rows: records.len(),
                avg_price: price.mean,
            }),
            _ => Err(DatasetError::Empty),
        }
    }
}
