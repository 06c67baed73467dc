//! Unit tests for the housing dataset loader
//!
//! Tests cover:
//! - Column statistics (min/mean/max) derivation
//! - CSV parsing with extra columns
//! - Missing and empty dataset handling

use super::super::data::*;
use std::io::Write;

fn record(rm: f64, lstat: f64, ptratio: f64, dis: f64, medv: f64) -> HousingRecord {
    HousingRecord {
        rm,
        lstat,
        ptratio,
        dis,
        medv,
    }
}

// ============================================================================
// COLUMN STATISTICS TESTS
// ============================================================================

#[test]
fn test_stats_min_mean_max() {
    let records = vec![
        record(4.0, 2.0, 12.0, 1.0, 10.0),
        record(6.0, 10.0, 18.0, 5.0, 20.0),
        record(8.0, 30.0, 24.0, 9.0, 30.0),
    ];
    let dataset = HousingDataset::from_records(&records).unwrap();

    assert_eq!(dataset.rm.min, 4.0);
    assert_eq!(dataset.rm.mean, 6.0);
    assert_eq!(dataset.rm.max, 8.0);

    assert_eq!(dataset.lstat.min, 2.0);
    assert_eq!(dataset.lstat.mean, 14.0);
    assert_eq!(dataset.lstat.max, 30.0);

    assert_eq!(dataset.ptratio.min, 12.0);
    assert_eq!(dataset.ptratio.mean, 18.0);
    assert_eq!(dataset.ptratio.max, 24.0);

    assert_eq!(dataset.dis.min, 1.0);
    assert_eq!(dataset.dis.mean, 5.0);
    assert_eq!(dataset.dis.max, 9.0);
}

#[test]
fn test_stats_single_row() {
    let records = vec![record(6.5, 12.3, 18.7, 4.2, 24.0)];
    let dataset = HousingDataset::from_records(&records).unwrap();

    assert_eq!(dataset.rm.min, 6.5);
    assert_eq!(dataset.rm.mean, 6.5);
    assert_eq!(dataset.rm.max, 6.5);
    assert_eq!(dataset.rows, 1);
}

#[test]
fn test_summary_figures() {
    let records = vec![
        record(5.0, 5.0, 15.0, 3.0, 18.0),
        record(7.0, 15.0, 21.0, 7.0, 26.0),
    ];
    let dataset = HousingDataset::from_records(&records).unwrap();

    assert_eq!(dataset.rows, 2);
    assert_eq!(dataset.avg_price, 22.0);
}

#[test]
fn test_empty_records_rejected() {
    let result = HousingDataset::from_records(&[]);
    assert!(matches!(result, Err(DatasetError::Empty)));
}

// ============================================================================
// CSV LOADING TESTS
// ============================================================================

#[test]
fn test_load_csv_with_extra_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("housing_data.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "CRIM,RM,LSTAT,PTRATIO,DIS,TAX,MEDV").unwrap();
    writeln!(file, "0.02,5.0,4.0,14.0,2.0,296,20.0").unwrap();
    writeln!(file, "0.08,7.0,12.0,20.0,6.0,242,28.0").unwrap();
    drop(file);

    let dataset = HousingDataset::load(&path).unwrap();
    assert_eq!(dataset.rows, 2);
    assert_eq!(dataset.rm.min, 5.0);
    assert_eq!(dataset.rm.mean, 6.0);
    assert_eq!(dataset.rm.max, 7.0);
    assert_eq!(dataset.dis.max, 6.0);
    assert_eq!(dataset.avg_price, 24.0);
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = HousingDataset::load(&dir.path().join("nope.csv"));
    assert!(result.is_err());
}

#[test]
fn test_load_header_only_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("housing_data.csv");
    std::fs::write(&path, "RM,LSTAT,PTRATIO,DIS,MEDV\n").unwrap();

    let result = HousingDataset::load(&path);
    assert!(matches!(result, Err(DatasetError::Empty)));
}
