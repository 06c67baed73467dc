//! Integration tests across the loaders, prediction pipeline, and log
//!
//! Exercises the same flow the views drive: load every artifact from disk,
//! build the prediction form from the session cache, run an estimate, and
//! record contact submissions.

use super::super::app::SessionData;
use super::super::contact::{ContactLog, ContactMessage};
use super::super::model::format_price;
use super::super::predict::PredictForm;
use std::io::Write;
use std::path::PathBuf;

fn write_fixtures(dir: &std::path::Path) -> (PathBuf, PathBuf, PathBuf) {
    let dataset_path = dir.join("housing_data.csv");
    let mut file = std::fs::File::create(&dataset_path).unwrap();
    writeln!(file, "RM,LSTAT,PTRATIO,DIS,MEDV").unwrap();
    writeln!(file, "5.0,10.0,14.0,2.0,18.0").unwrap();
    writeln!(file, "7.0,20.0,22.0,6.0,30.0").unwrap();
    drop(file);

    let model_path = dir.join("housing_model.json");
    std::fs::write(
        &model_path,
        r#"{"intercept": 20.0, "coefficients": [5.0, -0.5, -1.0, 0.5]}"#,
    )
    .unwrap();

    let scaler_path = dir.join("scaler.json");
    std::fs::write(
        &scaler_path,
        r#"{"mean": [6.0, 15.0, 18.0, 4.0], "scale": [1.0, 5.0, 4.0, 2.0]}"#,
    )
    .unwrap();

    (dataset_path, model_path, scaler_path)
}

#[test]
fn test_estimate_from_loaded_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let (dataset_path, model_path, scaler_path) = write_fixtures(dir.path());

    let session = SessionData::load_from(&dataset_path, &model_path, &scaler_path);
    assert!(session.is_ready());

    let form = PredictForm::new(&session).unwrap();
    // Defaults are the column means, which the scaler centers to zero, so
    // the estimate collapses to the intercept
    assert_eq!(form.feature_vector(), [6.0, 15.0, 18.0, 4.0]);
    let estimate = session.artifacts.as_ref().unwrap().estimate(&form.feature_vector());
    assert_eq!(estimate, 20.0);
    assert_eq!(format_price(estimate), "$20.00k");
}

#[test]
fn test_estimate_off_center_vector() {
    let dir = tempfile::tempdir().unwrap();
    let (dataset_path, model_path, scaler_path) = write_fixtures(dir.path());

    let session = SessionData::load_from(&dataset_path, &model_path, &scaler_path);
    let artifacts = session.artifacts.as_ref().unwrap();

    // scaled = [1.0, 1.0, 1.0, 1.0], estimate = 20 + 5 - 0.5 - 1 + 0.5
    let estimate = artifacts.estimate(&[7.0, 20.0, 22.0, 6.0]);
    assert!((estimate - 24.0).abs() < 1e-9);
    assert_eq!(format_price(estimate), "$24.00k");
}

#[test]
fn test_degraded_session_never_builds_a_form() {
    let dir = tempfile::tempdir().unwrap();
    let (dataset_path, _, scaler_path) = write_fixtures(dir.path());

    // Model file removed after fixture creation
    let session = SessionData::load_from(
        &dataset_path,
        &dir.path().join("removed.json"),
        &scaler_path,
    );
    assert!(PredictForm::new(&session).is_none());
    assert!(!session.warnings.is_empty());
}

#[test]
fn test_contact_submissions_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contactos.csv");
    let log = ContactLog::new(&path);

    for (name, body) in [("Ana", "first message"), ("Luis", "second message")] {
        let msg = ContactMessage::new(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            body.to_string(),
        );
        log.append(&msg).unwrap();
    }

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["Nombre", "Email", "Mensaje", "Fecha"])
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "first message");
    assert_eq!(&rows[1][2], "second message");
}
