//! Unit tests for the session cache and view routing state
//!
//! Tests cover:
//! - View enum defaults and labels
//! - Session loading with present and missing artifacts
//! - Slider state derived from column statistics
//! - Prediction form construction gating

use super::super::app::*;
use super::super::data::ColumnStats;
use super::super::predict::{PredictForm, SliderState};
use std::io::Write;
use std::path::PathBuf;

// ============================================================================
// VIEW ROUTING TESTS
// ============================================================================

#[test]
fn test_default_view_is_home() {
    assert_eq!(ActiveView::default(), ActiveView::Home);
}

#[test]
fn test_view_labels() {
    assert_eq!(ActiveView::Home.label(), "Home");
    assert_eq!(ActiveView::Predict.label(), "Appraise");
    assert_eq!(ActiveView::Contact.label(), "Contact");
}

#[test]
fn test_all_views_enumerated_once() {
    let all = ActiveView::all();
    assert_eq!(all.len(), 3);
    assert!(all.contains(&ActiveView::Home));
    assert!(all.contains(&ActiveView::Predict));
    assert!(all.contains(&ActiveView::Contact));
}

// ============================================================================
// SESSION LOADING TESTS
// ============================================================================

fn write_dataset(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("housing_data.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "RM,LSTAT,PTRATIO,DIS,MEDV").unwrap();
    writeln!(file, "4.0,2.0,12.0,2.0,15.0").unwrap();
    writeln!(file, "8.0,18.0,22.0,8.0,35.0").unwrap();
    path
}

fn write_model(dir: &std::path::Path) -> (PathBuf, PathBuf) {
    let model_path = dir.join("housing_model.json");
    let scaler_path = dir.join("scaler.json");
    std::fs::write(
        &model_path,
        r#"{"intercept": 0.0, "coefficients": [1.0, 1.0, 1.0, 1.0]}"#,
    )
    .unwrap();
    std::fs::write(
        &scaler_path,
        r#"{"mean": [0.0, 0.0, 0.0, 0.0], "scale": [1.0, 1.0, 1.0, 1.0]}"#,
    )
    .unwrap();
    (model_path, scaler_path)
}

#[test]
fn test_session_all_artifacts_present() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = write_dataset(dir.path());
    let (model_path, scaler_path) = write_model(dir.path());

    let session = SessionData::load_from(&dataset_path, &model_path, &scaler_path);
    assert!(session.is_ready());
    assert!(session.warnings.is_empty());
    assert_eq!(session.dataset.as_ref().unwrap().rows, 2);
}

#[test]
fn test_session_missing_dataset_warns_and_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let (model_path, scaler_path) = write_model(dir.path());

    let session =
        SessionData::load_from(&dir.path().join("nope.csv"), &model_path, &scaler_path);
    assert!(!session.is_ready());
    assert!(session.dataset.is_none());
    assert!(session.artifacts.is_some());
    assert_eq!(session.warnings.len(), 1);
}

#[test]
fn test_session_missing_model_warns_independently() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = write_dataset(dir.path());
    let (_, scaler_path) = write_model(dir.path());

    let session =
        SessionData::load_from(&dataset_path, &dir.path().join("nope.json"), &scaler_path);
    assert!(!session.is_ready());
    assert!(session.dataset.is_some());
    assert!(session.artifacts.is_none());
    assert_eq!(session.warnings.len(), 1);
}

#[test]
fn test_session_everything_missing_warns_twice() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let session = SessionData::load_from(&missing, &missing, &missing);
    assert!(!session.is_ready());
    assert_eq!(session.warnings.len(), 2);
}

// ============================================================================
// SLIDER STATE TESTS
// ============================================================================

#[test]
fn test_slider_bounds_from_column_stats() {
    let stats = ColumnStats {
        min: 4.0,
        mean: 6.0,
        max: 8.0,
    };
    let slider = SliderState::from_stats(&stats);
    assert_eq!(slider.min, 4.0);
    assert_eq!(slider.max, 8.0);
    assert_eq!(slider.value, 6.0);
}

#[test]
fn test_slider_set_clamps_to_range() {
    let stats = ColumnStats {
        min: 1.0,
        mean: 2.0,
        max: 3.0,
    };
    let mut slider = SliderState::from_stats(&stats);
    slider.set(10.0);
    assert_eq!(slider.value, 3.0);
    slider.set(-10.0);
    assert_eq!(slider.value, 1.0);
}

#[test]
fn test_slider_step_by_stays_in_range() {
    let stats = ColumnStats {
        min: 0.0,
        mean: 5.0,
        max: 10.0,
    };
    let mut slider = SliderState::from_stats(&stats);
    for _ in 0..100 {
        slider.step_by(1.0);
    }
    assert_eq!(slider.value, 10.0);
    for _ in 0..200 {
        slider.step_by(-1.0);
    }
    assert_eq!(slider.value, 0.0);
}

// ============================================================================
// PREDICTION FORM GATING TESTS
// ============================================================================

#[test]
fn test_form_defaults_to_column_means() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = write_dataset(dir.path());
    let (model_path, scaler_path) = write_model(dir.path());

    let session = SessionData::load_from(&dataset_path, &model_path, &scaler_path);
    let form = PredictForm::new(&session).unwrap();
    assert_eq!(form.feature_vector(), [6.0, 10.0, 17.0, 5.0]);
}

#[test]
fn test_form_requires_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let (model_path, scaler_path) = write_model(dir.path());

    let session =
        SessionData::load_from(&dir.path().join("nope.csv"), &model_path, &scaler_path);
    assert!(PredictForm::new(&session).is_none());
}

#[test]
fn test_form_requires_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = write_dataset(dir.path());
    let (_, scaler_path) = write_model(dir.path());

    let session =
        SessionData::load_from(&dataset_path, &dir.path().join("nope.json"), &scaler_path);
    assert!(PredictForm::new(&session).is_none());
}
