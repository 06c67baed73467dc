//! Pre-trained regression artifacts
//!
//! Deserializes the fitted price model and its feature scaler from disk.
//! Both artifacts are opaque to the rest of the application: consumers only
//! see the [`Scaler`] and [`Regressor`] contracts and the fixed-order
//! feature vector `[RM, LSTAT, PTRATIO, DIS]`.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Default on-disk location of the fitted model
pub const MODEL_PATH: &str = "models/housing_model.json";
/// Default on-disk location of the feature scaler
pub const SCALER_PATH: &str = "models/scaler.json";

/// Errors raised while loading a serialized artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact file not readable: {0}")]
    Io(#[from] std::io::Error),
    #[error("artifact file not parseable: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deterministic feature transform applied before inference
pub trait Scaler {
    fn transform(&self, features: &[f64]) -> Vec<f64>;
}

/// Fitted regressor consumed only through its prediction contract
pub trait Regressor {
    fn predict(&self, features: &[f64]) -> f64;
}

/// Standard scaler parameters: per-feature mean and scale
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect()
    }
}

/// Linear regression parameters: intercept plus one coefficient per feature
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl Regressor for LinearModel {
    fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + features
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, c)| x * c)
                .sum::<f64>()
    }
}

/// The pair of artifacts the prediction view needs. Loaded once per process
/// and cached for its lifetime; missing either file fails the pair as a
/// whole so dependent views degrade together.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub model: LinearModel,
    pub scaler: StandardScaler,
}

impl Artifacts {
    pub fn load(model_path: &Path, scaler_path: &Path) -> Result<Self, ArtifactError> {
        let model: LinearModel = serde_json::from_str(&std::fs::read_to_string(model_path)?)?;
        let scaler: StandardScaler = serde_json::from_str(&std::fs::read_to_string(scaler_path)?)?;
        info!(
            model = %model_path.display(),
            scaler = %scaler_path.display(),
            "regression artifacts loaded"
        );
        Ok(Self { model, scaler })
    }

    /// Run the full pipeline for a fixed-order feature vector
    pub fn estimate(&self, features: &[f64]) -> f64 {
        estimate_price(&self.scaler, &self.model, features)
    }
}

/// `model.predict(scaler.transform(features))`
pub fn estimate_price<S, R>(scaler: &S, model: &R, features: &[f64]) -> f64
where
    S: Scaler + ?Sized,
    R: Regressor + ?Sized,
{
    model.predict(&scaler.transform(features))
}

/// Format an estimate in thousands of dollars, e.g. `$24.35k`
pub fn format_price(value: f64) -> String {
    format!("${:.2}k", value)
}
