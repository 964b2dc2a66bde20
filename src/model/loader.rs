//! Explicit model bootstrap. The process owner loads the model once at
//! startup and passes it to the simulators; there is no global model state.
//! Reloading is just another `load_model` call producing a new value.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FeatureDiffs, ModelUnavailable, WinModel};

pub const DEFAULT_MODEL_PATH: &str = "data/model.json";

/// Logistic-regression classifier over the 11 feature differentials.
/// Weight order matches [`FeatureDiffs::as_array`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub intercept: f64,
    pub weights: [f64; 11],
}

impl WinModel for LogisticModel {
    fn predict(&self, diffs: &FeatureDiffs) -> Result<f64, ModelUnavailable> {
        let features = diffs.as_array();
        let z: f64 = self.intercept
            + self
                .weights
                .iter()
                .zip(features.iter())
                .map(|(w, x)| w * x)
                .sum::<f64>();
        if !z.is_finite() {
            return Err(ModelUnavailable);
        }
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

#[derive(Debug)]
pub enum ModelLoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ModelLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "model read failed: {err}"),
            Self::Parse(err) => write!(f, "model parse failed: {err}"),
        }
    }
}

impl std::error::Error for ModelLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

/// Load a serialized model. Callers decide what a missing model means; the
/// usual choice is to run without one and let the estimator fall back.
pub fn load_model(path: impl AsRef<Path>) -> Result<LogisticModel, ModelLoadError> {
    let raw = fs::read_to_string(path).map_err(ModelLoadError::Io)?;
    serde_json::from_str(&raw).map_err(ModelLoadError::Parse)
}
