//! Prediction over an encoded observation.

use log::debug;
use pdt_features::{ColumnOrder, FeatureVector, Observation};

use crate::{ModelArtifact, ModelError};

/// One prediction result.
///
/// `units` is the rounded, non-negative recommendation shown to the user;
/// `raw` keeps the regressor output and `vector` the encoded row for
/// inspection.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub units: u32,
    pub raw: f64,
    pub vector: FeatureVector,
}

/// An immutable prediction handle around a loaded artifact.
///
/// The column order is resolved once here, at construction, so every later
/// request assembles against the order the model actually expects.
#[derive(Debug, Clone)]
pub struct Recommender {
    artifact: ModelArtifact,
    order: ColumnOrder,
}

impl Recommender {
    /// Build a recommender from an already loaded artifact.
    ///
    /// Fails if the artifact declares a column the encoder cannot produce,
    /// or if its weight count disagrees with the column count.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Recommender, ModelError> {
        let order = ColumnOrder::resolve(artifact.feature_names.clone())?;
        if artifact.weights.len() != order.len() {
            return Err(ModelError::ShapeMismatch {
                expected: artifact.weights.len(),
                actual: order.len(),
            });
        }
        Ok(Recommender { artifact, order })
    }

    /// Load an artifact from disk and build a recommender from it.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Recommender, ModelError> {
        Self::from_artifact(ModelArtifact::load(path)?)
    }

    pub fn model_name(&self) -> &str {
        &self.artifact.model_name
    }

    pub fn column_order(&self) -> &ColumnOrder {
        &self.order
    }

    /// Encode an observation and run the regressor.
    ///
    /// The recommendation is clamped at zero before rounding; the model can
    /// extrapolate below zero but nobody cooks negative units.
    ///
    /// Construction already guarantees the weight count matches the column
    /// order, so the length check here is an invariant guard, not an
    /// expected failure path.
    pub fn recommend(&self, obs: &Observation) -> Result<Recommendation, ModelError> {
        let vector = FeatureVector::assemble(&self.order, obs)?;
        if vector.len() != self.artifact.weights.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.artifact.weights.len(),
                actual: vector.len(),
            });
        }
        let raw = self
            .artifact
            .weights
            .iter()
            .zip(vector.values())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.artifact.intercept;
        let units = raw.max(0.0).round() as u32;
        debug!(
            "model {:?}: raw prediction {raw:.3} -> {units} units",
            self.artifact.model_name
        );
        Ok(Recommendation { units, raw, vector })
    }
}
