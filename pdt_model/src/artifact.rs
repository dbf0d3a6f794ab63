//! The serialized model artifact.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A pre-trained linear regressor as produced by the training pipeline.
///
/// `feature_names`, when present, declares the exact column order the model
/// was fit against; absent, prediction falls back to the canonical order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_name: String,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl ModelArtifact {
    /// Load an artifact from a JSON file.
    ///
    /// A missing or unparseable file is a fatal load failure; nothing is
    /// cached or retried.
    pub fn load(path: impl AsRef<Path>) -> Result<ModelArtifact, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        debug!(
            "loaded model {:?} ({} weights) from {}",
            artifact.model_name,
            artifact.weights.len(),
            path.display()
        );
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_artifact_from_json_file() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let path = tmp.path().join("model.json");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(
            br#"{"model_name":"pdt-v1","weights":[0.1,0.2],"intercept":3.5}"#,
        )
        .expect("write");

        let artifact = ModelArtifact::load(&path).expect("load");
        assert_eq!(artifact.model_name, "pdt-v1");
        assert_eq!(artifact.weights, vec![0.1, 0.2]);
        assert_eq!(artifact.intercept, 3.5);
        assert!(artifact.feature_names.is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ModelArtifact::load("no/such/model.json").unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let path = tmp.path().join("model.json");
        std::fs::write(&path, "not json at all").expect("write");
        let err = ModelArtifact::load(&path).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }
}
