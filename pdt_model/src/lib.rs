//! Regression artifact loading and prediction for Project COOK.
//!
//! The artifact is an externally trained linear regressor serialized as
//! JSON: weights, intercept, and optionally the feature-name order it was
//! fit against. [`Recommender`] owns one loaded artifact as an immutable
//! handle; construct it once at startup and pass it wherever predictions
//! are made.

pub mod artifact;
pub mod recommend;

pub use artifact::ModelArtifact;
pub use recommend::{Recommendation, Recommender};

use pdt_features::EncodeError;
use thiserror::Error;

/// Errors for artifact loading and prediction.
///
/// `Io` and `Parse` are load failures and fatal to the caller; the rest are
/// per-request and leave the process usable.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("feature vector has {actual} columns but the model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
}
