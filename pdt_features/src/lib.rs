//! Feature encoding for the Project COOK PDT recommendation model.
//!
//! Turns raw survey answers and a calendar date into the fixed-order numeric
//! feature vector the pre-trained regression artifact was fit against. The
//! label spellings, integer codes, and column order are all part of that
//! training contract and must not drift.

pub mod calendar;
pub mod survey;
pub mod vector;

pub use calendar::{derive_calendar_features, CalendarFeatures};
pub use survey::{Flag, TrafficLevel, Weather};
pub use vector::{ColumnOrder, FeatureVector, Observation, CANONICAL_FEATURE_ORDER};

use thiserror::Error;

/// Errors that can occur while encoding an observation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unrecognized {field} label: {label:?}")]
    UnknownLabel { field: &'static str, label: String },
    #[error("column order names unknown feature: {0:?}")]
    UnknownFeature(String),
    #[error("column order names feature {0:?} more than once")]
    DuplicateFeature(String),
}
