//! Observation encoding and ordered vector assembly.
//!
//! The model consumes columns by position, so assembly is driven by a
//! [`ColumnOrder`] resolved once when the artifact is loaded: either the
//! order the artifact declares, or the canonical training order.

use chrono::NaiveDate;

use crate::calendar::derive_calendar_features;
use crate::survey::{Flag, TrafficLevel, Weather};
use crate::EncodeError;

/// The locked training order used when the artifact declares nothing.
pub const CANONICAL_FEATURE_ORDER: [&str; 8] = [
    "Shredded_chicken",
    "OutOfStockBefore7pm",
    "Human_Traffic",
    "Weather",
    "Public_Event",
    "day_of_week",
    "day_of_month",
    "week_of_year",
];

/// Raw inputs for one prediction request.
///
/// Built fresh from the current form state per request and discarded after
/// the prediction returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub date: NaiveDate,
    /// Shredded chicken on hand, in units
    pub shredded_units: u32,
    pub out_of_stock_before_7pm: Flag,
    pub traffic: TrafficLevel,
    pub weather: Weather,
    pub public_event: Flag,
}

/// Effective column ordering for vector assembly.
///
/// `Declared` carries the name list the artifact was fit against;
/// `Default` falls back to [`CANONICAL_FEATURE_ORDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOrder {
    Declared(Vec<String>),
    Default,
}

impl ColumnOrder {
    /// Resolve the effective order from an artifact's optional declaration.
    ///
    /// Every declared name must be a feature the encoder can produce, and no
    /// name may repeat. Rejecting here keeps a column mismatch from
    /// surfacing later as a silently misaligned prediction.
    pub fn resolve(declared: Option<Vec<String>>) -> Result<ColumnOrder, EncodeError> {
        let Some(names) = declared else {
            return Ok(ColumnOrder::Default);
        };
        for (i, name) in names.iter().enumerate() {
            if !CANONICAL_FEATURE_ORDER.contains(&name.as_str()) {
                return Err(EncodeError::UnknownFeature(name.clone()));
            }
            if names[..i].contains(name) {
                return Err(EncodeError::DuplicateFeature(name.clone()));
            }
        }
        Ok(ColumnOrder::Declared(names))
    }

    /// The ordered column names this order produces
    pub fn names(&self) -> Vec<&str> {
        match self {
            ColumnOrder::Declared(names) => names.iter().map(String::as_str).collect(),
            ColumnOrder::Default => CANONICAL_FEATURE_ORDER.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnOrder::Declared(names) => names.len(),
            ColumnOrder::Default => CANONICAL_FEATURE_ORDER.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered name -> value mapping ready to hand to the model
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Vec<(String, f64)>,
}

impl FeatureVector {
    /// Encode an observation into the given column order.
    pub fn assemble(order: &ColumnOrder, obs: &Observation) -> Result<FeatureVector, EncodeError> {
        let calendar = derive_calendar_features(obs.date);
        let mut columns = Vec::with_capacity(order.len());
        for name in order.names() {
            let value = match name {
                "Shredded_chicken" => f64::from(obs.shredded_units),
                "OutOfStockBefore7pm" => f64::from(obs.out_of_stock_before_7pm.code()),
                "Human_Traffic" => f64::from(obs.traffic.code()),
                "Weather" => f64::from(obs.weather.code()),
                "Public_Event" => f64::from(obs.public_event.code()),
                "day_of_week" => f64::from(calendar.day_of_week),
                "day_of_month" => f64::from(calendar.day_of_month),
                "week_of_year" => f64::from(calendar.week_of_year),
                other => return Err(EncodeError::UnknownFeature(other.to_string())),
            };
            columns.push((name.to_string(), value));
        }
        Ok(FeatureVector { columns })
    }

    /// Column names, in vector order
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Column values, in vector order
    pub fn values(&self) -> Vec<f64> {
        self.columns.iter().map(|&(_, value)| value).collect()
    }

    /// Look up a single column by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|&(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
