//! Survey label domains and their locked integer encodings.
//!
//! The codes here must match the values the regression artifact saw during
//! training. The collaborating form constrains what labels can reach us, but
//! parsing still validates rather than assumes.

use std::fmt;
use std::str::FromStr;

use crate::EncodeError;

/// A yes/no survey answer (stock-out flag, public event flag)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    No,
    Yes,
}

impl Flag {
    /// Integer code used in the feature vector
    pub fn code(self) -> i32 {
        match self {
            Flag::No => 0,
            Flag::Yes => 1,
        }
    }

    /// Canonical label as shown on the survey form
    pub fn label(self) -> &'static str {
        match self {
            Flag::No => "No",
            Flag::Yes => "Yes",
        }
    }
}

impl FromStr for Flag {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "No" => Ok(Flag::No),
            "Yes" => Ok(Flag::Yes),
            other => Err(EncodeError::UnknownLabel {
                field: "yes/no flag",
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expected customer traffic relative to a normal day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLevel {
    MuchLower,
    Neutral,
    Higher,
    MuchHigher,
}

impl TrafficLevel {
    pub fn code(self) -> i32 {
        match self {
            TrafficLevel::MuchLower => -2,
            TrafficLevel::Neutral => 0,
            TrafficLevel::Higher => 1,
            TrafficLevel::MuchHigher => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrafficLevel::MuchLower => "Much Lower",
            TrafficLevel::Neutral => "Neutral",
            TrafficLevel::Higher => "Higher",
            TrafficLevel::MuchHigher => "Much Higher",
        }
    }
}

impl FromStr for TrafficLevel {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Much Lower" => Ok(TrafficLevel::MuchLower),
            "Neutral" => Ok(TrafficLevel::Neutral),
            "Higher" => Ok(TrafficLevel::Higher),
            "Much Higher" => Ok(TrafficLevel::MuchHigher),
            other => Err(EncodeError::UnknownLabel {
                field: "traffic",
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weather outlook for the forecast day.
///
/// The ordering of codes is not monotonic in temperature; it reproduces the
/// encoding the model was trained with (Rainy drives the most demand).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Cold,
    Warm,
    Hot,
    Rainy,
}

impl Weather {
    pub fn code(self) -> i32 {
        match self {
            Weather::Cold => 1,
            Weather::Warm => 0,
            Weather::Hot => -1,
            Weather::Rainy => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Weather::Cold => "Cold",
            Weather::Warm => "Warm",
            Weather::Hot => "Hot",
            Weather::Rainy => "Rainy",
        }
    }
}

impl FromStr for Weather {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cold" => Ok(Weather::Cold),
            "Warm" => Ok(Weather::Warm),
            "Hot" => Ok(Weather::Hot),
            "Rainy" => Ok(Weather::Rainy),
            other => Err(EncodeError::UnknownLabel {
                field: "weather",
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
