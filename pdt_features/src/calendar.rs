//! Calendar-derived features.
//!
//! Week numbering follows ISO 8601 (weeks start on Monday, week 1 is the week
//! containing the year's first Thursday). A naive day-count week disagrees
//! with the training data near year boundaries, so dates like 2021-01-01
//! must report week 53, not week 1.

use chrono::{Datelike, NaiveDate};

/// The three date-derived columns of the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFeatures {
    /// Monday = 0 through Sunday = 6
    pub day_of_week: u32,
    /// 1 through 31
    pub day_of_month: u32,
    /// ISO-8601 week number, 1 through 53
    pub week_of_year: u32,
}

/// Derive the calendar columns for a forecast date.
///
/// Pure function of the date; the rest of the observation plays no part.
pub fn derive_calendar_features(date: NaiveDate) -> CalendarFeatures {
    CalendarFeatures {
        day_of_week: date.weekday().num_days_from_monday(),
        day_of_month: date.day(),
        week_of_year: date.iso_week().week(),
    }
}
