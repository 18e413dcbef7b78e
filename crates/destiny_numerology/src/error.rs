//! Error types for the validated and parsing layers.
//!
//! The raw calculators never fail; these errors only come from
//! [`BirthDate::validated`](crate::BirthDate::validated), profile-field
//! parsing, gender parsing and grid or report deserialization.

use thiserror::Error;

/// Errors from input validation around the numerology calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Day is zero or past the end of the month.
    #[error("invalid day {day} for month {month} of year {year}")]
    InvalidDay { day: u32, month: u32, year: u32 },
    /// Month outside 1-12.
    #[error("invalid month {0}, expected 1-12")]
    InvalidMonth(u32),
    /// Year outside 1-9999.
    #[error("invalid year {0}, expected 1-9999")]
    InvalidYear(u32),
    /// A persisted profile field holds no leading non-negative integer.
    #[error("cannot parse {field} from {value:?}")]
    UnparsableField { field: &'static str, value: String },
    /// Gender string is neither `male` nor `female`.
    #[error("unknown gender {0:?}, expected male or female")]
    UnknownGender(String),
    /// A serialized Loshu grid does not hold exactly the digits 1-9.
    #[error("invalid loshu grid: {0}")]
    InvalidGrid(String),
    /// A serialized report disagrees with its own grid or holds a core
    /// number outside 0-9.
    #[error("invalid numerology report: {0}")]
    InvalidReport(String),
}
