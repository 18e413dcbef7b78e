//! Birth date as a raw digit source.
//!
//! The calculators treat a date as three integers whose decimal forms are
//! concatenated `day ++ month ++ year` with no padding and no separators:
//! 5 September 1995 contributes `"591995"`, never `"05091995"`.
//!
//! [`BirthDate::new`] performs no calendar checks (31 February is accepted).
//! [`BirthDate::validated`] is the hardened constructor; for every real date
//! it yields the same value and therefore the same report.

use std::fmt::{Display, Formatter};

use crate::error::NumerologyError;

/// Day, month and year of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl BirthDate {
    /// Unchecked constructor. Any values are accepted.
    pub const fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day, month, year }
    }

    /// Construct a date that exists on the proleptic Gregorian calendar
    /// with a year in 1..=9999.
    pub fn validated(day: u32, month: u32, year: u32) -> Result<Self, NumerologyError> {
        let date = Self::new(day, month, year);
        date.check_calendar().inspect_err(|e| {
            tracing::warn!(day, month, year, error = %e, "rejected birth date");
        })?;
        Ok(date)
    }

    /// Parse the string fields persisted on a user profile.
    ///
    /// Leading whitespace and an optional `+` are skipped, then the leading
    /// run of decimal digits is taken; anything after it is ignored. A field
    /// without leading digits, a negative field, or one that overflows `u32`
    /// is rejected. `"05"` yields 5.
    pub fn from_profile_fields(day: &str, month: &str, year: &str) -> Result<Self, NumerologyError> {
        Ok(Self::new(
            parse_leading_int("day", day)?,
            parse_leading_int("month", month)?,
            parse_leading_int("year", year)?,
        ))
    }

    /// Whether this date exists on the calendar (year 1..=9999).
    pub fn is_calendar_date(&self) -> bool {
        self.check_calendar().is_ok()
    }

    /// Decimal forms of day, month and year concatenated in that order.
    pub fn digit_string(&self) -> String {
        format!("{}{}{}", self.day, self.month, self.year)
    }

    /// Every decimal digit of [`digit_string`](Self::digit_string), zeros included.
    pub fn digits(&self) -> impl Iterator<Item = u8> {
        self.digit_string().into_bytes().into_iter().map(|b| b - b'0')
    }

    fn check_calendar(&self) -> Result<(), NumerologyError> {
        if !(1..=9999).contains(&self.year) {
            return Err(NumerologyError::InvalidYear(self.year));
        }
        let max_day = days_in_month(self.year, self.month)
            .ok_or(NumerologyError::InvalidMonth(self.month))?;
        if self.day == 0 || self.day > max_day {
            return Err(NumerologyError::InvalidDay {
                day: self.day,
                month: self.month,
                year: self.year,
            });
        }
        Ok(())
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` of `year`, or `None` if `month` is outside 1-12.
pub const fn days_in_month(year: u32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

fn parse_leading_int(field: &'static str, raw: &str) -> Result<u32, NumerologyError> {
    let unparsable = || NumerologyError::UnparsableField {
        field,
        value: raw.to_string(),
    };
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return Err(unparsable());
    }
    s[..end].parse::<u32>().map_err(|_| unparsable())
}
