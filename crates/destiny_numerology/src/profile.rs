//! Full numerology report assembly.

use serde::{Deserialize, Serialize};

use crate::birth_date::BirthDate;
use crate::core_numbers::{bhagyank, kua, moolank};
use crate::error::NumerologyError;
use crate::gender::Gender;
use crate::loshu::LoshuGrid;

/// Core numbers and Loshu grid for one (date, gender) pair.
///
/// A report has no identity beyond its inputs: computing it twice from the
/// same inputs yields equal values. JSON field names are `moolank`,
/// `bhagyank`, `kua`, `loshuGrid` and `missingNumbers`. Reading a report
/// back rejects one whose missing numbers disagree with its grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredReport")]
pub struct NumerologyReport {
    /// Driver number, 1-9 for any day >= 1.
    pub moolank: u8,
    /// Conductor number, 1-9 for any date with a non-zero digit.
    pub bhagyank: u8,
    /// Kua number, always 1-9.
    pub kua: u8,
    /// Digit frequencies over `day ++ month ++ year`.
    pub loshu_grid: LoshuGrid,
    /// Digits 1-9 absent from the date, ascending.
    pub missing_numbers: Vec<u8>,
}

impl NumerologyReport {
    /// Compute the report for `date` and `gender`.
    pub fn compute(date: &BirthDate, gender: Gender) -> Self {
        tracing::trace!(
            day = date.day,
            month = date.month,
            year = date.year,
            gender = gender.name(),
            "computing numerology profile"
        );
        let loshu_grid = LoshuGrid::for_date(date);
        Self {
            moolank: moolank(date.day),
            bhagyank: bhagyank(date.day, date.month, date.year),
            kua: kua(date.year, gender),
            missing_numbers: loshu_grid.missing_numbers(),
            loshu_grid,
        }
    }

    /// Missing numbers joined with `", "`, e.g. `3, 4, 6, 7`. Empty when
    /// every digit is present.
    pub fn missing_numbers_joined(&self) -> String {
        self.missing_numbers
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Loshu grid as a compact JSON object, e.g. `{"1":2,"2":1,...,"9":2}`.
    pub fn loshu_grid_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.loshu_grid)
    }
}

/// Wire form of a report before its fields are checked against each other.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredReport {
    moolank: u8,
    bhagyank: u8,
    kua: u8,
    loshu_grid: LoshuGrid,
    missing_numbers: Vec<u8>,
}

impl TryFrom<StoredReport> for NumerologyReport {
    type Error = NumerologyError;

    fn try_from(raw: StoredReport) -> Result<Self, Self::Error> {
        let invalid = |msg: String| -> Result<Self, Self::Error> {
            Err(NumerologyError::InvalidReport(msg))
        };
        if raw.moolank > 9 {
            return invalid(format!("moolank {} is not a single digit", raw.moolank));
        }
        if raw.bhagyank > 9 {
            return invalid(format!("bhagyank {} is not a single digit", raw.bhagyank));
        }
        if !(1..=9).contains(&raw.kua) {
            return invalid(format!("kua {} is outside 1-9", raw.kua));
        }
        let expected = raw.loshu_grid.missing_numbers();
        if raw.missing_numbers != expected {
            return invalid(format!(
                "missing numbers {:?} do not match grid, expected {expected:?}",
                raw.missing_numbers
            ));
        }
        Ok(Self {
            moolank: raw.moolank,
            bhagyank: raw.bhagyank,
            kua: raw.kua,
            loshu_grid: raw.loshu_grid,
            missing_numbers: raw.missing_numbers,
        })
    }
}

/// Compute the report for a raw (unvalidated) date.
pub fn compute_numerology_profile(day: u32, month: u32, year: u32, gender: Gender) -> NumerologyReport {
    NumerologyReport::compute(&BirthDate::new(day, month, year), gender)
}
