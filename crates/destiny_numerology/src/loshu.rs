//! Loshu grid: how often each digit 1-9 appears in a birth date.
//!
//! The grid is laid out on the 3x3 Lo Shu magic square:
//!
//! ```text
//! 4 9 2
//! 3 5 7
//! 8 1 6
//! ```
//!
//! Zero digits are never counted; there is no cell for 0. A digit whose
//! count is zero is a "missing number".

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::birth_date::BirthDate;
use crate::error::NumerologyError;

/// Fixed Lo Shu magic-square arrangement, top row first.
pub const LOSHU_LAYOUT: [[u8; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// Occurrence count for each digit 1-9.
///
/// Always holds exactly nine entries. Serializes as a JSON object keyed
/// `"1"` through `"9"` in ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoshuGrid {
    counts: [u32; 9],
}

impl LoshuGrid {
    /// Count every digit 1-9 in `digits`. Zeros and values above 9 are skipped.
    pub fn from_digits(digits: impl IntoIterator<Item = u8>) -> Self {
        let mut counts = [0u32; 9];
        for d in digits {
            if (1..=9).contains(&d) {
                counts[(d - 1) as usize] += 1;
            }
        }
        Self { counts }
    }

    /// Grid for the digits of `date`.
    pub fn for_date(date: &BirthDate) -> Self {
        Self::from_digits(date.digits())
    }

    /// Occurrences of `digit`. Digits outside 1-9 have no cell and report 0.
    pub fn count(&self, digit: u8) -> u32 {
        match digit {
            1..=9 => self.counts[(digit - 1) as usize],
            _ => 0,
        }
    }

    /// `(digit, count)` pairs for digits 1 through 9.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (1..=9u8).zip(self.counts.iter().copied())
    }

    /// Digits with a zero count, ascending.
    pub fn missing_numbers(&self) -> Vec<u8> {
        self.iter().filter(|&(_, c)| c == 0).map(|(d, _)| d).collect()
    }

    /// Digits with a positive count, ascending.
    pub fn present_numbers(&self) -> Vec<u8> {
        self.iter().filter(|&(_, c)| c > 0).map(|(d, _)| d).collect()
    }

    /// Sum of all counts: the number of non-zero digits that were counted.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(digit, count)` cells in [`LOSHU_LAYOUT`] order.
    pub fn rows(&self) -> [[(u8, u32); 3]; 3] {
        LOSHU_LAYOUT.map(|row| row.map(|d| (d, self.count(d))))
    }

    /// Plain-text 3x3 rendering. A cell repeats its digit once per
    /// occurrence; a missing cell shows `-`.
    pub fn render(&self) -> String {
        let cells = self.rows().map(|row| {
            row.map(|(d, c)| {
                if c == 0 {
                    "-".to_string()
                } else {
                    d.to_string().repeat(c as usize)
                }
            })
        });
        let width = cells.iter().flatten().map(String::len).max().unwrap_or(1);

        let mut out = String::new();
        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let line = format!("{:<width$} | {:<width$} | {:<width$}", row[0], row[1], row[2]);
            out.push_str(line.trim_end());
        }
        out
    }
}

/// Loshu grid for the raw date `day`/`month`/`year`.
pub fn loshu_grid(day: u32, month: u32, year: u32) -> LoshuGrid {
    LoshuGrid::for_date(&BirthDate::new(day, month, year))
}

impl TryFrom<BTreeMap<u8, u32>> for LoshuGrid {
    type Error = NumerologyError;

    fn try_from(map: BTreeMap<u8, u32>) -> Result<Self, Self::Error> {
        let keys: Vec<u8> = map.keys().copied().collect();
        if keys != (1..=9).collect::<Vec<u8>>() {
            return Err(NumerologyError::InvalidGrid(format!(
                "expected digits 1-9, found {keys:?}"
            )));
        }
        let mut counts = [0u32; 9];
        for (d, c) in map {
            counts[(d - 1) as usize] = c;
        }
        Ok(Self { counts })
    }
}

impl Serialize for LoshuGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (d, c) in self.iter() {
            map.serialize_entry(&d, &c)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LoshuGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<u8, u32>::deserialize(deserializer)?;
        LoshuGrid::try_from(map).map_err(D::Error::custom)
    }
}
