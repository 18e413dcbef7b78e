//! Deterministic numerology calculations derived from a date of birth.
//!
//! This crate provides:
//! - Theosophical digit reduction (the primitive behind every core number)
//! - Moolank (driver), Bhagyank (conductor) and Kua numbers
//! - Loshu grid digit-frequency tables and missing-number derivation
//! - A `NumerologyReport` assembling all of the above
//!
//! Every calculation is a pure function of its inputs. The raw entry points
//! accept any non-negative integers and never fail; calendar validation is
//! an opt-in layer on [`BirthDate`].

pub mod birth_date;
pub mod core_numbers;
pub mod error;
pub mod gender;
pub mod loshu;
pub mod profile;
pub mod reduce;

pub use birth_date::{BirthDate, days_in_month, is_leap_year};
pub use core_numbers::{bhagyank, kua, moolank};
pub use error::NumerologyError;
pub use gender::{ALL_GENDERS, Gender};
pub use loshu::{LOSHU_LAYOUT, LoshuGrid, loshu_grid};
pub use profile::{NumerologyReport, compute_numerology_profile};
pub use reduce::{digit_reduce, digit_sum};
