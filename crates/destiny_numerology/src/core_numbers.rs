//! Moolank, Bhagyank and Kua numbers.

use crate::birth_date::BirthDate;
use crate::gender::Gender;
use crate::reduce::digit_reduce;

/// Moolank (driver number): the reduced day of birth.
pub const fn moolank(day: u32) -> u8 {
    digit_reduce(day as u64)
}

/// Bhagyank (conductor number): every digit of `day ++ month ++ year`
/// summed, then reduced.
///
/// This is the all-digits variant, not the sum of separately reduced parts.
pub fn bhagyank(day: u32, month: u32, year: u32) -> u8 {
    let total: u64 = BirthDate::new(day, month, year)
        .digits()
        .map(u64::from)
        .sum();
    digit_reduce(total)
}

/// Kua number from the birth year.
///
/// The year is reduced first. Male: `reduce(11 - year_sum)`.
/// Female: `reduce(year_sum + 4)`. `year_sum` is at most 9, so the male
/// subtraction never goes below 2.
pub const fn kua(year: u32, gender: Gender) -> u8 {
    let year_sum = digit_reduce(year as u64) as u64;
    match gender {
        Gender::Male => digit_reduce(11 - year_sum),
        Gender::Female => digit_reduce(year_sum + 4),
    }
}
