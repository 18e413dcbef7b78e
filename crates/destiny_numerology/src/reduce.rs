//! Theosophical digit reduction.
//!
//! Repeatedly summing the decimal digits of a positive integer until one
//! digit remains is equivalent to the closed form `((n - 1) mod 9) + 1`.
//! The closed form sends every multiple of 9 to 9, never to 0. Zero is the
//! single input that reduces to 0.

/// Reduce `n` to a single digit in `1..=9`. `digit_reduce(0) == 0`.
pub const fn digit_reduce(n: u64) -> u8 {
    if n == 0 {
        return 0;
    }
    ((n - 1) % 9 + 1) as u8
}

/// Sum of the decimal digits of `n`, one pass, no further reduction.
///
/// `digit_sum(1990) == 19`.
pub const fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
