//! Mod-11 verifier digits.
//!
//! Each pass weighs the digits from `len + 1` (leftmost) down to 2, takes the
//! sum modulo 11 and maps remainders below 2 to `0`, anything else to
//! `11 - remainder`. The first pass runs over the nine base digits, the second
//! over the base followed by the first verifier digit.

use crate::error::CpfError;

/// Number of digits in a CPF base.
pub const BASE_LEN: usize = 9;
/// Largest base that fits in nine digits.
pub const MAX_BASE: u32 = 999_999_999;

/// Splits a base into its nine decimal digits, most significant first.
pub fn base_digits(base: u32) -> Result<[u8; BASE_LEN], CpfError> {
    if base > MAX_BASE {
        return Err(CpfError::BaseOutOfRange(base));
    }

    let mut digits = [0u8; BASE_LEN];
    let mut rest = base;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    Ok(digits)
}

/// One weighted mod-11 pass over `digits`.
pub fn verifier_digit(digits: &[u8]) -> u8 {
    let sum: usize = digits
        .iter()
        .rev()
        .zip(2usize..)
        .map(|(digit, weight)| usize::from(*digit) * weight)
        .sum();

    match (sum % 11) as u8 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

/// Both verifier digits for `base`, the first as tens and the second as units.
pub fn check_digits_for(base: u32) -> Result<u8, CpfError> {
    let mut digits = Vec::with_capacity(BASE_LEN + 1);
    digits.extend_from_slice(&base_digits(base)?);

    let first = verifier_digit(&digits);
    digits.push(first);
    let second = verifier_digit(&digits);

    Ok(first * 10 + second)
}

pub fn is_consistent(base: u32, check_digits: u8) -> Result<bool, CpfError> {
    Ok(check_digits_for(base)? == check_digits)
}
