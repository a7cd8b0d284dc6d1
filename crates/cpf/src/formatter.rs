/// Canonical `DDD.DDD.DDD-DD` rendering with zero padding.
pub fn canonical(base: u32, check_digits: u8) -> String {
    let digits = format!("{base:09}");
    format!(
        "{}.{}.{}-{check_digits:02}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9]
    )
}

/// Eleven bare digits: the base padded to nine, then the check digits padded to two.
pub fn unformatted(base: u32, check_digits: u8) -> String {
    format!("{base:09}{check_digits:02}")
}
