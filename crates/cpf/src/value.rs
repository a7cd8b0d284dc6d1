use crate::checksum;
use crate::error::CpfError;
use crate::formatter;
use crate::parser;
use crate::record::CpfRecord;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::debug;

/// A CPF number, validated once at construction.
///
/// Malformed input does not fail construction: it yields a value with no
/// base or check digits that reports `is_valid() == false`. Values are never
/// mutated; [`Cpf::with_value`] builds a replacement.
///
/// Equality, hashing and ordering only look at the base and check digits.
#[derive(Debug, Clone, Default)]
pub struct Cpf {
    base: Option<u32>,
    check_digits: Option<u8>,
    valid: bool,
    formatted: Option<String>,
}

impl Cpf {
    pub const MAX_BASE: u32 = checksum::MAX_BASE;
    pub const MAX_CHECK_DIGITS: u8 = 99;

    /// Parses `DDD.DDD.DDD-DD` or eleven bare digits.
    pub fn parse(input: &str) -> Self {
        match parser::parse(input) {
            Ok(digits) => Self::validated(digits.base, digits.check_digits),
            Err(err) => {
                debug!(target: "cpf", error = %err, "malformed CPF input");
                Self::default()
            }
        }
    }

    /// Like [`Cpf::parse`], but surfaces why the input was rejected.
    pub fn try_parse(input: &str) -> Result<Self, CpfError> {
        let digits = parser::parse(input)?;
        let cpf = Self::validated(digits.base, digits.check_digits);
        cpf.validate()?;
        Ok(cpf)
    }

    /// Reads an integer as eleven digits, restoring any leading zeros.
    pub fn from_u64(value: u64) -> Self {
        Self::parse(&parser::pad_numeric(value))
    }

    /// Builds a value from an already separated base and check digits.
    pub fn from_parts(base: u32, check_digits: u8) -> Result<Self, CpfError> {
        if base > Self::MAX_BASE {
            return Err(CpfError::BaseOutOfRange(base));
        }
        if check_digits > Self::MAX_CHECK_DIGITS {
            return Err(CpfError::CheckDigitsOutOfRange(check_digits));
        }

        Ok(Self::validated(base, check_digits))
    }

    /// Completes `base` with its computed check digits.
    pub fn generate(base: u32) -> Result<Self, CpfError> {
        let check_digits = checksum::check_digits_for(base)?;
        Ok(Self::validated(base, check_digits))
    }

    /// Returns a fresh value parsed from `input`; `self` is left untouched.
    pub fn with_value(&self, input: &str) -> Self {
        Self::parse(input)
    }

    // Only reached with a base already known to fit in nine digits.
    fn validated(base: u32, check_digits: u8) -> Self {
        let valid = checksum::is_consistent(base, check_digits).unwrap_or(false);
        if !valid {
            debug!(
                target: "cpf",
                base,
                check_digits,
                "CPF check digits do not match base"
            );
        }

        Self {
            base: Some(base),
            check_digits: Some(check_digits),
            valid,
            formatted: valid.then(|| formatter::canonical(base, check_digits)),
        }
    }

    pub fn base(&self) -> Option<u32> {
        self.base
    }

    pub fn check_digits(&self) -> Option<u8> {
        self.check_digits
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The canonical string, present only for valid values.
    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    /// Explains why the value is not valid.
    ///
    /// A value with no digits reports [`CpfError::MalformedInput`] with an
    /// empty input, since the original text is not retained.
    pub fn validate(&self) -> Result<(), CpfError> {
        match (self.base, self.check_digits) {
            (Some(base), Some(provided)) => {
                let expected = checksum::check_digits_for(base)?;
                if expected == provided {
                    Ok(())
                } else {
                    Err(CpfError::ChecksumMismatch {
                        base,
                        provided,
                        expected,
                    })
                }
            }
            _ => Err(CpfError::MalformedInput {
                input: String::new(),
            }),
        }
    }

    /// Eleven-digit integer view: base followed by check digits.
    pub fn to_u64(&self) -> Option<u64> {
        match (self.base, self.check_digits) {
            (Some(base), Some(check_digits)) => {
                Some(u64::from(base) * 100 + u64::from(check_digits))
            }
            _ => None,
        }
    }

    pub fn record(&self) -> CpfRecord {
        CpfRecord::from(self)
    }

    fn key(&self) -> (Option<u32>, Option<u8>) {
        (self.base, self.check_digits)
    }
}

impl PartialEq for Cpf {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Cpf {}

impl Hash for Cpf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Cpf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cpf {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Cpf {
    /// Canonical form when valid, bare digits when parsed but invalid, and
    /// nothing for malformed input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.formatted, self.base, self.check_digits) {
            (Some(formatted), _, _) => f.write_str(formatted),
            (None, Some(base), Some(check_digits)) => {
                f.write_str(&formatter::unformatted(base, check_digits))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for Cpf {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Cpf {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<u64> for Cpf {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl TryFrom<(u32, u8)> for Cpf {
    type Error = CpfError;

    fn try_from((base, check_digits): (u32, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(base, check_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Cpf {
        Cpf::parse("347.843.610-90")
    }

    #[test]
    fn equality_ignores_validity_and_formatting() {
        let parsed = Cpf::parse("12345678900");
        let built = Cpf::from_parts(123_456_789, 0).expect("in range");
        assert!(!parsed.is_valid());
        assert_eq!(parsed, built);
        assert_ne!(parsed, sample());
    }

    #[test]
    fn hash_agrees_with_equality() {
        let mut seen = HashSet::new();
        seen.insert(sample());
        seen.insert(Cpf::parse("34784361090"));
        seen.insert(Cpf::from_u64(34_784_361_090));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn ordering_compares_base_then_check_digits() {
        let low = Cpf::from_parts(1, 91).expect("in range");
        let same_base_higher_digits = Cpf::from_parts(1, 92).expect("in range");
        let high = sample();

        assert!(low < same_base_higher_digits);
        assert!(same_base_higher_digits < high);
        assert_eq!(high.cmp(&sample()), Ordering::Equal);
    }

    #[test]
    fn malformed_values_sort_first() {
        let malformed = Cpf::parse("not-a-cpf");
        let zero = Cpf::parse("000.000.000-00");
        assert!(malformed < zero);
        assert_eq!(malformed, Cpf::default());
    }

    #[test]
    fn with_value_leaves_original_untouched() {
        let original = sample();
        let replaced = original.with_value("529.982.247-25");

        assert_eq!(original.formatted(), Some("347.843.610-90"));
        assert_eq!(replaced.base(), Some(529_982_247));
        assert!(replaced.is_valid());
    }

    #[test]
    fn display_falls_back_for_invalid_values() {
        assert_eq!(sample().to_string(), "347.843.610-90");
        assert_eq!(Cpf::parse("123.456.789-00").to_string(), "12345678900");
        assert_eq!(Cpf::parse("not-a-cpf").to_string(), "");
    }

    #[test]
    fn from_parts_rejects_out_of_range_fields() {
        assert_eq!(
            Cpf::from_parts(1_000_000_000, 0),
            Err(CpfError::BaseOutOfRange(1_000_000_000))
        );
        assert_eq!(
            Cpf::from_parts(347_843_610, 100),
            Err(CpfError::CheckDigitsOutOfRange(100))
        );
        assert!(Cpf::from_parts(Cpf::MAX_BASE, Cpf::MAX_CHECK_DIGITS)
            .expect("upper bounds are in range")
            .is_valid());
    }

    #[test]
    fn generate_completes_check_digits() {
        let cpf = Cpf::generate(3_478_436).expect("in range");
        assert_eq!(cpf.formatted(), Some("003.478.436-54"));
        assert!(Cpf::generate(u32::MAX).is_err());
    }

    #[test]
    fn try_parse_reports_reason() {
        assert!(matches!(
            Cpf::try_parse("not-a-cpf"),
            Err(CpfError::MalformedInput { .. })
        ));
        assert_eq!(
            Cpf::try_parse("123.456.789-00"),
            Err(CpfError::ChecksumMismatch {
                base: 123_456_789,
                provided: 0,
                expected: 9,
            })
        );
        assert_eq!(Cpf::try_parse("34784361090"), Ok(sample()));
    }

    #[test]
    fn validate_on_empty_value_is_malformed() {
        assert_eq!(
            Cpf::default().validate(),
            Err(CpfError::MalformedInput {
                input: String::new()
            })
        );
    }

    #[test]
    fn conversion_traits_match_named_constructors() {
        let from_str: Cpf = "347.843.610-90".parse().expect("infallible");
        let from_ref = Cpf::from("34784361090");
        let from_int = Cpf::from(34_784_361_090u64);
        let from_pair = Cpf::try_from((347_843_610u32, 90u8)).expect("in range");

        for cpf in [from_str, from_ref, from_int, from_pair] {
            assert_eq!(cpf, sample());
            assert!(cpf.is_valid());
        }
    }

    #[test]
    fn cpf_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cpf>();
    }
}
