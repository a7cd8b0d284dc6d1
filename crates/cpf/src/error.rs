use thiserror::Error;

/// Reasons a candidate CPF is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpfError {
    /// Input matches neither `DDD.DDD.DDD-DD` nor eleven bare digits.
    #[error("'{input}' is not a CPF: expected DDD.DDD.DDD-DD or 11 digits")]
    MalformedInput { input: String },

    /// Structurally sound, but the verifier digits do not match the base.
    #[error("check digits {provided:02} do not match base {base:09} (expected {expected:02})")]
    ChecksumMismatch { base: u32, provided: u8, expected: u8 },

    #[error("base {0} exceeds nine digits")]
    BaseOutOfRange(u32),

    #[error("check digits {0} exceed two digits")]
    CheckDigitsOutOfRange(u8),

    /// A field record carrying only one of base and check digits.
    #[error("record has {present} but no {missing}")]
    IncompleteRecord {
        present: &'static str,
        missing: &'static str,
    },
}
