//! Brazilian individual taxpayer numbers (CPF).
//!
//! [`Cpf`] parses a candidate number from its formatted (`DDD.DDD.DDD-DD`),
//! raw 11-digit or integer form, checks the two mod-11 verifier digits and
//! renders the canonical string when they match.

pub mod checksum;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod record;
mod value;

pub use error::CpfError;
pub use record::CpfRecord;
pub use value::Cpf;
