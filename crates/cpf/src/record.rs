use crate::error::CpfError;
use crate::value::Cpf;
use serde::{Deserialize, Serialize};

/// Field-level view of a [`Cpf`], for handing to a serializer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CpfRecord {
    pub formatted: Option<String>,
    pub base: Option<u32>,
    pub check_digits: Option<u8>,
}

impl CpfRecord {
    /// Rebuilds the value from `base` and `check_digits`; `formatted` is derived
    /// again rather than trusted.
    ///
    /// An empty record maps to the empty value. A record with only one of the
    /// two fields is rejected.
    pub fn into_cpf(self) -> Result<Cpf, CpfError> {
        match (self.base, self.check_digits) {
            (Some(base), Some(check_digits)) => Cpf::from_parts(base, check_digits),
            (None, None) => Ok(Cpf::default()),
            (Some(_), None) => Err(CpfError::IncompleteRecord {
                present: "base",
                missing: "check_digits",
            }),
            (None, Some(_)) => Err(CpfError::IncompleteRecord {
                present: "check_digits",
                missing: "base",
            }),
        }
    }
}

impl From<&Cpf> for CpfRecord {
    fn from(cpf: &Cpf) -> Self {
        Self {
            formatted: cpf.formatted().map(str::to_string),
            base: cpf.base(),
            check_digits: cpf.check_digits(),
        }
    }
}
