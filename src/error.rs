use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use cpf::CpfError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Cpf(CpfError),
    InvalidInputs(usize),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "failed to encode output: {}", err),
            AppError::Cpf(err) => write!(f, "cpf error: {}", err),
            AppError::InvalidInputs(count) => {
                write!(f, "{} input(s) are not valid CPFs", count)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Cpf(err) => Some(err),
            AppError::InvalidInputs(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<TelemetryError> for AppError {
    fn from(err: TelemetryError) -> Self {
        Self::Telemetry(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<CpfError> for AppError {
    fn from(err: CpfError) -> Self {
        Self::Cpf(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_errors_carry_layer_prefix() {
        let err = AppError::from(CpfError::BaseOutOfRange(1_000_000_000));
        assert_eq!(err.to_string(), "cpf error: base 1000000000 exceeds nine digits");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_inputs_have_no_source() {
        let err = AppError::InvalidInputs(2);
        assert_eq!(err.to_string(), "2 input(s) are not valid CPFs");
        assert!(std::error::Error::source(&err).is_none());
    }
}
