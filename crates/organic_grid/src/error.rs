//! Error types and result alias for the crate.
//!
//! Generation itself cannot fail for a validated configuration, so the only variant raised by
//! the core is [`Error::InvalidConfig`]. [`Error::Other`] exists for callers that funnel their own
//! messages through the same type.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Returns true when this error was raised by configuration validation.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Error::InvalidConfig(_))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(!err.is_invalid_config());
    }

    #[test]
    fn invalid_config_display_includes_reason() {
        let err = Error::InvalidConfig("columns must be > 0".into());
        assert!(err.is_invalid_config());
        assert_eq!(
            err.to_string(),
            "invalid configuration: columns must be > 0"
        );
    }
}
