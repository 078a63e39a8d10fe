use derive_more::Display;
use keyseek_core::{
    config::ConfigError,
    error::{ErrorOrigin as CoreErrorOrigin, PagerError},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    /// True when the caller sent something unusable (bad token or order).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Pagination(
                PaginationErrorKind::TokenMalformed
                    | PaginationErrorKind::SchemeNotFound
                    | PaginationErrorKind::SchemeInvalid
            )
        )
    }
}

impl From<PagerError> for Error {
    fn from(err: PagerError) -> Self {
        let origin = err.origin().into();
        let kind = match err {
            PagerError::TokenMalformed(_) => {
                ErrorKind::Pagination(PaginationErrorKind::TokenMalformed)
            }
            PagerError::SchemeNotFound(_) => {
                ErrorKind::Pagination(PaginationErrorKind::SchemeNotFound)
            }
            PagerError::SchemeInvalid(_) => {
                ErrorKind::Pagination(PaginationErrorKind::SchemeInvalid)
            }
            PagerError::TokenEncode(_) => ErrorKind::Internal,
        };

        Self::new(kind, origin, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        let kind = match err {
            ConfigError::Io(_) => ConfigErrorKind::Unreadable,
            ConfigError::Parse(_) | ConfigError::Invalid(_) => ConfigErrorKind::Invalid,
        };

        Self::new(ErrorKind::Config(kind), ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and service interfaces.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Pagination(PaginationErrorKind),
    Config(ConfigErrorKind),

    /// The caller cannot remediate this.
    Internal,
}

///
/// PaginationErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PaginationErrorKind {
    /// Token failed to decode or does not fit its scheme.
    TokenMalformed,

    /// Referenced scheme (or default) is not registered for the row type.
    SchemeNotFound,

    /// Order expression or registration was rejected.
    SchemeInvalid,
}

///
/// ConfigErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConfigErrorKind {
    Unreadable,
    Invalid,
}

///
/// ErrorOrigin
/// Public origin taxonomy.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Cursor,
    Scheme,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Config => Self::Config,
            CoreErrorOrigin::Cursor => Self::Cursor,
            CoreErrorOrigin::Scheme => Self::Scheme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_errors_map_to_pagination_kinds() {
        let err = Error::from(PagerError::TokenMalformed("bad base64".to_string()));
        assert_eq!(
            err.kind,
            ErrorKind::Pagination(PaginationErrorKind::TokenMalformed)
        );
        assert_eq!(err.origin, ErrorOrigin::Cursor);
        assert_eq!(err.message, "malformed continuation token: bad base64");
        assert!(err.is_client_error());

        let err = Error::from(PagerError::SchemeNotFound("gone".to_string()));
        assert_eq!(err.origin, ErrorOrigin::Scheme);
        assert!(err.is_client_error());

        let err = Error::from(PagerError::TokenEncode("oom".to_string()));
        assert_eq!(err.kind, ErrorKind::Internal);
        assert!(!err.is_client_error());
    }

    #[test]
    fn config_errors_map_to_config_kinds() {
        let err = Error::from(ConfigError::Invalid("zero".to_string()));

        assert_eq!(err.kind, ErrorKind::Config(ConfigErrorKind::Invalid));
        assert_eq!(err.origin, ErrorOrigin::Config);
        assert_eq!(err.to_string(), "invalid pager config: zero");
    }

    #[test]
    fn origin_displays_variant_name() {
        assert_eq!(ErrorOrigin::Scheme.to_string(), "Scheme");
    }

    #[test]
    fn error_round_trips_through_json() {
        let err = Error::from(PagerError::SchemeInvalid("dup".to_string()));
        let json = serde_json::to_string(&err).expect("serialize error");
        let back: Error = serde_json::from_str(&json).expect("deserialize error");

        assert_eq!(back, err);
    }
}
