use crate::db::{TokenError, scheme::SchemeError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// PagerError
///
/// Failures surfaced by pager construction and page mapping. Lower layers
/// (`TokenError`, `SchemeError`) fold into these four classes; the message
/// keeps the underlying detail.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PagerError {
    /// The token could not be decoded, or its boundary does not fit the scheme.
    #[error("malformed continuation token: {0}")]
    TokenMalformed(String),

    /// The referenced scheme (or the row type's default) is not registered.
    #[error("sort scheme not found: {0}")]
    SchemeNotFound(String),

    /// A registration or order expression was rejected.
    #[error("invalid sort scheme: {0}")]
    SchemeInvalid(String),

    /// Encoding an outbound token failed.
    #[error("failed to encode continuation token: {0}")]
    TokenEncode(String),
}

impl PagerError {
    pub(crate) fn token_malformed(message: impl Into<String>) -> Self {
        Self::TokenMalformed(message.into())
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::TokenMalformed(_) | Self::SchemeInvalid(_) => ErrorClass::InvalidInput,
            Self::SchemeNotFound(_) => ErrorClass::NotFound,
            Self::TokenEncode(_) => ErrorClass::Internal,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::TokenMalformed(_) | Self::TokenEncode(_) => ErrorOrigin::Cursor,
            Self::SchemeNotFound(_) | Self::SchemeInvalid(_) => ErrorOrigin::Scheme,
        }
    }
}

impl From<TokenError> for PagerError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encode(_) => Self::TokenEncode(err.to_string()),
            TokenError::Base64(_) | TokenError::Decode(_) | TokenError::Invalid { .. } => {
                Self::TokenMalformed(err.to_string())
            }
        }
    }
}

impl From<SchemeError> for PagerError {
    fn from(err: SchemeError) -> Self {
        if err.is_not_found() {
            Self::SchemeNotFound(err.to_string())
        } else {
            Self::SchemeInvalid(err.to_string())
        }
    }
}

///
/// ErrorClass
/// Stable classification of pagination failures.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    NotFound,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Subsystem that produced an error.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorOrigin {
    Config,
    Cursor,
    Scheme,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Cursor => "cursor",
            Self::Scheme => "scheme",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SchemeId;

    #[test]
    fn token_errors_map_to_malformed_except_encode() {
        let malformed = PagerError::from(TokenError::Base64("bad".to_string()));
        assert!(matches!(malformed, PagerError::TokenMalformed(_)));
        assert_eq!(malformed.class(), ErrorClass::InvalidInput);
        assert_eq!(malformed.origin(), ErrorOrigin::Cursor);

        let encode = PagerError::from(TokenError::Encode("io".to_string()));
        assert!(matches!(encode, PagerError::TokenEncode(_)));
        assert_eq!(encode.class(), ErrorClass::Internal);
    }

    #[test]
    fn scheme_errors_split_by_not_found() {
        let missing = PagerError::from(SchemeError::UnknownId {
            id: SchemeId::from_u32(0xdead_beef),
        });
        assert_eq!(
            missing,
            PagerError::SchemeNotFound("no sort scheme registered with id deadbeef".to_string())
        );
        assert_eq!(missing.class(), ErrorClass::NotFound);

        let invalid = PagerError::from(SchemeError::Invalid {
            reason: "empty".to_string(),
        });
        assert!(matches!(invalid, PagerError::SchemeInvalid(_)));
        assert_eq!(invalid.origin(), ErrorOrigin::Scheme);
    }

    #[test]
    fn class_labels_are_stable() {
        assert_eq!(ErrorClass::InvalidInput.to_string(), "invalid_input");
        assert_eq!(ErrorClass::NotFound.to_string(), "not_found");
        assert_eq!(ErrorOrigin::Cursor.to_string(), "cursor");
    }
}
