use thiserror::Error as ThisError;

///
/// TokenError
/// Continuation token encoding/decoding failures.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TokenError {
    #[error("continuation token is not valid base64: {0}")]
    Base64(String),

    #[error("failed to decode continuation token: {0}")]
    Decode(String),

    #[error("failed to encode continuation token: {0}")]
    Encode(String),

    #[error("invalid continuation token: {reason}")]
    Invalid { reason: String },
}

impl TokenError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}
