use crate::db::scheme::SchemeId;
use thiserror::Error as ThisError;

///
/// SchemeError
///
/// Sort scheme registration and lookup failures.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemeError {
    #[error("no sort scheme registered with id {id}")]
    UnknownId { id: SchemeId },

    #[error("no default sort scheme registered for '{row_type}'")]
    NoDefault { row_type: String },

    #[error("no sort scheme registered for '{row_type}' ordered by [{columns}]")]
    UnknownColumns { row_type: String, columns: String },

    #[error("sort scheme {id} belongs to '{actual}', not '{expected}'")]
    RowTypeMismatch {
        id: SchemeId,
        expected: String,
        actual: String,
    },

    #[error("invalid sort scheme: {reason}")]
    Invalid { reason: String },
}

impl SchemeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    /// True for every lookup miss; false for registration/shape errors.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        !matches!(self, Self::Invalid { .. })
    }
}
