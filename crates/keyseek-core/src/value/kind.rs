use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ValueKind
///
/// Declared type of a sort column. Boundary values decoded from a token must
/// match the declared kind of their column; `Null` is accepted everywhere.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ValueKind {
    Bool,
    Int,
    Uint,
    Float,
    Text,
}

impl ValueKind {
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        value.kind().is_none_or(|kind| kind == self)
    }
}
