use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Direction
///
/// Per-column sort direction. Also the traversal direction applied to ORDER BY
/// terms once a reverse continuation flips them.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    #[display("ASC")]
    Asc,
    #[display("DESC")]
    Desc,
}

impl Direction {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Flip only when `reverse` is set.
    #[must_use]
    pub const fn flip_if(self, reverse: bool) -> Self {
        if reverse { self.flip() } else { self }
    }

    // wire bit: 0 = ascending, 1 = descending
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Self::Asc => 0,
            Self::Desc => 1,
        }
    }

    pub(crate) const fn from_bit(bit: u8) -> Self {
        if bit & 0x01 == 0 { Self::Asc } else { Self::Desc }
    }

    /// Apply this direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Parse an `ASC` / `DESC` keyword, case-insensitively.
    #[must_use]
    pub fn parse_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if word.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}
