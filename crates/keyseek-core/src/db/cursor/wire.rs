use crate::{
    MAX_SORT_COLUMNS,
    db::{cursor::TokenError, direction::Direction},
    value::Value,
};
use serde::{Deserialize, Serialize};

/// Upper bound for the decoded binary payload of one token.
pub(crate) const MAX_CONTINUATION_TOKEN_BYTES: usize = 8 * 1024;

pub(super) const FLAG_REVERSE: u8 = 1 << 0;
pub(super) const FLAG_INCLUDE: u8 = 1 << 1;
const KNOWN_FLAGS: u8 = FLAG_REVERSE | FLAG_INCLUDE;

///
/// ContinuationWire
///
/// Fixed field order: scheme id, direction bitmask, flags, boundary values.
/// Serialized as a four-element array so the layout carries no field names.
///
/// Boundary values keep their externally tagged form (`{"Int": 5}`). The tag
/// costs a few bytes per column, but CBOR alone cannot tell `Int(5)` from
/// `Uint(5)` or `Float64(1.0)` from an integer, and the declared column kind
/// check needs the exact variant back.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(super) struct ContinuationWire(
    pub(super) u32,
    pub(super) u8,
    pub(super) u8,
    pub(super) Vec<Value>,
);

impl ContinuationWire {
    // Check payload shape before it becomes a `Continuation`.
    pub(super) fn validate(&self) -> Result<(), TokenError> {
        let arity = self.3.len();
        if arity > MAX_SORT_COLUMNS {
            return Err(TokenError::invalid(format!(
                "boundary carries {arity} values (max {MAX_SORT_COLUMNS})"
            )));
        }

        if self.2 & !KNOWN_FLAGS != 0 {
            return Err(TokenError::invalid(format!(
                "unknown flag bits set: {:#04x}",
                self.2
            )));
        }

        // bits beyond the boundary arity are always zero on encode
        let unused = if arity >= 8 { 0 } else { self.1 >> arity };
        if unused != 0 {
            return Err(TokenError::invalid(
                "direction bits set beyond boundary arity",
            ));
        }

        Ok(())
    }
}

/// Pack per-column directions into the wire bitmask.
pub(super) fn pack_directions(directions: &[Direction]) -> u8 {
    directions
        .iter()
        .enumerate()
        .fold(0_u8, |mask, (i, dir)| mask | (dir.bit() << i))
}

/// Unpack `arity` directions from the wire bitmask.
pub(super) fn unpack_directions(mask: u8, arity: usize) -> Vec<Direction> {
    (0..arity.min(MAX_SORT_COLUMNS))
        .map(|i| Direction::from_bit(mask >> i))
        .collect()
}
