use crate::{
    MAX_SORT_COLUMNS,
    db::{
        cursor::{
            TokenError,
            wire::{
                ContinuationWire, FLAG_INCLUDE, FLAG_REVERSE, MAX_CONTINUATION_TOKEN_BYTES,
                pack_directions, unpack_directions,
            },
        },
        direction::Direction,
        scheme::SchemeId,
    },
    serialize::{deserialize_bounded, serialize},
    value::Value,
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::str::FromStr;

// base64 expands 3 bytes into 4 chars
const MAX_CONTINUATION_TOKEN_CHARS: usize = MAX_CONTINUATION_TOKEN_BYTES.div_ceil(3) * 4;

///
/// Continuation
///
/// Opaque pagination cursor: the boundary row's sort-key tuple plus enough
/// ordering state to resume a keyset scan from it.
///
/// `reverse` means "fetch the page immediately before this boundary".
/// `include` means the boundary row itself belongs to the fetched page.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Continuation {
    scheme_id: SchemeId,
    directions: Vec<Direction>,
    values: Vec<Value>,
    reverse: bool,
    include: bool,
}

impl Continuation {
    /// Build a continuation, checking that directions and values line up.
    pub fn new(
        scheme_id: SchemeId,
        directions: Vec<Direction>,
        values: Vec<Value>,
        reverse: bool,
        include: bool,
    ) -> Result<Self, TokenError> {
        if directions.len() != values.len() {
            return Err(TokenError::invalid(format!(
                "direction count {} does not match boundary arity {}",
                directions.len(),
                values.len()
            )));
        }
        if values.len() > MAX_SORT_COLUMNS {
            return Err(TokenError::invalid(format!(
                "boundary carries {} values (max {MAX_SORT_COLUMNS})",
                values.len()
            )));
        }

        Ok(Self {
            scheme_id,
            directions,
            values,
            reverse,
            include,
        })
    }

    #[must_use]
    pub const fn scheme_id(&self) -> SchemeId {
        self.scheme_id
    }

    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub const fn is_reverse(&self) -> bool {
        self.reverse
    }

    #[must_use]
    pub const fn is_inclusive(&self) -> bool {
        self.include
    }

    /// Inclusive continuation rooted at the same boundary, pointing the other way.
    #[must_use]
    pub(crate) fn reflect(&self) -> Self {
        Self {
            scheme_id: self.scheme_id,
            directions: self.directions.clone(),
            values: self.values.clone(),
            reverse: !self.reverse,
            include: true,
        }
    }

    /// Encode into the externally visible token string.
    ///
    /// Payloads that [`Continuation::decode`] would refuse are rejected here,
    /// so every issued token can be resumed.
    pub fn encode(&self) -> Result<String, TokenError> {
        let bytes =
            serialize(&self.to_wire()).map_err(|err| TokenError::Encode(err.to_string()))?;

        if bytes.len() > MAX_CONTINUATION_TOKEN_BYTES {
            return Err(TokenError::Encode(format!(
                "payload of {} bytes exceeds maximum of {MAX_CONTINUATION_TOKEN_BYTES}",
                bytes.len()
            )));
        }

        Ok(BASE64.encode(bytes))
    }

    /// Decode a token string produced by [`Continuation::encode`].
    ///
    /// Arity and value kinds are not checked against a scheme here.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let token = token.trim();

        if token.is_empty() {
            return Err(TokenError::invalid("continuation token is empty"));
        }
        if token.len() > MAX_CONTINUATION_TOKEN_CHARS {
            return Err(TokenError::invalid(format!(
                "continuation token exceeds max length: {} chars (max {MAX_CONTINUATION_TOKEN_CHARS})",
                token.len()
            )));
        }

        let bytes = BASE64
            .decode(token)
            .map_err(|err| TokenError::Base64(err.to_string()))?;
        let wire: ContinuationWire = deserialize_bounded(&bytes, MAX_CONTINUATION_TOKEN_BYTES)
            .map_err(|err| TokenError::Decode(err.to_string()))?;

        wire.validate()?;
        Ok(Self::from_wire(wire))
    }

    fn to_wire(&self) -> ContinuationWire {
        let mut flags = 0;
        if self.reverse {
            flags |= FLAG_REVERSE;
        }
        if self.include {
            flags |= FLAG_INCLUDE;
        }

        ContinuationWire(
            self.scheme_id.get(),
            pack_directions(&self.directions),
            flags,
            self.values.clone(),
        )
    }

    fn from_wire(wire: ContinuationWire) -> Self {
        let ContinuationWire(scheme_id, mask, flags, values) = wire;

        Self {
            scheme_id: SchemeId::from_u32(scheme_id),
            directions: unpack_directions(mask, values.len()),
            values,
            reverse: flags & FLAG_REVERSE != 0,
            include: flags & FLAG_INCLUDE != 0,
        }
    }
}

impl FromStr for Continuation {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
