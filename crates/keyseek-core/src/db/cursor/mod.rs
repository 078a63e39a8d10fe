//! Continuation token codec.
//!
//! Owns the opaque wire format of continuation cursors. Scheme resolution and
//! boundary validation against a registered ordering live in `db::pager`.

mod error;
mod token;
mod wire;


pub use error::TokenError;
pub use token::Continuation;
