//! Core runtime for keyseek: continuation tokens, the sort scheme registry,
//! seek predicate compilation, and the pager that ties them together.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod db;
pub mod error;
pub mod obs;
pub mod serialize;
pub mod traits;
pub mod value;

///
/// CONSTANTS
///

/// Maximum number of columns in a sort scheme.
///
/// Token direction flags are packed into a single byte, one bit per column.
pub const MAX_SORT_COLUMNS: usize = 8;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors or serializers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{
            Direction, Page, PageRequest, Pager, PagerOptions, PagingRequest, SchemeId,
            SchemeRegistry,
        },
        traits::SortKey,
        value::{Value, ValueKind},
    };
}
