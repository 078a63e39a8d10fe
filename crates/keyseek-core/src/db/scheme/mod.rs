//! Sort scheme catalog.
//!
//! A scheme is a registered multi-column ordering for one row type, addressed
//! by a content-derived id so tokens stay valid across process restarts.

mod builder;
mod error;
mod id;
mod model;
mod order;
mod registry;

#[cfg(test)]
mod tests;

pub use builder::SchemeBuilder;
pub use error::SchemeError;
pub use id::SchemeId;
pub use model::{SortColumn, SortScheme};
pub use order::{format_order, parse_order};
pub use registry::SchemeRegistry;

pub(crate) use order::normalize_column;
