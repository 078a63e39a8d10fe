//! ## Crate layout
//! - `core`: continuation tokens, sort scheme registry, seek compilation,
//!   pager, configuration and observability.
//! - `error`: public error taxonomy for service boundaries.
//!
//! The `prelude` module carries the vocabulary a request handler needs to
//! register schemes and page through rows.

pub use keyseek_core as core;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::{config::PagerConfig, db, obs};
pub use error::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        config::PagerConfig,
        db::{
            Direction, Page, PageRequest, Pager, PagerOptions, PagingRequest as _, SchemeBuilder,
            SchemeId, SchemeRegistry, memory,
        },
        traits::SortKey,
        value::{Value, ValueKind},
    };
    pub use crate::error::Error;
}
