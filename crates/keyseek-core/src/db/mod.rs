//! Keyset pagination engine: continuation tokens, the sort scheme catalog,
//! seek predicate compilation and per-request pagers.

pub mod cursor;
pub mod direction;
pub mod memory;
pub mod pager;
pub mod scheme;
pub mod seek;

// re-exports
pub use cursor::{Continuation, TokenError};
pub use direction::Direction;
pub use pager::{Page, PageRequest, Pager, PagerOptions, PagingRequest};
pub use scheme::{SchemeBuilder, SchemeError, SchemeId, SchemeRegistry, SortColumn, SortScheme};
pub use seek::{CompareOp, ComparePredicate, OrderSpec, Predicate, SeekPlan, SeekTarget};
