//! Seek predicate compilation.
//!
//! Turns a scheme plus a continuation boundary into a backend-neutral plan:
//! a lexicographic tie-break filter, ORDER BY terms and a probe-row limit.

mod compile;
mod eval;
mod order;
mod predicate;
mod target;

#[cfg(feature = "sql")]
pub mod sql;


pub use compile::{SeekPlan, compile_seek_predicate, seek_operator, seek_order};
pub use order::OrderSpec;
pub use predicate::{CompareOp, ComparePredicate, Predicate};
pub use target::SeekTarget;
