//! Dialect-neutral SQL fragment engine
//!
//! - [`SQL`] / [`SQLChunk`] - flat fragment storage with `$n` rendering
//! - [`SQLExpr`](expr::SQLExpr) - immutable, composable predicates
//! - [`expr`] - comparison, logical, set, null and pattern builders
//!
//! Bound values are any [`SQLParam`] type; dialect crates supply their own
//! value enum.

pub mod expr;
mod param;
pub mod sql;
#[doc(hidden)]
pub mod tracing;
mod traits;

pub use param::Param;
pub use sql::{SQL, SQLChunk, Token};
pub use traits::{SQLParam, ToSQL};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::expr::{SQLExpr, and, not, or};
    pub use crate::{SQL, SQLChunk, SQLParam, ToSQL, Token};
}
