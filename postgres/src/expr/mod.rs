//! PostgreSQL-specific expressions.
//!
//! This module provides PostgreSQL dialect-specific SQL expressions and operators.
//! For standard SQL expressions, use `pgext_core::expr`.

mod array_ops;
mod geometric_ops;
mod ilike;
mod json_ops;
mod network_ops;
mod range_ops;
mod regex;
mod text_search;

pub use array_ops::*;
pub use geometric_ops::*;
pub use ilike::*;
pub use json_ops::*;
pub use network_ops::*;
pub use range_ops::*;
pub use regex::*;
pub use text_search::*;

use pgext_core::expr::{SQLExpr, infix};
use pgext_core::{SQLChunk, ToSQL};

use crate::values::PostgresValue;

/// A predicate over PostgreSQL values.
pub type Expression<'a> = SQLExpr<'a, PostgresValue<'a>>;

/// `left <op> right` for an operator outside the shared token set.
#[inline]
pub(crate) fn operator<'a, L, R>(left: L, op: &'static str, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    infix(left, SQLChunk::raw_static(op), right)
}
