//! PostgreSQL array operators.
//!
//! This module provides PostgreSQL-specific array operators:
//! - `@>` (contains)
//! - `<@` (contained by)
//! - `&&` (overlaps)
//! - `= ANY(...)` (element membership)
//!
//! # Example
//!
//! ```
//! use pgext_core::SQL;
//! use pgext_postgres::expr::array_contains;
//! use pgext_postgres::values::PostgresValue;
//! use pgext_types::Array;
//!
//! let tags = SQL::<PostgresValue>::column("posts", "tags");
//! let condition = array_contains(tags, PostgresValue::from(Array::from(vec!["rust"])));
//! assert_eq!(condition.sql(), r#""posts"."tags" @> $1"#);
//! ```

use pgext_core::ToSQL;
use pgext_core::sql::{SQL, Token};

use super::{Expression, operator};
use crate::values::PostgresValue;

/// PostgreSQL `@>` operator - array contains.
///
/// Returns true if the left array contains all elements of the right array.
pub fn array_contains<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "@>", right)
}

/// PostgreSQL `<@` operator - array is contained by.
///
/// Returns true if every element of the left array is in the right array.
pub fn array_contained<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "<@", right)
}

/// PostgreSQL `&&` operator - arrays overlap.
///
/// Returns true if the arrays have any elements in common.
pub fn array_overlaps<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "&&", right)
}

/// `value = ANY(array)` - the array has an element equal to `value`.
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::any_eq;
/// use pgext_postgres::values::PostgresValue;
///
/// let tags = SQL::<PostgresValue>::column("posts", "tags");
/// let condition = any_eq(PostgresValue::from("rust"), tags);
/// assert_eq!(condition.sql(), r#"$1 = ANY("posts"."tags")"#);
/// ```
pub fn any_eq<'a, V, A>(value: V, array: A) -> Expression<'a>
where
    V: ToSQL<'a, PostgresValue<'a>>,
    A: ToSQL<'a, PostgresValue<'a>>,
{
    let any = SQL::token(Token::ANY).append(array.into_sql().parens());
    Expression::new(value.into_sql().push(Token::EQ).append(any))
}
