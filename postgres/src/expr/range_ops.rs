//! PostgreSQL range operators.
//!
//! - `@>` (contains element or range)
//! - `<@` (contained by)
//! - `&&` (overlaps)
//! - `<<` / `>>` (strictly left / right of)
//! - `-|-` (adjacent)

use pgext_core::ToSQL;

use super::{Expression, operator};
use crate::values::PostgresValue;

/// PostgreSQL `@>` operator - the range contains an element or another range.
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::range_contains;
/// use pgext_postgres::values::PostgresValue;
///
/// let during = SQL::<PostgresValue>::column("bookings", "during");
/// let condition = range_contains(during, PostgresValue::from(5));
/// assert_eq!(condition.sql(), r#""bookings"."during" @> $1"#);
/// ```
pub fn range_contains<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "@>", right)
}

/// PostgreSQL `<@` operator - the range is contained by another range.
pub fn range_contained<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "<@", right)
}

/// PostgreSQL `&&` operator - the ranges share at least one point.
pub fn range_overlaps<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "&&", right)
}

/// PostgreSQL `<<` operator - every point of the left range is before the right range.
pub fn range_strictly_left<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "<<", right)
}

/// PostgreSQL `>>` operator - every point of the left range is after the right range.
pub fn range_strictly_right<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, ">>", right)
}

/// PostgreSQL `-|-` operator - the ranges touch without overlapping.
pub fn range_adjacent<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "-|-", right)
}
