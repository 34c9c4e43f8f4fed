//! PostgreSQL geometric operators.

use pgext_core::sql::SQL;
use pgext_core::{SQLChunk, ToSQL};

use super::{Expression, operator};
use crate::values::PostgresValue;

/// PostgreSQL `<->` operator - distance between two shapes.
///
/// This is a value, not a predicate; compare it to bound a search radius.
///
/// ```
/// use pgext_core::SQL;
/// use pgext_core::expr::lt;
/// use pgext_postgres::expr::distance;
/// use pgext_postgres::values::PostgresValue;
/// use pgext_types::Point;
///
/// let pos = SQL::<PostgresValue>::column("shops", "pos");
/// let near = lt(distance(pos, PostgresValue::from(Point::new(0.0, 0.0))).parens(), PostgresValue::from(5.0));
/// assert_eq!(near.sql(), r#"("shops"."pos" <-> $1) < $2"#);
/// ```
pub fn distance<'a, L, R>(left: L, right: R) -> SQL<'a, PostgresValue<'a>>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    left.into_sql()
        .push(SQLChunk::raw_static("<->"))
        .append(right.into_sql())
}

/// PostgreSQL `@>` operator - the left shape contains the right one.
pub fn geo_contains<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "@>", right)
}

/// PostgreSQL `<@` operator - the left shape is contained in the right one.
pub fn geo_contained<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "<@", right)
}

/// PostgreSQL `&&` operator - the shapes overlap.
pub fn geo_overlaps<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "&&", right)
}
