//! PostgreSQL ILIKE operators.

use pgext_core::ToSQL;
use pgext_core::sql::{SQLChunk, Token};

use super::{Expression, operator};
use crate::values::PostgresValue;

/// Case-insensitive LIKE pattern matching (PostgreSQL-specific)
///
/// # Example
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::ilike;
/// use pgext_postgres::values::PostgresValue;
///
/// let name = SQL::<PostgresValue>::column("users", "name");
/// let query = ilike(name, PostgresValue::from("%john%"));
/// assert_eq!(query.sql(), r#""users"."name" ILIKE $1"#);
/// ```
pub fn ilike<'a, L, R>(left: L, pattern: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "ILIKE", pattern)
}

/// Case-insensitive NOT LIKE pattern matching (PostgreSQL-specific)
///
/// Generates: `"name" NOT ILIKE $1`
pub fn not_ilike<'a, L, R>(left: L, pattern: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    Expression::new(
        left.into_sql()
            .push(Token::NOT)
            .push(SQLChunk::raw_static("ILIKE"))
            .append(pattern.into_sql()),
    )
}
