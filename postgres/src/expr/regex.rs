//! PostgreSQL POSIX regular expression operators.

use pgext_core::ToSQL;

use super::{Expression, operator};
use crate::values::PostgresValue;

/// PostgreSQL `~` operator - case-sensitive regex match.
///
/// # Example
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::regex_match;
/// use pgext_postgres::values::PostgresValue;
///
/// let name = SQL::<PostgresValue>::column("users", "name");
/// let cond = regex_match(name, PostgresValue::from("^[A-Z]"));
/// assert_eq!(cond.sql(), r#""users"."name" ~ $1"#);
/// ```
pub fn regex_match<'a, L, R>(left: L, pattern: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "~", pattern)
}

/// PostgreSQL `~*` operator - case-insensitive regex match.
pub fn regex_match_ci<'a, L, R>(left: L, pattern: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "~*", pattern)
}

/// PostgreSQL `!~` operator - case-sensitive regex non-match.
pub fn regex_not_match<'a, L, R>(left: L, pattern: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "!~", pattern)
}

/// PostgreSQL `!~*` operator - case-insensitive regex non-match.
pub fn regex_not_match_ci<'a, L, R>(left: L, pattern: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "!~*", pattern)
}
