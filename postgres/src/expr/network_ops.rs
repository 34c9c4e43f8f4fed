//! PostgreSQL network address operators.

use pgext_core::ToSQL;

use super::{Expression, operator};
use crate::values::PostgresValue;

/// PostgreSQL `>>` operator - the left network strictly contains the right address.
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::inet_contains;
/// use pgext_postgres::values::PostgresValue;
/// use pgext_types::Inet;
///
/// let net = SQL::<PostgresValue>::column("hosts", "net");
/// let addr: Inet = "10.1.2.3".parse().unwrap();
/// let condition = inet_contains(net, PostgresValue::from(addr));
/// assert_eq!(condition.sql(), r#""hosts"."net" >> $1"#);
/// ```
pub fn inet_contains<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, ">>", right)
}

/// PostgreSQL `>>=` operator - contains or equals.
pub fn inet_contains_or_equals<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, ">>=", right)
}

/// PostgreSQL `<<` operator - the left address is strictly inside the right network.
pub fn inet_contained<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "<<", right)
}

/// PostgreSQL `<<=` operator - contained by or equals.
pub fn inet_contained_or_equals<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "<<=", right)
}
