//! Set operations (IN, NOT IN, EXISTS, NOT EXISTS).

use crate::sql::{SQL, Token};
use crate::traits::{SQLParam, ToSQL};

use super::SQLExpr;

fn list<'a, V, I, R>(values: I) -> Option<SQL<'a, V>>
where
    V: SQLParam + 'a,
    I: IntoIterator<Item = R>,
    R: ToSQL<'a, V>,
{
    let mut iter = values.into_iter().peekable();
    iter.peek()?;
    Some(SQL::join(iter, Token::COMMA).parens())
}

/// `expr IN (v1, v2, ...)`
///
/// An empty list degrades to `1=0`: nothing is a member of the empty set.
pub fn in_list<'a, V, E, I, R>(expr: E, values: I) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    I: IntoIterator<Item = R>,
    R: ToSQL<'a, V>,
{
    match list(values) {
        Some(values) => SQLExpr::new(expr.into_sql().push(Token::IN).append(values)),
        None => SQLExpr::always_false(),
    }
}

/// `expr NOT IN (v1, v2, ...)`
///
/// An empty list degrades to `1=1`.
pub fn not_in_list<'a, V, E, I, R>(expr: E, values: I) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    I: IntoIterator<Item = R>,
    R: ToSQL<'a, V>,
{
    match list(values) {
        Some(values) => SQLExpr::new(
            expr.into_sql()
                .push(Token::NOT)
                .push(Token::IN)
                .append(values),
        ),
        None => SQLExpr::always_true(),
    }
}

/// `expr IN (subquery)`
///
/// The subquery is embedded as given; its shape is not checked.
pub fn in_subquery<'a, V, E, S>(expr: E, subquery: S) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    S: ToSQL<'a, V>,
{
    SQLExpr::new(
        expr.into_sql()
            .push(Token::IN)
            .append(subquery.into_sql().parens()),
    )
}

/// `expr NOT IN (subquery)`
pub fn not_in_subquery<'a, V, E, S>(expr: E, subquery: S) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    S: ToSQL<'a, V>,
{
    SQLExpr::new(
        expr.into_sql()
            .push(Token::NOT)
            .push(Token::IN)
            .append(subquery.into_sql().parens()),
    )
}

/// `EXISTS (subquery)`
pub fn exists<'a, V, S>(subquery: S) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    S: ToSQL<'a, V>,
{
    SQLExpr::new(SQL::from(Token::EXISTS).append(subquery.into_sql().parens()))
}

/// `NOT EXISTS (subquery)`
pub fn not_exists<'a, V, S>(subquery: S) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    S: ToSQL<'a, V>,
{
    SQLExpr::new(
        SQL::from_iter([Token::NOT, Token::EXISTS]).append(subquery.into_sql().parens()),
    )
}
