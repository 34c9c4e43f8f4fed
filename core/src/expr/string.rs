//! Pattern matching.

use crate::sql::Token;
use crate::traits::{SQLParam, ToSQL};

use super::{SQLExpr, infix};

/// `expr LIKE pattern`
pub fn like<'a, V, E, P>(expr: E, pattern: P) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    P: ToSQL<'a, V>,
{
    infix(expr, Token::LIKE, pattern)
}

/// `expr NOT LIKE pattern`
pub fn not_like<'a, V, E, P>(expr: E, pattern: P) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    P: ToSQL<'a, V>,
{
    SQLExpr::new(
        expr.into_sql()
            .push(Token::NOT)
            .push(Token::LIKE)
            .append(pattern.into_sql()),
    )
}
