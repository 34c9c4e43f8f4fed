//! NULL checks.

use crate::sql::Token;
use crate::traits::{SQLParam, ToSQL};

use super::SQLExpr;

/// `expr IS NULL`
pub fn is_null<'a, V, E>(expr: E) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
{
    SQLExpr::new(expr.into_sql().push(Token::IS).push(Token::NULL))
}

/// `expr IS NOT NULL`
pub fn is_not_null<'a, V, E>(expr: E) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
{
    SQLExpr::new(
        expr.into_sql()
            .push(Token::IS)
            .push(Token::NOT)
            .push(Token::NULL),
    )
}
