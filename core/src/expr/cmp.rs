//! Comparison functions.

use crate::sql::Token;
use crate::traits::{SQLParam, ToSQL};

use super::{SQLExpr, infix};

/// Equality comparison (`=`).
pub fn eq<'a, V, L, R>(left: L, right: R) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    infix(left, Token::EQ, right)
}

/// Inequality comparison (`<>`).
pub fn neq<'a, V, L, R>(left: L, right: R) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    infix(left, Token::NE, right)
}

/// Greater-than comparison (`>`).
pub fn gt<'a, V, L, R>(left: L, right: R) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    infix(left, Token::GT, right)
}

/// Greater-than-or-equal comparison (`>=`).
pub fn gte<'a, V, L, R>(left: L, right: R) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    infix(left, Token::GE, right)
}

/// Less-than comparison (`<`).
pub fn lt<'a, V, L, R>(left: L, right: R) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    infix(left, Token::LT, right)
}

/// Less-than-or-equal comparison (`<=`).
pub fn lte<'a, V, L, R>(left: L, right: R) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    infix(left, Token::LE, right)
}

/// BETWEEN comparison: `expr BETWEEN low AND high`
pub fn between<'a, V, E, L, H>(expr: E, low: L, high: H) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    L: ToSQL<'a, V>,
    H: ToSQL<'a, V>,
{
    SQLExpr::new(
        expr.into_sql()
            .push(Token::BETWEEN)
            .append(low.into_sql())
            .push(Token::AND)
            .append(high.into_sql()),
    )
}

/// NOT BETWEEN comparison: `expr NOT BETWEEN low AND high`
pub fn not_between<'a, V, E, L, H>(expr: E, low: L, high: H) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
    L: ToSQL<'a, V>,
    H: ToSQL<'a, V>,
{
    SQLExpr::new(
        expr.into_sql()
            .push(Token::NOT)
            .push(Token::BETWEEN)
            .append(low.into_sql())
            .push(Token::AND)
            .append(high.into_sql()),
    )
}
