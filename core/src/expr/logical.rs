//! Logical operators (AND, OR, NOT).
//!
//! This module provides both function-based and operator-based logical operations:
//!
//! ```ignore
//! // Function style
//! and([condition1, condition2])
//! or([condition1, condition2])
//! not(condition)
//!
//! // Operator style (via std::ops traits)
//! condition1 & condition2   // BitAnd
//! condition1 | condition2   // BitOr
//! !condition                // Not
//! ```

use crate::sql::{SQL, Token};
use crate::traits::{SQLParam, ToSQL};

use super::SQLExpr;

// =============================================================================
// NOT
// =============================================================================

/// Logical NOT.
///
/// Compound operands are parenthesized once: `NOT ("a" = $1)`.
pub fn not<'a, V, E>(expr: E) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    E: ToSQL<'a, V>,
{
    let expr = SQLExpr::new(expr.into_sql());
    let sql = if expr.is_atomic() || expr.as_sql().is_parenthesized() {
        SQL::from(Token::NOT).append(expr.into_sql())
    } else {
        SQL::from(Token::NOT).append(expr.into_sql().parens())
    };
    SQLExpr::new(sql)
}

// =============================================================================
// AND / OR
// =============================================================================

/// Joins non-empty operands with `separator`.
///
/// A single operand is returned as is; two or more are wrapped in
/// parentheses so the result composes without precedence surprises.
fn combine<'a, V, I, E>(conditions: I, separator: Token) -> Option<SQL<'a, V>>
where
    V: SQLParam + 'a,
    I: IntoIterator<Item = E>,
    E: ToSQL<'a, V>,
{
    let mut parts = conditions
        .into_iter()
        .map(|c| c.into_sql())
        .filter(|sql| !sql.is_empty());

    let first = parts.next()?;
    let Some(second) = parts.next() else {
        return Some(first);
    };
    let all = core::iter::once(first)
        .chain(core::iter::once(second))
        .chain(parts);
    Some(SQL::join(all, separator).parens())
}

/// Logical AND of multiple conditions.
///
/// An empty list matches every row (`1=1`).
pub fn and<'a, V, I, E>(conditions: I) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    I: IntoIterator<Item = E>,
    E: ToSQL<'a, V>,
{
    match combine(conditions, Token::AND) {
        Some(sql) => SQLExpr::new(sql),
        None => SQLExpr::always_true(),
    }
}

/// Logical OR of multiple conditions.
///
/// An empty list matches no row (`1=0`).
pub fn or<'a, V, I, E>(conditions: I) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    I: IntoIterator<Item = E>,
    E: ToSQL<'a, V>,
{
    match combine(conditions, Token::OR) {
        Some(sql) => SQLExpr::new(sql),
        None => SQLExpr::always_false(),
    }
}
