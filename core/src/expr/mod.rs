//! Composable, parameterized predicate expressions.
//!
//! Every builder returns an [`SQLExpr`]: an immutable wrapper around an
//! [`SQL`] fragment. Expressions combine through [`and`], [`or`], [`not`]
//! or the `&`, `|` and `!` operators and render as a template with `$n`
//! placeholders plus the ordered bound values.
//!
//! ```
//! use pgext_core::expr::{and, eq, or};
//! use pgext_core::{SQL, SQLParam};
//! use std::borrow::Cow;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Int(i64);
//! impl SQLParam for Int {}
//! impl<'a> From<Int> for Cow<'a, Int> {
//!     fn from(v: Int) -> Self { Cow::Owned(v) }
//! }
//!
//! let a = eq(SQL::column("t", "a"), SQL::param(Int(1)));
//! let b = eq(SQL::column("t", "b"), SQL::param(Int(2)));
//! let c = eq(SQL::column("t", "c"), SQL::param(Int(3)));
//! let (sql, params) = or([and([a, b]), c]).into_parts();
//!
//! assert_eq!(sql, r#"(("t"."a" = $1 AND "t"."b" = $2) OR "t"."c" = $3)"#);
//! assert_eq!(params, vec![Int(1), Int(2), Int(3)]);
//! ```

mod cmp;
mod logical;
mod null;
mod set;
mod string;

pub use cmp::*;
pub use logical::*;
pub use null::*;
pub use set::*;
pub use string::*;

use core::ops::{BitAnd, BitOr, Not};

use crate::sql::{SQL, SQLChunk};
use crate::traits::{SQLParam, ToSQL};

/// Predicate that holds for every row.
pub const ALWAYS_TRUE: &str = "1=1";
/// Predicate that holds for no row.
pub const ALWAYS_FALSE: &str = "1=0";

/// An immutable SQL expression.
///
/// Expressions carry no identity beyond their fragment; building one never
/// fails and never touches a connection.
#[derive(Debug, Clone)]
pub struct SQLExpr<'a, V: SQLParam> {
    sql: SQL<'a, V>,
}

impl<'a, V: SQLParam + 'a> SQLExpr<'a, V> {
    #[inline]
    pub fn new(sql: SQL<'a, V>) -> Self {
        Self { sql }
    }

    /// `1=1`, used where an empty operand list means "no restriction".
    #[inline]
    pub fn always_true() -> Self {
        Self::new(SQL::raw(ALWAYS_TRUE))
    }

    /// `1=0`, used where an empty operand list means "nothing matches".
    #[inline]
    pub fn always_false() -> Self {
        Self::new(SQL::raw(ALWAYS_FALSE))
    }

    /// Whether the fragment is a single term that needs no parentheses when
    /// embedded: one identifier, or one raw chunk without whitespace such
    /// as `1=0`. Raw text like `a OR b` may hide an operator.
    pub(crate) fn is_atomic(&self) -> bool {
        match self.sql.chunks.as_slice() {
            [SQLChunk::Ident(_)] => true,
            [SQLChunk::Raw(text)] => !text.is_empty() && !text.chars().any(char::is_whitespace),
            _ => false,
        }
    }

    #[inline]
    pub fn as_sql(&self) -> &SQL<'a, V> {
        &self.sql
    }

    /// The SQL template with `$1..$n` placeholders.
    pub fn sql(&self) -> String {
        self.sql.sql()
    }

    /// Bound values in placeholder order.
    pub fn params(&self) -> impl Iterator<Item = &V> {
        self.sql.params()
    }

    /// Renders the template and borrows the bound values in a single pass.
    pub fn build(&self) -> (String, Vec<&V>) {
        let (sql, params) = self.sql.build();
        crate::pgext_trace_sql!(&sql, params.len());
        (sql, params)
    }

    /// Renders the template and takes ownership of the bound values.
    pub fn into_parts(self) -> (String, Vec<V>) {
        let (sql, params) = self.sql.into_parts();
        crate::pgext_trace_sql!(&sql, params.len());
        (sql, params)
    }
}

impl<'a, V: SQLParam + 'a> ToSQL<'a, V> for SQLExpr<'a, V> {
    fn to_sql(&self) -> SQL<'a, V> {
        self.sql.clone()
    }

    fn into_sql(self) -> SQL<'a, V> {
        self.sql
    }
}

impl<'a, V: SQLParam + 'a> From<SQLExpr<'a, V>> for SQL<'a, V> {
    fn from(expr: SQLExpr<'a, V>) -> Self {
        expr.sql
    }
}

impl<'a, V: SQLParam + 'a> core::fmt::Display for SQLExpr<'a, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.sql.sql())
    }
}

impl<'a, V: SQLParam + 'a, R: ToSQL<'a, V>> BitAnd<R> for SQLExpr<'a, V> {
    type Output = SQLExpr<'a, V>;

    fn bitand(self, rhs: R) -> Self::Output {
        and([self.into_sql(), rhs.into_sql()])
    }
}

impl<'a, V: SQLParam + 'a, R: ToSQL<'a, V>> BitOr<R> for SQLExpr<'a, V> {
    type Output = SQLExpr<'a, V>;

    fn bitor(self, rhs: R) -> Self::Output {
        or([self.into_sql(), rhs.into_sql()])
    }
}

impl<'a, V: SQLParam + 'a> Not for SQLExpr<'a, V> {
    type Output = SQLExpr<'a, V>;

    fn not(self) -> Self::Output {
        not(self)
    }
}

/// `left <operator> right`
///
/// Subqueries on the right are wrapped in parentheses. Dialect crates use
/// this with raw operators the shared [`Token`](crate::Token) set lacks.
pub fn infix<'a, V, L, R>(left: L, operator: impl Into<SQLChunk<'a, V>>, right: R) -> SQLExpr<'a, V>
where
    V: SQLParam + 'a,
    L: ToSQL<'a, V>,
    R: ToSQL<'a, V>,
{
    let right_sql = right.into_sql();
    // Wrap subqueries (starting with SELECT) in parentheses
    let right_sql = if right_sql.is_subquery() {
        right_sql.parens()
    } else {
        right_sql
    };
    SQLExpr::new(left.into_sql().push(operator).append(right_sql))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::Token;
    use std::borrow::Cow;

    #[derive(Debug, Clone, PartialEq)]
    struct Int(i64);

    impl SQLParam for Int {}

    impl<'a> From<Int> for Cow<'a, Int> {
        fn from(value: Int) -> Self {
            Cow::Owned(value)
        }
    }

    fn col(name: &'static str) -> SQL<'static, Int> {
        SQL::column("t", name)
    }

    fn val(v: i64) -> SQL<'static, Int> {
        SQL::param(Int(v))
    }

    #[test]
    fn and_wraps_two_or_more() {
        let expr = and([eq(col("a"), val(1)), eq(col("b"), val(2))]);
        let (sql, params) = expr.build();
        assert_eq!(sql, r#"("t"."a" = $1 AND "t"."b" = $2)"#);
        assert_eq!(params, vec![&Int(1), &Int(2)]);

        let single = and([eq(col("a"), val(1))]);
        assert_eq!(single.sql(), r#""t"."a" = $1"#);
    }

    #[test]
    fn empty_combinators_degrade_to_tautologies() {
        assert_eq!(and(Vec::<SQLExpr<'_, Int>>::new()).sql(), "1=1");
        assert_eq!(or(Vec::<SQLExpr<'_, Int>>::new()).sql(), "1=0");
        assert_eq!(in_list(col("a"), Vec::<SQL<'_, Int>>::new()).sql(), "1=0");
        assert_eq!(not_in_list(col("a"), Vec::<SQL<'_, Int>>::new()).sql(), "1=1");
    }

    #[test]
    fn operators() {
        let a = eq(col("a"), val(1));
        let b = gt(col("b"), val(2));
        let c = is_null(col("c"));
        let expr = (a & b) | !c;
        assert_eq!(
            expr.sql(),
            r#"(("t"."a" = $1 AND "t"."b" > $2) OR NOT ("t"."c" IS NULL))"#
        );
    }

    #[test]
    fn not_reuses_an_enclosing_group() {
        let group = or([eq(col("a"), val(1)), eq(col("b"), val(2))]);
        assert_eq!(
            not(group).sql(),
            r#"NOT ("t"."a" = $1 OR "t"."b" = $2)"#
        );

        // two groups side by side still need their own parens
        let pair = SQL::<Int>::raw("x").parens().push(Token::AND).append(SQL::raw("y").parens());
        assert!(!pair.is_parenthesized());
        assert_eq!(not(pair).sql(), "NOT ((x) AND (y))");
    }

    #[test]
    fn membership_and_ranges() {
        assert_eq!(
            in_list(col("a"), [val(1), val(2)]).sql(),
            r#""t"."a" IN ($1, $2)"#
        );
        assert_eq!(
            not_in_list(col("a"), [val(1)]).sql(),
            r#""t"."a" NOT IN ($1)"#
        );
        assert_eq!(
            between(col("a"), val(1), val(9)).sql(),
            r#""t"."a" BETWEEN $1 AND $2"#
        );
        assert_eq!(
            not_between(col("a"), val(1), val(9)).sql(),
            r#""t"."a" NOT BETWEEN $1 AND $2"#
        );
    }

    #[test]
    fn subqueries_are_wrapped_verbatim() {
        let sub: SQL<'_, Int> = SQL::raw("SELECT id FROM banned");
        assert_eq!(
            in_subquery(col("id"), sub.clone()).sql(),
            r#""t"."id" IN (SELECT id FROM banned)"#
        );
        assert_eq!(
            not_in_subquery(col("id"), sub.clone()).sql(),
            r#""t"."id" NOT IN (SELECT id FROM banned)"#
        );
        assert_eq!(exists(sub.clone()).sql(), "EXISTS (SELECT id FROM banned)");
        assert_eq!(not_exists(sub.clone()).sql(), "NOT EXISTS (SELECT id FROM banned)");
        assert_eq!(
            eq(col("id"), sub).sql(),
            r#""t"."id" = (SELECT id FROM banned)"#
        );
    }

    #[test]
    fn patterns_and_nulls() {
        assert_eq!(like(col("n"), val(1)).sql(), r#""t"."n" LIKE $1"#);
        assert_eq!(not_like(col("n"), val(1)).sql(), r#""t"."n" NOT LIKE $1"#);
        assert_eq!(is_not_null(col("n")).sql(), r#""t"."n" IS NOT NULL"#);
        assert_eq!(not(SQL::<Int>::raw("1=0")).sql(), "NOT 1=0");
        assert_eq!(not(SQL::<Int>::raw("a OR b")).sql(), "NOT (a OR b)");
        assert_eq!(not(SQL::<Int>::ident("flag")).sql(), r#"NOT "flag""#);
        assert_eq!(
            infix(col("n"), SQLChunk::raw_static("@>"), val(3)).sql(),
            r#""t"."n" @> $1"#
        );
    }
}
