use crate::param::Param;
use crate::sql::{SQL, SQLChunk, Token};
use crate::traits::SQLParam;

/// Anything that can stand as an operand of a predicate builder.
///
/// Columns, bound values, nested expressions and raw fragments all render to
/// an [`SQL`] fragment; `'a` is the lifetime of any value the fragment
/// borrows.
pub trait ToSQL<'a, V: SQLParam> {
    fn to_sql(&self) -> SQL<'a, V>;

    /// Owning conversion. Override when the fragment is already held so the
    /// builders can move it instead of cloning.
    fn into_sql(self) -> SQL<'a, V>
    where
        Self: Sized,
    {
        self.to_sql()
    }
}

impl<'a, V: SQLParam, T> ToSQL<'a, V> for &T
where
    T: ToSQL<'a, V>,
{
    fn to_sql(&self) -> SQL<'a, V> {
        T::to_sql(self)
    }
}

impl<'a, V: SQLParam + 'a> ToSQL<'a, V> for Token {
    fn to_sql(&self) -> SQL<'a, V> {
        SQL::token(*self)
    }
}

/// A bare parameter renders as its `$n` placeholder.
impl<'a, V: SQLParam + 'a> ToSQL<'a, V> for Param<'a, V> {
    fn to_sql(&self) -> SQL<'a, V> {
        SQL::from(SQLChunk::Param(self.clone()))
    }

    fn into_sql(self) -> SQL<'a, V> {
        SQL::from(SQLChunk::Param(self))
    }
}
