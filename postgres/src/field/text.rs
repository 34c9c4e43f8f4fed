use pgext_core::expr as sql;
use pgext_core::{SQL, SQLChunk, ToSQL};

use super::{Field, Textual, ValueFor};
use crate::expr::{self, Expression};
use crate::values::PostgresValue;

fn pattern<'a>(value: impl ValueFor<'a, String>) -> SQL<'a, PostgresValue<'a>> {
    SQL::param(value.into_value())
}

/// Patterns are always text, whatever the column type.
impl<T: Textual> Field<T> {
    /// The column, cast to text when its type is not a string type.
    fn as_text<'a>(&self) -> SQL<'a, PostgresValue<'a>> {
        let column = self.to_sql();
        if T::TEXT_CAST {
            column.push(SQLChunk::raw_static("::text"))
        } else {
            column
        }
    }

    pub fn like<'a>(&self, value: impl ValueFor<'a, String>) -> Expression<'a> {
        sql::like(self.as_text(), pattern(value))
    }

    pub fn not_like<'a>(&self, value: impl ValueFor<'a, String>) -> Expression<'a> {
        sql::not_like(self.as_text(), pattern(value))
    }

    pub fn ilike<'a>(&self, value: impl ValueFor<'a, String>) -> Expression<'a> {
        expr::ilike(self.as_text(), pattern(value))
    }

    pub fn not_ilike<'a>(&self, value: impl ValueFor<'a, String>) -> Expression<'a> {
        expr::not_ilike(self.as_text(), pattern(value))
    }

    /// POSIX regular expression match, `~`.
    pub fn regexp<'a>(&self, value: impl ValueFor<'a, String>) -> Expression<'a> {
        expr::regex_match(self.as_text(), pattern(value))
    }

    /// Case-insensitive regular expression match, `~*`.
    pub fn iregexp<'a>(&self, value: impl ValueFor<'a, String>) -> Expression<'a> {
        expr::regex_match_ci(self.as_text(), pattern(value))
    }

    pub fn not_regexp<'a>(&self, value: impl ValueFor<'a, String>) -> Expression<'a> {
        expr::regex_not_match(self.as_text(), pattern(value))
    }
}
