//! Typed column references.
//!
//! A [`Field<T>`] names a `(table, column)` pair whose values are Rust type
//! `T`. It is the entry point for building predicates: the operators it
//! offers depend on `T`, so `tags.overlaps(..)` only exists for array
//! columns and `name.ilike(..)` only for text columns.
//!
//! ```
//! use pgext_postgres::Field;
//! use pgext_core::expr::or;
//!
//! const ID: Field<i64> = Field::new("users", "id");
//! const NAME: Field<String> = Field::new("users", "name");
//!
//! let cond = or([ID.eq(1) & NAME.ilike("a%"), ID.gt(100)]);
//! assert_eq!(
//!     cond.sql(),
//!     r#"(("users"."id" = $1 AND "users"."name" ILIKE $2) OR "users"."id" > $3)"#
//! );
//! ```

mod array;
mod geometry;
mod json;
mod kind;
mod network;
mod options;
mod range;
mod text;
mod text_search;

pub use kind::{Geometric, Network, Ordered, Textual, ValueFor};
pub use options::FieldOptions;

use std::fmt;
use std::marker::PhantomData;

use pgext_core::expr as sql;
use pgext_core::{SQL, SQLChunk, ToSQL};
use pgext_types::literal::NULL_SENTINEL;
use pgext_types::{CodecError, FromLiteral, ParseError, PgType};

use crate::expr::Expression;
use crate::values::{CodecConfig, PostgresValue, decode_text};

/// A typed reference to `"table"."column"`.
pub struct Field<T> {
    table: &'static str,
    column: &'static str,
    options: FieldOptions,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    pub const fn new(table: &'static str, column: &'static str) -> Self {
        Self {
            table,
            column,
            options: FieldOptions::new(),
            _marker: PhantomData,
        }
    }

    pub const fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub const fn table(&self) -> &'static str {
        self.table
    }

    #[inline]
    pub const fn column(&self) -> &'static str {
        self.column
    }

    #[inline]
    pub const fn options(&self) -> &FieldOptions {
        &self.options
    }

    /// Key used for this column when a row is serialized.
    pub const fn json_name(&self) -> &'static str {
        match self.options.json_tag {
            Some(tag) => tag,
            None => self.column,
        }
    }

    fn param<'a>(value: impl ValueFor<'a, T>) -> SQL<'a, PostgresValue<'a>> {
        SQL::param(value.into_value())
    }

    /// `"t"."c" <op> value` for an operator outside the shared token set.
    fn operator<'a>(&self, op: &'static str, value: PostgresValue<'a>) -> Expression<'a> {
        sql::infix(self, SQLChunk::raw_static(op), value)
    }

    // ==================== common ====================

    pub fn eq<'a>(&self, value: impl ValueFor<'a, T>) -> Expression<'a> {
        sql::eq(self, Self::param(value))
    }

    pub fn neq<'a>(&self, value: impl ValueFor<'a, T>) -> Expression<'a> {
        sql::neq(self, Self::param(value))
    }

    /// `"t"."c" IN ($1, $2, ...)`; an empty list matches nothing.
    pub fn in_list<'a, I>(&self, values: I) -> Expression<'a>
    where
        I: IntoIterator,
        I::Item: ValueFor<'a, T>,
    {
        sql::in_list(self, values.into_iter().map(Self::param))
    }

    /// `"t"."c" NOT IN ($1, $2, ...)`; an empty list matches everything.
    pub fn not_in<'a, I>(&self, values: I) -> Expression<'a>
    where
        I: IntoIterator,
        I::Item: ValueFor<'a, T>,
    {
        sql::not_in_list(self, values.into_iter().map(Self::param))
    }

    pub fn is_null<'a>(&self) -> Expression<'a> {
        sql::is_null(self)
    }

    pub fn is_not_null<'a>(&self) -> Expression<'a> {
        sql::is_not_null(self)
    }

    /// `"t"."c" IN (subquery)`; the subquery is embedded as given.
    pub fn in_subquery<'a, S>(&self, subquery: S) -> Expression<'a>
    where
        S: ToSQL<'a, PostgresValue<'a>>,
    {
        sql::in_subquery(self, subquery)
    }

    pub fn not_in_subquery<'a, S>(&self, subquery: S) -> Expression<'a>
    where
        S: ToSQL<'a, PostgresValue<'a>>,
    {
        sql::not_in_subquery(self, subquery)
    }
}

impl<T: Ordered> Field<T> {
    pub fn gt<'a>(&self, value: impl ValueFor<'a, T>) -> Expression<'a> {
        sql::gt(self, Self::param(value))
    }

    pub fn gte<'a>(&self, value: impl ValueFor<'a, T>) -> Expression<'a> {
        sql::gte(self, Self::param(value))
    }

    pub fn lt<'a>(&self, value: impl ValueFor<'a, T>) -> Expression<'a> {
        sql::lt(self, Self::param(value))
    }

    pub fn lte<'a>(&self, value: impl ValueFor<'a, T>) -> Expression<'a> {
        sql::lte(self, Self::param(value))
    }

    pub fn between<'a>(
        &self,
        low: impl ValueFor<'a, T>,
        high: impl ValueFor<'a, T>,
    ) -> Expression<'a> {
        sql::between(self, Self::param(low), Self::param(high))
    }

    pub fn not_between<'a>(
        &self,
        low: impl ValueFor<'a, T>,
        high: impl ValueFor<'a, T>,
    ) -> Expression<'a> {
        sql::not_between(self, Self::param(low), Self::param(high))
    }
}

impl<T: FromLiteral> Field<T> {
    /// Scans a raw text value with `T`'s codec.
    pub fn decode(&self, text: &str) -> Result<T, ParseError> {
        T::from_literal(text)
    }

    /// Like [`Field::decode`], for a value that may be SQL NULL.
    ///
    /// NULL is an error unless the field is declared nullable.
    pub fn decode_nullable(&self, text: Option<&str>) -> Result<Option<T>, ParseError> {
        match text {
            Some(text) => self.decode(text).map(Some),
            None if self.options.nullable => Ok(None),
            None => Err(ParseError::literal(
                T::KIND,
                NULL_SENTINEL,
                "null in a non-nullable column",
            )),
        }
    }
}

impl<T: PgType> Field<T> {
    /// The PostgreSQL type of the column: the override from the options,
    /// else the type `T` maps to.
    pub fn column_type(&self) -> &'static str {
        self.options.column_type.unwrap_or(T::PG_TYPE)
    }

    /// Scans a raw text value by type name, through the field's custom codec
    /// if it names one.
    pub fn decode_dynamic(
        &self,
        text: &str,
        config: &CodecConfig,
    ) -> Result<PostgresValue<'static>, CodecError> {
        let pg_type = self.options.codec.unwrap_or_else(|| self.column_type());
        decode_text(pg_type, text, config)
    }
}

impl<'a, T> ToSQL<'a, PostgresValue<'a>> for Field<T> {
    fn to_sql(&self) -> SQL<'a, PostgresValue<'a>> {
        SQL::column(self.table, self.column)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("table", &self.table)
            .field("column", &self.column)
            .field("options", &self.options)
            .finish()
    }
}

impl<T> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SQL::<PostgresValue<'_>>::column(self.table, self.column).sql())
    }
}
