//! Which values and operators a field accepts, by Rust type.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use pgext_types::{
    Array, Cidr, Circle, Inet, Json, Money, Path, Point, Polygon, Rect, TsQuery, Uuid, Xml,
};
use rust_decimal::Decimal;

use crate::values::PostgresValue;

/// A value that can be compared with a `Field<T>`.
///
/// Every bindable `T` is accepted for itself; a few borrowed or wrapped
/// forms are accepted as well so call sites stay terse.
pub trait ValueFor<'a, T> {
    fn into_value(self) -> PostgresValue<'a>;
}

impl<'a, T: Into<PostgresValue<'a>>> ValueFor<'a, T> for T {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        self.into()
    }
}

impl<'a, T: Into<PostgresValue<'a>>> ValueFor<'a, Option<T>> for T {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        self.into()
    }
}

impl<'a> ValueFor<'a, String> for &'a str {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        self.into()
    }
}

impl<'a> ValueFor<'a, String> for &'a String {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        self.into()
    }
}

impl<'a> ValueFor<'a, Option<String>> for &'a str {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        self.into()
    }
}

impl<'a, E: Into<PostgresValue<'a>>> ValueFor<'a, Array<E>> for Vec<E> {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        Array::from(self).into()
    }
}

impl<'a> ValueFor<'a, TsQuery> for &str {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        TsQuery::new(self).into()
    }
}

impl<'a> ValueFor<'a, Xml> for &str {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        Xml::new(self).into()
    }
}

impl<'a> ValueFor<'a, Json> for serde_json::Value {
    #[inline]
    fn into_value(self) -> PostgresValue<'a> {
        self.into()
    }
}

/// Types with a total order in SQL: `<`, `BETWEEN`, ...
pub trait Ordered {}

/// Text columns: `LIKE`, `ILIKE`, `~`, ...
///
/// Types stored as something other than text match against the column
/// cast with `::text`.
pub trait Textual {
    const TEXT_CAST: bool = false;
}

/// Geometric columns: `<->`, `@>`, `<@`, `&&`.
pub trait Geometric {}

/// Network address columns: `>>`, `>>=`, `<<`, `<<=`.
pub trait Network {}

macro_rules! mark {
    ($marker:ident: $($ty:ty),* $(,)?) => {
        $(impl $marker for $ty {})*
    };
}

mark!(Ordered: i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, Decimal, String, Money, Uuid);
mark!(Ordered: NaiveDate, NaiveDateTime, DateTime<Utc>, DateTime<FixedOffset>, Inet, Cidr);
mark!(Textual: String);
mark!(Geometric: Point, Rect, Path, Polygon, Circle);
mark!(Network: Inet, Cidr);

impl<T: Ordered> Ordered for Option<T> {}
impl<T: Textual> Textual for Option<T> {
    const TEXT_CAST: bool = T::TEXT_CAST;
}

impl Textual for Money {
    const TEXT_CAST: bool = true;
}

impl Textual for Xml {
    const TEXT_CAST: bool = true;
}
