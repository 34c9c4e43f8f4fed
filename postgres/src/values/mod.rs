//! PostgreSQL value conversion traits and types

mod decode;
mod key;

pub use decode::{CodecConfig, CustomCodec, decode_text};
pub use key::KeyValue;

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use pgext_core::{SQL, SQLParam, ToSQL};
use pgext_types::literal::{NULL_SENTINEL, needs_quotes, quote};
use pgext_types::{
    Array, BitString, Cidr, Circle, HexBytes, Inet, Json, MacAddr, Money, Path, PgType, Point,
    Polygon, Range, RangeElement, Rect, ToLiteral, TsQuery, TsVector, Xml,
};
use rust_decimal::Decimal;
use uuid::Uuid;

//------------------------------------------------------------------------------
// PostgresValue Definition
//------------------------------------------------------------------------------

/// Represents a PostgreSQL value bound to a query placeholder.
///
/// Composite kinds without a native driver representation (ranges, geometric
/// shapes, bit strings) travel as their text literal together with the
/// PostgreSQL type name to cast it to.
///
/// # Examples
///
/// ```
/// use pgext_postgres::values::PostgresValue;
/// use pgext_types::Int4Range;
///
/// let int_val: PostgresValue = 42i32.into();
/// assert_eq!(int_val.type_name(), "int4");
///
/// let text_val: PostgresValue = "hello".into();
/// assert_eq!(text_val.to_string(), "hello");
///
/// let range: PostgresValue = Int4Range::closed_open(1, 5).into();
/// assert_eq!(range.to_string(), "[1,5)");
/// assert_eq!(range.type_name(), "int4range");
///
/// let null_val: PostgresValue = None::<i32>.into();
/// assert!(null_val.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostgresValue<'a> {
    /// NULL value
    #[default]
    Null,
    /// BOOLEAN values
    Boolean(bool),
    /// SMALLINT values (16-bit signed integer)
    Smallint(i16),
    /// INTEGER values (32-bit signed integer)
    Integer(i32),
    /// BIGINT values (64-bit signed integer)
    Bigint(i64),
    /// REAL values (32-bit floating point)
    Real(f32),
    /// DOUBLE PRECISION values (64-bit floating point)
    DoublePrecision(f64),
    /// NUMERIC values
    Numeric(Decimal),
    /// TEXT, VARCHAR, CHAR values
    Text(Cow<'a, str>),
    /// BYTEA values (binary data)
    Bytea(Cow<'a, [u8]>),
    /// TIMESTAMP without time zone
    Timestamp(NaiveDateTime),
    /// TIMESTAMPTZ values, normalized to UTC
    TimestampTz(DateTime<Utc>),
    /// DATE values
    Date(NaiveDate),
    /// JSON and JSONB values
    Json(serde_json::Value),
    /// INET values
    Inet(Inet),
    /// CIDR values
    Cidr(Cidr),
    /// MACADDR values
    MacAddr(MacAddr),
    /// UUID values
    Uuid(Uuid),
    /// One-dimensional arrays
    Array(Vec<PostgresValue<'a>>),
    /// Any other type, carried as its text literal
    Literal {
        pg_type: Cow<'static, str>,
        text: String,
    },
}

impl<'a> PostgresValue<'a> {
    /// Binds any codec type as a typed text literal.
    pub fn literal<T: ToLiteral + PgType + ?Sized>(value: &T) -> Self {
        PostgresValue::Literal {
            pg_type: Cow::Borrowed(T::PG_TYPE),
            text: value.to_literal(),
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, PostgresValue::Null)
    }

    /// The PostgreSQL type name this value binds as.
    ///
    /// Arrays take their element type from the first non-null element and
    /// fall back to `anyarray`.
    pub fn type_name(&self) -> Cow<'static, str> {
        let name = match self {
            PostgresValue::Null => "unknown",
            PostgresValue::Boolean(_) => "bool",
            PostgresValue::Smallint(_) => "int2",
            PostgresValue::Integer(_) => "int4",
            PostgresValue::Bigint(_) => "int8",
            PostgresValue::Real(_) => "float4",
            PostgresValue::DoublePrecision(_) => "float8",
            PostgresValue::Numeric(_) => "numeric",
            PostgresValue::Text(_) => "text",
            PostgresValue::Bytea(_) => "bytea",
            PostgresValue::Timestamp(_) => "timestamp",
            PostgresValue::TimestampTz(_) => "timestamptz",
            PostgresValue::Date(_) => "date",
            PostgresValue::Json(_) => "jsonb",
            PostgresValue::Inet(_) => "inet",
            PostgresValue::Cidr(_) => "cidr",
            PostgresValue::MacAddr(_) => "macaddr",
            PostgresValue::Uuid(_) => "uuid",
            PostgresValue::Literal { pg_type, .. } => return pg_type.clone(),
            PostgresValue::Array(values) => {
                return match values.iter().find(|v| !v.is_null()) {
                    Some(first) => Cow::Owned(format!("{}[]", first.type_name())),
                    None => Cow::Borrowed("anyarray"),
                };
            }
        };
        Cow::Borrowed(name)
    }

    /// Detaches the value from any borrowed input.
    pub fn into_owned(self) -> PostgresValue<'static> {
        match self {
            PostgresValue::Null => PostgresValue::Null,
            PostgresValue::Boolean(v) => PostgresValue::Boolean(v),
            PostgresValue::Smallint(v) => PostgresValue::Smallint(v),
            PostgresValue::Integer(v) => PostgresValue::Integer(v),
            PostgresValue::Bigint(v) => PostgresValue::Bigint(v),
            PostgresValue::Real(v) => PostgresValue::Real(v),
            PostgresValue::DoublePrecision(v) => PostgresValue::DoublePrecision(v),
            PostgresValue::Numeric(v) => PostgresValue::Numeric(v),
            PostgresValue::Text(v) => PostgresValue::Text(Cow::Owned(v.into_owned())),
            PostgresValue::Bytea(v) => PostgresValue::Bytea(Cow::Owned(v.into_owned())),
            PostgresValue::Timestamp(v) => PostgresValue::Timestamp(v),
            PostgresValue::TimestampTz(v) => PostgresValue::TimestampTz(v),
            PostgresValue::Date(v) => PostgresValue::Date(v),
            PostgresValue::Json(v) => PostgresValue::Json(v),
            PostgresValue::Inet(v) => PostgresValue::Inet(v),
            PostgresValue::Cidr(v) => PostgresValue::Cidr(v),
            PostgresValue::MacAddr(v) => PostgresValue::MacAddr(v),
            PostgresValue::Uuid(v) => PostgresValue::Uuid(v),
            PostgresValue::Array(values) => {
                PostgresValue::Array(values.into_iter().map(PostgresValue::into_owned).collect())
            }
            PostgresValue::Literal { pg_type, text } => PostgresValue::Literal { pg_type, text },
        }
    }

    /// Text form used inside an array literal: quoted when needed, `NULL`
    /// for null.
    fn to_element(&self) -> String {
        match self {
            PostgresValue::Null => NULL_SENTINEL.to_string(),
            PostgresValue::Array(_) => self.to_string(),
            other => {
                let text = other.to_string();
                if needs_quotes(&text) { quote(&text) } else { text }
            }
        }
    }
}

impl<'a> fmt::Display for PostgresValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostgresValue::Null => Ok(()),
            PostgresValue::Boolean(b) => f.write_str(&b.to_literal()),
            PostgresValue::Smallint(i) => write!(f, "{i}"),
            PostgresValue::Integer(i) => write!(f, "{i}"),
            PostgresValue::Bigint(i) => write!(f, "{i}"),
            PostgresValue::Real(r) => f.write_str(&r.to_literal()),
            PostgresValue::DoublePrecision(r) => f.write_str(&r.to_literal()),
            PostgresValue::Numeric(d) => write!(f, "{d}"),
            PostgresValue::Text(cow) => f.write_str(cow),
            PostgresValue::Bytea(bytes) => {
                f.write_str("\\x")?;
                for b in bytes.iter() {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            PostgresValue::Timestamp(ts) => f.write_str(&ts.to_literal()),
            PostgresValue::TimestampTz(ts) => f.write_str(&ts.to_literal()),
            PostgresValue::Date(date) => f.write_str(&date.to_literal()),
            PostgresValue::Json(json) => write!(f, "{json}"),
            PostgresValue::Inet(net) => write!(f, "{net}"),
            PostgresValue::Cidr(net) => write!(f, "{net}"),
            PostgresValue::MacAddr(mac) => write!(f, "{mac}"),
            PostgresValue::Uuid(uuid) => f.write_str(&uuid.to_literal()),
            PostgresValue::Array(values) => {
                f.write_str("{")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(&value.to_element())?;
                }
                f.write_str("}")
            }
            PostgresValue::Literal { text, .. } => f.write_str(text),
        }
    }
}

// Implement core traits required by the expression builder
impl<'a> SQLParam for PostgresValue<'a> {}

impl<'a> ToSQL<'a, PostgresValue<'a>> for PostgresValue<'a> {
    fn to_sql(&self) -> SQL<'a, PostgresValue<'a>> {
        SQL::param(self.clone())
    }

    fn into_sql(self) -> SQL<'a, PostgresValue<'a>> {
        SQL::param(self)
    }
}

impl<'a> From<PostgresValue<'a>> for SQL<'a, PostgresValue<'a>> {
    fn from(value: PostgresValue<'a>) -> Self {
        SQL::param(value)
    }
}

// Cow integration for SQL struct
impl<'a> From<PostgresValue<'a>> for Cow<'a, PostgresValue<'a>> {
    fn from(value: PostgresValue<'a>) -> Self {
        Cow::Owned(value)
    }
}

impl<'a> From<&'a PostgresValue<'a>> for Cow<'a, PostgresValue<'a>> {
    fn from(value: &'a PostgresValue<'a>) -> Self {
        Cow::Borrowed(value)
    }
}

//------------------------------------------------------------------------------
// From<T> implementations
//------------------------------------------------------------------------------

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident $(as $cast:ty)?),* $(,)?) => {
        $(
            impl<'a> From<$ty> for PostgresValue<'a> {
                #[inline]
                fn from(value: $ty) -> Self {
                    PostgresValue::$variant(value $(as $cast)?)
                }
            }

            impl<'a> From<&$ty> for PostgresValue<'a> {
                #[inline]
                fn from(value: &$ty) -> Self {
                    PostgresValue::$variant(value.clone() $(as $cast)?)
                }
            }
        )*
    };
}

impl_from_native! {
    bool => Boolean,
    i8 => Smallint as i16,
    u8 => Smallint as i16,
    i16 => Smallint,
    u16 => Integer as i32,
    i32 => Integer,
    u32 => Bigint as i64,
    i64 => Bigint,
    f32 => Real,
    f64 => DoublePrecision,
    Decimal => Numeric,
    NaiveDateTime => Timestamp,
    DateTime<Utc> => TimestampTz,
    NaiveDate => Date,
    serde_json::Value => Json,
    Inet => Inet,
    Cidr => Cidr,
    MacAddr => MacAddr,
    Uuid => Uuid,
}

impl<'a> From<u64> for PostgresValue<'a> {
    fn from(value: u64) -> Self {
        PostgresValue::Numeric(Decimal::from(value))
    }
}

impl<'a> From<DateTime<FixedOffset>> for PostgresValue<'a> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PostgresValue::TimestampTz(value.with_timezone(&Utc))
    }
}

impl<'a> From<&'a str> for PostgresValue<'a> {
    fn from(value: &'a str) -> Self {
        PostgresValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for PostgresValue<'a> {
    fn from(value: &'a String) -> Self {
        PostgresValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for PostgresValue<'a> {
    fn from(value: String) -> Self {
        PostgresValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for PostgresValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        PostgresValue::Text(value)
    }
}

impl<'a> From<&'a [u8]> for PostgresValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        PostgresValue::Bytea(Cow::Borrowed(value))
    }
}

impl<'a> From<Vec<u8>> for PostgresValue<'a> {
    fn from(value: Vec<u8>) -> Self {
        PostgresValue::Bytea(Cow::Owned(value))
    }
}

impl<'a> From<Json> for PostgresValue<'a> {
    fn from(value: Json) -> Self {
        PostgresValue::Json(value.into_inner())
    }
}

impl<'a> From<&Json> for PostgresValue<'a> {
    fn from(value: &Json) -> Self {
        PostgresValue::Json(value.0.clone())
    }
}

// Composite kinds bind as typed literals
macro_rules! impl_from_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<$ty> for PostgresValue<'a> {
                fn from(value: $ty) -> Self {
                    PostgresValue::literal(&value)
                }
            }

            impl<'a> From<&$ty> for PostgresValue<'a> {
                fn from(value: &$ty) -> Self {
                    PostgresValue::literal(value)
                }
            }
        )*
    };
}

impl_from_literal!(Point, Rect, Path, Polygon, Circle, BitString, Money, TsVector, TsQuery, Xml);

impl<'a> From<HexBytes> for PostgresValue<'a> {
    fn from(value: HexBytes) -> Self {
        PostgresValue::Bytea(Cow::Owned(value.into_inner()))
    }
}

impl<'a> From<&'a HexBytes> for PostgresValue<'a> {
    fn from(value: &'a HexBytes) -> Self {
        PostgresValue::Bytea(Cow::Borrowed(&value.0))
    }
}

impl<'a, T: RangeElement> From<Range<T>> for PostgresValue<'a> {
    fn from(value: Range<T>) -> Self {
        PostgresValue::literal(&value)
    }
}

impl<'a, T: RangeElement> From<&Range<T>> for PostgresValue<'a> {
    fn from(value: &Range<T>) -> Self {
        PostgresValue::literal(value)
    }
}

impl<'a, T> From<Array<T>> for PostgresValue<'a>
where
    T: Into<PostgresValue<'a>>,
{
    fn from(value: Array<T>) -> Self {
        PostgresValue::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<'a, T> From<Option<T>> for PostgresValue<'a>
where
    T: Into<PostgresValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => PostgresValue::Null,
        }
    }
}
