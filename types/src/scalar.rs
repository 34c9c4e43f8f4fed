//! Scalar value conversion between native Rust values and PostgreSQL text.
//!
//! [`FromLiteral`] and [`ToLiteral`] are the capability traits every codec
//! element implements. Built-in scalar kinds are implemented here; caller
//! enums and domain types plug in by implementing the traits directly or,
//! when they already have `FromStr + Display`, through
//! [`impl_literal_via_str!`](crate::impl_literal_via_str).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{ParseError, Result};
use crate::literal::{quote, unquote};

/// Parse a value from a single unquoted literal token.
pub trait FromLiteral: Sized {
    /// Human readable kind, reported in parse errors.
    const KIND: &'static str;

    fn from_literal(token: &str) -> Result<Self>;
}

/// Format a value as PostgreSQL literal text.
pub trait ToLiteral {
    fn to_literal(&self) -> String;

    /// Text used when the value is an element of an array literal.
    ///
    /// Defaults to the quoted literal; kinds whose text never contains
    /// delimiters write it bare.
    fn to_element(&self) -> String {
        quote(&self.to_literal())
    }
}

/// PostgreSQL type name of a codec type, used when binding parameters.
pub trait PgType {
    const PG_TYPE: &'static str;

    /// Name of the array type with this element type.
    const ARRAY_TYPE: &'static str = "anyarray";
}

/// Sentinels a range bound may carry that the codec maps to the zero value.
const BOUND_SENTINELS: [&str; 2] = ["infinity", "-infinity"];

/// Parses one range bound.
///
/// The token is trimmed and unquoted first. An empty bound or an
/// `infinity` / `-infinity` sentinel yields `T::default()`; unbounded
/// ranges are not modelled.
pub fn parse_bound<T: FromLiteral + Default>(raw: &str) -> Result<T> {
    let token = unquote(raw.trim());
    let token = token.trim();
    if token.is_empty()
        || BOUND_SENTINELS
            .iter()
            .any(|s| token.eq_ignore_ascii_case(s))
    {
        return Ok(T::default());
    }
    T::from_literal(token)
}

macro_rules! impl_integer {
    ($($ty:ty => $kind:literal, $pg:literal;)+) => {
        $(
            impl FromLiteral for $ty {
                const KIND: &'static str = $kind;

                fn from_literal(token: &str) -> Result<Self> {
                    token
                        .trim()
                        .parse::<$ty>()
                        .map_err(|e| ParseError::token(Self::KIND, token, e))
                }
            }

            impl ToLiteral for $ty {
                fn to_literal(&self) -> String {
                    self.to_string()
                }

                fn to_element(&self) -> String {
                    self.to_string()
                }
            }

            impl PgType for $ty {
                const PG_TYPE: &'static str = $pg;
                const ARRAY_TYPE: &'static str = concat!($pg, "[]");
            }
        )+
    };
}

impl_integer! {
    i8 => "i8", "int2";
    i16 => "i16", "int2";
    i32 => "i32", "int4";
    i64 => "i64", "int8";
    u8 => "u8", "int2";
    u16 => "u16", "int4";
    u32 => "u32", "int8";
    u64 => "u64", "numeric";
}

/// Exponents outside this window switch to scientific notation.
const PLAIN_EXPONENTS: core::ops::Range<i32> = -4..21;

/// Shortest text that parses back to the same float.
///
/// Both std renderings use the fewest digits; the plain one is kept while
/// the decimal exponent stays in [`PLAIN_EXPONENTS`].
fn format_float<F>(value: F) -> String
where
    F: Copy + Into<f64> + fmt::Display + fmt::LowerExp,
{
    let wide: f64 = value.into();
    if wide.is_nan() {
        return "NaN".to_string();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let scientific = format!("{value:e}");
    let exponent = scientific
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);
    if PLAIN_EXPONENTS.contains(&exponent) {
        value.to_string()
    } else {
        scientific
    }
}

macro_rules! impl_float {
    ($($ty:ty => $kind:literal, $pg:literal;)+) => {
        $(
            impl FromLiteral for $ty {
                const KIND: &'static str = $kind;

                // std float parsing already accepts Infinity / NaN in any case
                fn from_literal(token: &str) -> Result<Self> {
                    token
                        .trim()
                        .parse::<$ty>()
                        .map_err(|e| ParseError::token(Self::KIND, token, e))
                }
            }

            impl ToLiteral for $ty {
                fn to_literal(&self) -> String {
                    format_float(*self)
                }

                fn to_element(&self) -> String {
                    self.to_literal()
                }
            }

            impl PgType for $ty {
                const PG_TYPE: &'static str = $pg;
                const ARRAY_TYPE: &'static str = concat!($pg, "[]");
            }
        )+
    };
}

impl_float! {
    f32 => "f32", "float4";
    f64 => "f64", "float8";
}

impl FromLiteral for bool {
    const KIND: &'static str = "bool";

    fn from_literal(token: &str) -> Result<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "t" | "true" | "y" | "yes" | "on" | "1" => Ok(true),
            "f" | "false" | "n" | "no" | "off" | "0" => Ok(false),
            _ => Err(ParseError::token(Self::KIND, token, "expected t or f")),
        }
    }
}

impl ToLiteral for bool {
    fn to_literal(&self) -> String {
        if *self { "t" } else { "f" }.to_string()
    }

    fn to_element(&self) -> String {
        self.to_literal()
    }
}

impl PgType for bool {
    const PG_TYPE: &'static str = "bool";
    const ARRAY_TYPE: &'static str = "bool[]";
}

impl FromLiteral for String {
    const KIND: &'static str = "text";

    fn from_literal(token: &str) -> Result<Self> {
        Ok(token.to_string())
    }
}

impl ToLiteral for String {
    fn to_literal(&self) -> String {
        self.clone()
    }
}

impl ToLiteral for str {
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl PgType for String {
    const PG_TYPE: &'static str = "text";
    const ARRAY_TYPE: &'static str = "text[]";
}

impl FromLiteral for Decimal {
    const KIND: &'static str = "numeric";

    fn from_literal(token: &str) -> Result<Self> {
        let token = token.trim();
        Decimal::from_str(token)
            .or_else(|_| Decimal::from_scientific(token))
            .map_err(|e| ParseError::token(Self::KIND, token, e))
    }
}

impl ToLiteral for Decimal {
    fn to_literal(&self) -> String {
        self.to_string()
    }

    fn to_element(&self) -> String {
        self.to_string()
    }
}

impl PgType for Decimal {
    const PG_TYPE: &'static str = "numeric";
    const ARRAY_TYPE: &'static str = "numeric[]";
}

// Timestamps

const ZONED_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f%#z";
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_LAYOUT: &str = "%Y-%m-%d";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const TIMESTAMPTZ_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// A timestamp token after layout detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Offset-less values are taken as UTC.
    fn to_utc(self) -> DateTime<Utc> {
        match self {
            Timestamp::Zoned(dt) => dt.with_timezone(&Utc),
            Timestamp::Naive(naive) => naive.and_utc(),
        }
    }
}

/// Tries the accepted layouts in order: RFC 3339 (with or without fractional
/// seconds), date and time with a numeric offset, date and time without an
/// offset, then a bare date at midnight.
fn parse_timestamp(kind: &'static str, raw: &str) -> Result<Timestamp> {
    let token = unquote(raw.trim());
    let token = token.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Ok(Timestamp::Zoned(dt));
    }
    if let Ok(dt) = DateTime::parse_from_str(token, ZONED_LAYOUT) {
        return Ok(Timestamp::Zoned(dt));
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(token, layout) {
            return Ok(Timestamp::Naive(naive));
        }
    }
    NaiveDate::parse_from_str(token, DATE_LAYOUT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Timestamp::Naive)
        .ok_or_else(|| ParseError::token(kind, raw, "no timestamp layout matched"))
}

impl FromLiteral for NaiveDateTime {
    const KIND: &'static str = "timestamp";

    fn from_literal(token: &str) -> Result<Self> {
        Ok(match parse_timestamp(Self::KIND, token)? {
            Timestamp::Zoned(dt) => dt.naive_utc(),
            Timestamp::Naive(naive) => naive,
        })
    }
}

impl ToLiteral for NaiveDateTime {
    fn to_literal(&self) -> String {
        self.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl PgType for NaiveDateTime {
    const PG_TYPE: &'static str = "timestamp";
    const ARRAY_TYPE: &'static str = "timestamp[]";
}

impl FromLiteral for DateTime<Utc> {
    const KIND: &'static str = "timestamptz";

    fn from_literal(token: &str) -> Result<Self> {
        parse_timestamp(Self::KIND, token).map(Timestamp::to_utc)
    }
}

impl ToLiteral for DateTime<Utc> {
    fn to_literal(&self) -> String {
        self.format(TIMESTAMPTZ_FORMAT).to_string()
    }
}

impl PgType for DateTime<Utc> {
    const PG_TYPE: &'static str = "timestamptz";
    const ARRAY_TYPE: &'static str = "timestamptz[]";
}

impl FromLiteral for DateTime<FixedOffset> {
    const KIND: &'static str = "timestamptz";

    fn from_literal(token: &str) -> Result<Self> {
        Ok(match parse_timestamp(Self::KIND, token)? {
            Timestamp::Zoned(dt) => dt,
            Timestamp::Naive(naive) => naive.and_utc().fixed_offset(),
        })
    }
}

impl ToLiteral for DateTime<FixedOffset> {
    fn to_literal(&self) -> String {
        self.format(TIMESTAMPTZ_FORMAT).to_string()
    }
}

impl PgType for DateTime<FixedOffset> {
    const PG_TYPE: &'static str = "timestamptz";
    const ARRAY_TYPE: &'static str = "timestamptz[]";
}

impl FromLiteral for NaiveDate {
    const KIND: &'static str = "date";

    fn from_literal(token: &str) -> Result<Self> {
        let trimmed = unquote(token.trim());
        match NaiveDate::parse_from_str(trimmed.trim(), DATE_LAYOUT) {
            Ok(date) => Ok(date),
            Err(_) => NaiveDateTime::from_literal(token)
                .map(|dt| dt.date())
                .map_err(|_| ParseError::token(Self::KIND, token, "expected YYYY-MM-DD")),
        }
    }
}

impl ToLiteral for NaiveDate {
    fn to_literal(&self) -> String {
        self.format(DATE_LAYOUT).to_string()
    }

    fn to_element(&self) -> String {
        self.to_literal()
    }
}

impl PgType for NaiveDate {
    const PG_TYPE: &'static str = "date";
    const ARRAY_TYPE: &'static str = "date[]";
}

impl FromLiteral for Uuid {
    const KIND: &'static str = "uuid";

    /// Accepts the hyphenated, simple, braced and URN spellings.
    fn from_literal(token: &str) -> Result<Self> {
        let token = token.trim();
        Uuid::parse_str(token).map_err(|e| ParseError::token(Self::KIND, token, e))
    }
}

impl ToLiteral for Uuid {
    fn to_literal(&self) -> String {
        self.hyphenated().to_string()
    }

    fn to_element(&self) -> String {
        self.to_literal()
    }
}

impl PgType for Uuid {
    const PG_TYPE: &'static str = "uuid";
    const ARRAY_TYPE: &'static str = "uuid[]";
}

// Nullable values

impl<T: FromLiteral> FromLiteral for Option<T> {
    const KIND: &'static str = T::KIND;

    /// An empty token (which is also what the tokenizer makes of `NULL`)
    /// decodes to `None`.
    fn from_literal(token: &str) -> Result<Self> {
        if token.is_empty() {
            Ok(None)
        } else {
            T::from_literal(token).map(Some)
        }
    }
}

impl<T: ToLiteral> ToLiteral for Option<T> {
    fn to_literal(&self) -> String {
        match self {
            Some(value) => value.to_literal(),
            None => crate::literal::NULL_SENTINEL.to_string(),
        }
    }

    fn to_element(&self) -> String {
        match self {
            Some(value) => value.to_element(),
            None => crate::literal::NULL_SENTINEL.to_string(),
        }
    }
}

impl<T: PgType> PgType for Option<T> {
    const PG_TYPE: &'static str = T::PG_TYPE;
    const ARRAY_TYPE: &'static str = T::ARRAY_TYPE;
}

impl<T: ToLiteral + ?Sized> ToLiteral for &T {
    fn to_literal(&self) -> String {
        (**self).to_literal()
    }

    fn to_element(&self) -> String {
        (**self).to_element()
    }
}

/// Implements [`FromLiteral`] and [`ToLiteral`] for a type that already has
/// `FromStr` and `Display`.
///
/// ```
/// use pgext_types::{impl_literal_via_str, FromLiteral, ToLiteral};
/// use std::{fmt, str::FromStr};
///
/// #[derive(Debug, PartialEq)]
/// enum Mood { Happy, Sad }
///
/// impl FromStr for Mood {
///     type Err = String;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         match s {
///             "happy" => Ok(Mood::Happy),
///             "sad" => Ok(Mood::Sad),
///             other => Err(format!("unknown mood {other}")),
///         }
///     }
/// }
///
/// impl fmt::Display for Mood {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(match self { Mood::Happy => "happy", Mood::Sad => "sad" })
///     }
/// }
///
/// impl_literal_via_str!(Mood, "mood");
///
/// assert_eq!(Mood::from_literal("sad").unwrap(), Mood::Sad);
/// assert_eq!(Mood::Happy.to_literal(), "happy");
/// ```
#[macro_export]
macro_rules! impl_literal_via_str {
    ($ty:ty) => {
        $crate::impl_literal_via_str!($ty, stringify!($ty));
    };
    ($ty:ty, $kind:expr) => {
        impl $crate::FromLiteral for $ty {
            const KIND: &'static str = $kind;

            fn from_literal(token: &str) -> $crate::Result<Self> {
                <$ty as ::core::str::FromStr>::from_str(token)
                    .map_err(|e| $crate::ParseError::token(Self::KIND, token, e))
            }
        }

        impl $crate::ToLiteral for $ty {
            fn to_literal(&self) -> String {
                ::std::string::ToString::to_string(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn integers() {
        assert_eq!(i32::from_literal("42").unwrap(), 42);
        assert_eq!(i64::from_literal(" -7 ").unwrap(), -7);
        let err = i16::from_literal("70000").unwrap_err();
        assert_eq!(err.kind(), "i16");
        assert!(u8::from_literal("-1").is_err());
    }

    #[test]
    fn floats_use_shortest_text() {
        assert_eq!(3.5f64.to_literal(), "3.5");
        assert_eq!(0.1f32.to_literal(), "0.1");
        assert_eq!(f64::INFINITY.to_literal(), "Infinity");
        assert_eq!(f64::NEG_INFINITY.to_literal(), "-Infinity");
        assert_eq!(f64::NAN.to_literal(), "NaN");
        assert_eq!(100f64.to_literal(), "100");
        assert_eq!((-0.0f64).to_literal(), "-0");
        assert_eq!(1e300f64.to_literal(), "1e300");
        assert_eq!(1e-7f64.to_literal(), "1e-7");
        assert_eq!(f64::MIN_POSITIVE.to_literal(), "2.2250738585072014e-308");
        assert_eq!(f32::MAX.to_literal(), "3.4028235e38");
        assert_eq!(1e300f64.to_element(), "1e300");
        for v in [1e300, f64::MIN_POSITIVE, 0.1, 123456.789, -2.5e-9] {
            assert_eq!(f64::from_literal(&v.to_literal()).unwrap(), v);
        }
        assert!(f64::from_literal("Infinity").unwrap().is_infinite());
        assert!(f64::from_literal("NaN").unwrap().is_nan());
    }

    #[test]
    fn booleans() {
        assert!(bool::from_literal("t").unwrap());
        assert!(bool::from_literal("TRUE").unwrap());
        assert!(!bool::from_literal("off").unwrap());
        assert_eq!(true.to_literal(), "t");
        assert_eq!(false.to_element(), "f");
        assert!(bool::from_literal("maybe").is_err());
    }

    #[test]
    fn decimals_accept_scientific_notation() {
        assert_eq!(
            Decimal::from_literal("12.50").unwrap(),
            Decimal::from_str("12.50").unwrap()
        );
        assert_eq!(
            Decimal::from_literal("1.5e3").unwrap(),
            Decimal::from_str("1500").unwrap()
        );
        assert!(Decimal::from_literal("abc").is_err());
    }

    #[test]
    fn strings_quote_as_elements() {
        let s = String::from(r#"a "b""#);
        assert_eq!(s.to_literal(), r#"a "b""#);
        assert_eq!(s.to_element(), r#""a \"b\"""#);
    }

    #[test]
    fn timestamp_layouts() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

        for text in [
            "2024-03-01T12:30:00Z",
            "2024-03-01T14:30:00+02:00",
            "2024-03-01 12:30:00+00",
            "2024-03-01 13:30:00+01:00",
            "2024-03-01 12:30:00",
            "\"2024-03-01 12:30:00\"",
        ] {
            assert_eq!(DateTime::<Utc>::from_literal(text).unwrap(), expected, "{text}");
        }

        let frac = DateTime::<Utc>::from_literal("2024-03-01T12:30:00.250Z").unwrap();
        assert_eq!(frac.nanosecond(), 250_000_000);

        let midnight = NaiveDateTime::from_literal("2024-03-01").unwrap();
        assert_eq!(midnight.hour(), 0);

        assert!(NaiveDateTime::from_literal("yesterday").is_err());
    }

    #[test]
    fn timestamp_format_round_trips() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let text = ts.to_literal();
        assert_eq!(text, "2024-03-01 12:30:00+00:00");
        assert_eq!(DateTime::<Utc>::from_literal(&text).unwrap(), ts);

        let naive = ts.naive_utc();
        assert_eq!(naive.to_literal(), "2024-03-01 12:30:00");
        assert_eq!(naive.to_element(), "\"2024-03-01 12:30:00\"");
    }

    #[test]
    fn dates() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(NaiveDate::from_literal("2024-02-29").unwrap(), date);
        assert_eq!(date.to_literal(), "2024-02-29");
        assert!(NaiveDate::from_literal("2023-02-29").is_err());
    }

    #[test]
    fn uuids() {
        let id = Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);
        for text in [
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6BA7B8109DAD11D180B400C04FD430C8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
        ] {
            assert_eq!(Uuid::from_literal(text).unwrap(), id, "{text}");
        }
        assert_eq!(id.to_literal(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(id.to_element(), id.to_literal());
        assert_eq!(Uuid::from_literal("nope").unwrap_err().kind(), "uuid");

        let fresh = Uuid::new_v4();
        assert_eq!(Uuid::from_literal(&fresh.to_literal()).unwrap(), fresh);
    }

    #[test]
    fn bound_sentinels_yield_default() {
        assert_eq!(parse_bound::<i32>("").unwrap(), 0);
        assert_eq!(parse_bound::<i32>("infinity").unwrap(), 0);
        assert_eq!(parse_bound::<i64>("-Infinity").unwrap(), 0);
        assert_eq!(parse_bound::<i32>(" 5 ").unwrap(), 5);
        assert!(parse_bound::<i32>("five").is_err());
    }

    #[test]
    fn options() {
        assert_eq!(Option::<i32>::from_literal("").unwrap(), None);
        assert_eq!(Option::<i32>::from_literal("3").unwrap(), Some(3));
        assert_eq!(None::<i32>.to_literal(), "NULL");
        assert_eq!(Some(String::from("x")).to_element(), "\"x\"");
    }

    #[test]
    fn pg_type_names() {
        assert_eq!(<i32 as PgType>::PG_TYPE, "int4");
        assert_eq!(<i64 as PgType>::ARRAY_TYPE, "int8[]");
        assert_eq!(<Option<String> as PgType>::ARRAY_TYPE, "text[]");
    }
}
