//! Bounded intervals: `int4range`, `tsrange`, `daterange` and friends.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::literal::{needs_quotes, quote, split_first_top_level};
use crate::scalar::{FromLiteral, PgType, ToLiteral, parse_bound};

const EMPTY: &str = "empty";

/// Element types PostgreSQL has a built-in range type for.
pub trait RangeElement: FromLiteral + ToLiteral + PartialOrd + Default + Clone {
    const RANGE_TYPE: &'static str;
    const RANGE_ARRAY_TYPE: &'static str;
}

macro_rules! range_element {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl RangeElement for $ty {
                const RANGE_TYPE: &'static str = $name;
                const RANGE_ARRAY_TYPE: &'static str = concat!($name, "[]");
            }
        )+
    };
}

range_element! {
    i32 => "int4range",
    i64 => "int8range",
    Decimal => "numrange",
    NaiveDateTime => "tsrange",
    DateTime<Utc> => "tstzrange",
    DateTime<FixedOffset> => "tstzrange",
    NaiveDate => "daterange",
}

pub type Int4Range = Range<i32>;
pub type Int8Range = Range<i64>;
pub type NumRange = Range<Decimal>;
pub type TsRange = Range<NaiveDateTime>;
pub type TstzRange = Range<DateTime<Utc>>;
pub type DateRange = Range<NaiveDate>;

/// A range value with independent bound inclusivity, or the empty range.
///
/// When `empty` is set the bounds carry no meaning and every predicate
/// ignores them. Bounds in the wrong order are accepted as is; use
/// [`Range::is_valid`] to detect them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    pub lower: T,
    pub upper: T,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
    pub empty: bool,
}

impl<T> Range<T> {
    pub const fn new(lower: T, upper: T, lower_inclusive: bool, upper_inclusive: bool) -> Self {
        Self {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
            empty: false,
        }
    }

    /// `[lower, upper)`, the canonical form PostgreSQL uses for discrete types.
    pub const fn closed_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, true, false)
    }

    /// `[lower, upper]`
    pub const fn closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, true, true)
    }

    pub fn with_bounds(self, lower: T, upper: T) -> Self {
        Self {
            lower,
            upper,
            ..self
        }
    }

    pub fn with_inclusivity(self, lower_inclusive: bool, upper_inclusive: bool) -> Self {
        Self {
            lower_inclusive,
            upper_inclusive,
            ..self
        }
    }

    pub fn with_empty(self, empty: bool) -> Self {
        Self { empty, ..self }
    }

    pub const fn is_empty(&self) -> bool {
        self.empty
    }
}

impl<T: Default> Range<T> {
    pub fn empty() -> Self {
        Self {
            lower: T::default(),
            upper: T::default(),
            lower_inclusive: false,
            upper_inclusive: false,
            empty: true,
        }
    }
}

impl<T: PartialOrd> Range<T> {
    /// Whether the bounds describe a non-empty interval.
    ///
    /// A flagged empty range is valid. A zero-width range is only valid
    /// when both bounds are inclusive.
    pub fn is_valid(&self) -> bool {
        if self.empty {
            return true;
        }
        if self.lower > self.upper {
            return false;
        }
        if self.lower == self.upper {
            return self.lower_inclusive && self.upper_inclusive;
        }
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        if self.empty {
            return false;
        }
        let above_lower = if self.lower_inclusive {
            *value >= self.lower
        } else {
            *value > self.lower
        };
        let below_upper = if self.upper_inclusive {
            *value <= self.upper
        } else {
            *value < self.upper
        };
        above_lower && below_upper
    }

    /// `@>` on two ranges. Every range contains the empty range.
    pub fn contains_range(&self, other: &Self) -> bool {
        if other.empty {
            return true;
        }
        if self.empty {
            return false;
        }
        let lower_ok = self.lower < other.lower
            || (self.lower == other.lower && (self.lower_inclusive || !other.lower_inclusive));
        let upper_ok = self.upper > other.upper
            || (self.upper == other.upper && (self.upper_inclusive || !other.upper_inclusive));
        lower_ok && upper_ok
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        if self.empty || other.empty {
            return false;
        }
        !ends_before(self, other) && !ends_before(other, self)
    }

    /// One range ends exactly where the other starts, with exactly one of the
    /// two touching bounds inclusive.
    pub fn adjacent(&self, other: &Self) -> bool {
        if self.empty || other.empty {
            return false;
        }
        (self.upper == other.lower && self.upper_inclusive != other.lower_inclusive)
            || (other.upper == self.lower && other.upper_inclusive != self.lower_inclusive)
    }

    /// `<<`: every point of `self` is before every point of `other`.
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        if self.empty || other.empty {
            return false;
        }
        ends_before(self, other)
    }

    /// `>>`
    pub fn strictly_right_of(&self, other: &Self) -> bool {
        other.strictly_left_of(self)
    }
}

/// `a` ends before `b` starts. Equal boundary values only touch when both
/// sides include that point.
fn ends_before<T: PartialOrd>(a: &Range<T>, b: &Range<T>) -> bool {
    a.upper < b.lower || (a.upper == b.lower && !(a.upper_inclusive && b.lower_inclusive))
}

impl<T: PartialEq> PartialEq for Range<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.empty, other.empty) {
            (true, true) => true,
            (false, false) => {
                self.lower_inclusive == other.lower_inclusive
                    && self.upper_inclusive == other.upper_inclusive
                    && self.lower == other.lower
                    && self.upper == other.upper
            }
            _ => false,
        }
    }
}

impl<T: FromLiteral + Default> Range<T> {
    /// Parses a range literal such as `[1,10)` or `empty`.
    ///
    /// Unbounded ranges are not modelled: an empty bound, `infinity` and
    /// `-infinity` all decode to `T::default()`. The sentinels are matched
    /// on the unquoted text before the element parser runs, so this holds
    /// for text-like and `Option` elements too. A text bound spelled
    /// `"infinity"` decodes to `""` and an `Option` bound to `None`.
    pub fn decode(literal: &str) -> Result<Self> {
        let trimmed = literal.trim();
        if trimmed.eq_ignore_ascii_case(EMPTY) {
            return Ok(Self::empty());
        }

        let lower_inclusive = match trimmed.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Err(ParseError::literal("range", literal, "expected '[' or '('")),
        };
        let upper_inclusive = match trimmed.chars().next_back() {
            Some(']') if trimmed.len() > 1 => true,
            Some(')') if trimmed.len() > 1 => false,
            _ => return Err(ParseError::literal("range", literal, "expected ']' or ')'")),
        };

        let body = &trimmed[1..trimmed.len() - 1];
        let (lower, upper) = split_first_top_level(body)
            .ok_or_else(|| ParseError::literal("range", literal, "missing ',' between bounds"))?;

        Ok(Self {
            lower: parse_bound(lower)?,
            upper: parse_bound(upper)?,
            lower_inclusive,
            upper_inclusive,
            empty: false,
        })
    }
}

fn write_bound<T: ToLiteral>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    let text = value.to_literal();
    if needs_quotes(&text) {
        f.write_str(&quote(&text))
    } else {
        f.write_str(&text)
    }
}

impl<T: ToLiteral> Range<T> {
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl<T: ToLiteral> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            return f.write_str(EMPTY);
        }
        f.write_str(if self.lower_inclusive { "[" } else { "(" })?;
        write_bound(f, &self.lower)?;
        f.write_str(",")?;
        write_bound(f, &self.upper)?;
        f.write_str(if self.upper_inclusive { "]" } else { ")" })
    }
}

impl<T: FromLiteral + Default> FromStr for Range<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl<T: RangeElement> FromLiteral for Range<T> {
    const KIND: &'static str = T::RANGE_TYPE;

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl<T: ToLiteral> ToLiteral for Range<T> {
    fn to_literal(&self) -> String {
        self.encode()
    }
}

impl<T: RangeElement> PgType for Range<T> {
    const PG_TYPE: &'static str = T::RANGE_TYPE;
    const ARRAY_TYPE: &'static str = T::RANGE_ARRAY_TYPE;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(lower: i32, upper: i32, li: bool, ui: bool) -> Int4Range {
        Range::new(lower, upper, li, ui)
    }

    #[test]
    fn decode_and_encode() {
        let range = Int4Range::decode("[1,10)").unwrap();
        assert_eq!(range, Range::closed_open(1, 10));
        assert_eq!(range.encode(), "[1,10)");

        let range = Int4Range::decode(" (3, 7] ").unwrap();
        assert!(!range.lower_inclusive);
        assert!(range.upper_inclusive);
        assert_eq!(range.encode(), "(3,7]");
    }

    #[test]
    fn empty_sentinel_is_case_insensitive() {
        assert!(Int4Range::decode("empty").unwrap().is_empty());
        assert!(Int4Range::decode(" EMPTY ").unwrap().is_empty());
        assert_eq!(Int4Range::empty().encode(), "empty");
    }

    #[test]
    fn malformed_literals_are_errors() {
        for text in ["1,5)", "[1,5", "[15]", "[", "", "{1,5}"] {
            let err = Int4Range::decode(text).unwrap_err();
            assert_eq!(err.kind(), "range", "{text}");
        }
        let err = Int4Range::decode("[a,5)").unwrap_err();
        assert_eq!(err.kind(), "i32");
    }

    #[test]
    fn unbounded_sides_decode_to_zero() {
        let range = Int4Range::decode("[,5)").unwrap();
        assert_eq!(range.lower, 0);
        let range = Int8Range::decode("(-infinity,infinity)").unwrap();
        assert_eq!((range.lower, range.upper), (0, 0));
    }

    #[test]
    fn infinity_collapses_for_text_and_optional_bounds() {
        let text = Range::<String>::decode(r#"["infinity",zebra)"#).unwrap();
        assert_eq!(text.lower, "");
        assert_eq!(text.upper, "zebra");

        let optional = Range::<Option<i32>>::decode("[-infinity,7]").unwrap();
        assert_eq!(optional.lower, None);
        assert_eq!(optional.upper, Some(7));
    }

    #[test]
    fn timestamp_bounds_are_quoted() {
        let range = TsRange::decode(r#"["2024-01-01 00:00:00","2024-01-02 00:00:00")"#).unwrap();
        assert_eq!(range.lower.to_literal(), "2024-01-01 00:00:00");
        assert_eq!(
            range.encode(),
            r#"["2024-01-01 00:00:00","2024-01-02 00:00:00")"#
        );
        assert_eq!(TsRange::decode(&range.encode()).unwrap(), range);
    }

    #[test]
    fn empty_ranges_are_equal_regardless_of_bounds() {
        let a = r(1, 2, true, false).with_empty(true);
        let b = r(7, 9, false, true).with_empty(true);
        assert_eq!(a, b);
        assert_ne!(a, r(1, 2, true, false));
    }

    #[test]
    fn validity() {
        assert!(r(1, 5, true, false).is_valid());
        assert!(r(5, 5, true, true).is_valid());
        assert!(!r(5, 5, true, false).is_valid());
        assert!(!r(6, 5, true, true).is_valid());
        assert!(Int4Range::empty().is_valid());
    }

    #[test]
    fn contains_respects_inclusivity() {
        let range = r(1, 5, true, false);
        assert!(range.contains(&1));
        assert!(range.contains(&4));
        assert!(!range.contains(&5));
        assert!(!r(1, 5, false, true).contains(&1));
        assert!(r(1, 5, false, true).contains(&5));
        assert!(!Int4Range::empty().contains(&1));
    }

    #[test]
    fn overlap_at_shared_boundary() {
        assert!(!r(1, 5, true, false).overlaps(&r(5, 10, true, false)));
        assert!(r(1, 5, true, true).overlaps(&r(5, 10, true, false)));
        assert!(r(1, 6, true, false).overlaps(&r(5, 10, true, false)));
        assert!(r(5, 10, true, false).overlaps(&r(1, 6, true, false)));
        assert!(!r(1, 3, true, true).overlaps(&r(5, 10, true, true)));
        assert!(!r(1, 10, true, true).overlaps(&Int4Range::empty()));
    }

    #[test]
    fn adjacency() {
        assert!(r(1, 5, true, false).adjacent(&r(5, 10, true, false)));
        assert!(r(5, 10, true, false).adjacent(&r(1, 5, true, false)));
        assert!(!r(1, 5, true, true).adjacent(&r(5, 10, true, false)));
        assert!(!r(1, 5, true, false).adjacent(&r(5, 10, false, false)));
        assert!(!r(1, 4, true, false).adjacent(&r(5, 10, true, false)));
    }

    #[test]
    fn containment_and_ordering() {
        let outer = r(1, 10, true, false);
        assert!(outer.contains_range(&r(2, 5, true, true)));
        assert!(outer.contains_range(&r(1, 10, true, false)));
        assert!(!outer.contains_range(&r(1, 10, true, true)));
        assert!(outer.contains_range(&Int4Range::empty()));

        assert!(r(1, 5, true, false).strictly_left_of(&r(5, 8, true, false)));
        assert!(!r(1, 5, true, true).strictly_left_of(&r(5, 8, true, false)));
        assert!(r(6, 8, true, false).strictly_right_of(&r(1, 5, true, true)));
    }

    #[test]
    fn value_editors() {
        let range = r(1, 5, true, false)
            .with_bounds(2, 6)
            .with_inclusivity(false, true);
        assert_eq!(range.encode(), "(2,6]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fields() {
        let value = serde_json::to_value(r(1, 5, true, false)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "lower": 1,
                "upper": 5,
                "lower_inclusive": true,
                "upper_inclusive": false,
                "empty": false,
            })
        );
        let back: Int4Range = serde_json::from_value(value).unwrap();
        assert_eq!(back, r(1, 5, true, false));
    }
}
