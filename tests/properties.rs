use chrono::{DateTime, NaiveDateTime};
use pgext::types::{Array, FromLiteral, Range, RangeElement, ToLiteral};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::fmt::Debug;

// 1970-01-01 .. 2100-01-01
const MAX_EPOCH_SECS: i64 = 4_102_444_800;

fn arb_decimal() -> impl Strategy<Value = Decimal> + Clone {
    (any::<i64>(), 0u32..=12).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> + Clone {
    (0..MAX_EPOCH_SECS, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
        DateTime::from_timestamp(secs, nanos)
            .expect("in range")
            .naive_utc()
    })
}

/// Ordered bounds with arbitrary inclusivity. A zero-width range is kept
/// only when both sides are inclusive, anything else is empty by its bounds.
fn arb_range<T, S>(element: S) -> impl Strategy<Value = Range<T>>
where
    T: RangeElement + Debug,
    S: Strategy<Value = T> + Clone,
{
    (element.clone(), element, any::<bool>(), any::<bool>())
        .prop_map(|(a, b, lower_inclusive, upper_inclusive)| {
            let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
            Range::new(lower, upper, lower_inclusive, upper_inclusive)
        })
        .prop_filter("empty by bounds", Range::<T>::is_valid)
}

/// Text that stresses the array literal grammar: delimiters, quotes,
/// backslashes, whitespace and the NULL sentinel, mixed with arbitrary
/// unicode.
fn arb_element_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        r#"[,{}"\\ \t\nNUL()a-zé]{0,12}"#,
        Just("NULL".to_string()),
        Just("null".to_string()),
        Just(String::new()),
        Just(" padded ".to_string()),
    ]
}

fn assert_range_round_trip<T>(range: &Range<T>) -> Result<(), TestCaseError>
where
    T: RangeElement + Debug,
{
    let literal = range.encode();
    let decoded = Range::<T>::decode(&literal)
        .map_err(|e| TestCaseError::fail(format!("{literal}: {e}")))?;
    prop_assert_eq!(&decoded, range, "literal {}", literal);
    Ok(())
}

fn assert_array_round_trip<T>(values: Vec<T>) -> Result<(), TestCaseError>
where
    T: FromLiteral + ToLiteral + PartialEq + Debug,
{
    let array = Array::from(values);
    let literal = array.encode();
    let decoded = Array::<T>::decode_strict(&literal)
        .map_err(|e| TestCaseError::fail(format!("{literal}: {e}")))?;
    prop_assert_eq!(&decoded, &array, "literal {}", literal);
    Ok(())
}

proptest! {
    #[test]
    fn int4_ranges_round_trip(range in arb_range(any::<i32>())) {
        assert_range_round_trip(&range)?;
    }

    #[test]
    fn int8_ranges_round_trip(range in arb_range(any::<i64>())) {
        assert_range_round_trip(&range)?;
    }

    #[test]
    fn numeric_ranges_round_trip(range in arb_range(arb_decimal())) {
        assert_range_round_trip(&range)?;
    }

    #[test]
    fn timestamp_ranges_round_trip(range in arb_range(arb_timestamp())) {
        assert_range_round_trip(&range)?;
    }

    #[test]
    fn flagged_empty_ranges_round_trip(lower in any::<i32>(), upper in any::<i32>()) {
        let range = Range::new(lower, upper, true, false).with_empty(true);
        prop_assert_eq!(range.encode(), "empty");
        assert_range_round_trip(&range)?;
    }
}

proptest! {
    #[test]
    fn text_arrays_round_trip(values in prop::collection::vec(arb_element_text(), 0..8)) {
        assert_array_round_trip(values)?;
    }

    #[test]
    fn bigint_arrays_round_trip(values in prop::collection::vec(any::<i64>(), 0..16)) {
        assert_array_round_trip(values)?;
    }

    #[test]
    fn float_arrays_round_trip(
        values in prop::collection::vec(
            prop::num::f64::POSITIVE
                | prop::num::f64::NEGATIVE
                | prop::num::f64::NORMAL
                | prop::num::f64::SUBNORMAL
                | prop::num::f64::ZERO,
            0..16,
        )
    ) {
        assert_array_round_trip(values)?;
    }

    #[test]
    fn nullable_arrays_round_trip(values in prop::collection::vec(any::<Option<i32>>(), 0..16)) {
        assert_array_round_trip(values)?;
    }
}
