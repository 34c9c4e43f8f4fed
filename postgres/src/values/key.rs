use std::borrow::Cow;

use serde_json::Number;

use super::PostgresValue;

/// Right-hand side of a path-addressed JSON comparison.
///
/// The variant decides how the extracted text is cast before comparing:
/// booleans as `boolean`, numbers as `numeric`, text as is.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValue<'a> {
    Bool(bool),
    Number(Number),
    Text(Cow<'a, str>),
}

impl<'a> KeyValue<'a> {
    /// The SQL type the extracted text is cast to, if any.
    pub const fn cast(&self) -> Option<&'static str> {
        match self {
            KeyValue::Bool(_) => Some("boolean"),
            KeyValue::Number(_) => Some("numeric"),
            KeyValue::Text(_) => None,
        }
    }

    pub fn into_value(self) -> PostgresValue<'a> {
        match self {
            KeyValue::Bool(b) => PostgresValue::Boolean(b),
            KeyValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PostgresValue::Bigint(i)
                } else if let Some(u) = n.as_u64() {
                    PostgresValue::from(u)
                } else {
                    PostgresValue::DoublePrecision(n.as_f64().unwrap_or_default())
                }
            }
            KeyValue::Text(text) => PostgresValue::Text(text),
        }
    }
}

impl<'a> From<bool> for KeyValue<'a> {
    fn from(value: bool) -> Self {
        KeyValue::Bool(value)
    }
}

macro_rules! impl_key_integer {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<$ty> for KeyValue<'a> {
                fn from(value: $ty) -> Self {
                    KeyValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_key_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

// NaN and the infinities have no JSON number form; compare them as text
macro_rules! impl_key_float {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<$ty> for KeyValue<'a> {
                fn from(value: $ty) -> Self {
                    match Number::from_f64(value as f64) {
                        Some(n) => KeyValue::Number(n),
                        None => KeyValue::Text(Cow::Owned(value.to_string())),
                    }
                }
            }
        )*
    };
}

impl_key_float!(f32, f64);

impl<'a> From<&'a str> for KeyValue<'a> {
    fn from(value: &'a str) -> Self {
        KeyValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for KeyValue<'a> {
    fn from(value: String) -> Self {
        KeyValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a String> for KeyValue<'a> {
    fn from(value: &'a String) -> Self {
        KeyValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<Number> for KeyValue<'a> {
    fn from(value: Number) -> Self {
        KeyValue::Number(value)
    }
}
