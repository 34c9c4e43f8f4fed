//! Decoding of PostgreSQL text-format values keyed by type name.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use hashbrown::HashMap;
use pgext_types::literal::tokenize;
use pgext_types::{
    BitString, Cidr, Circle, CodecError, DateRange, DecodeMode, FromLiteral, HexBytes, Inet,
    Int4Range, Int8Range, Json, MacAddr, Money, NumRange, ParseError, Path, PgType, Point, Polygon,
    Rect, ToLiteral, TsQuery, TsRange, TsVector, TstzRange, Uuid, Xml,
};
use rust_decimal::Decimal;

use super::PostgresValue;

/// Decoder for a caller-defined type, registered by type name.
pub type CustomCodec = fn(&str) -> Result<PostgresValue<'static>, CodecError>;

/// Codec settings threaded through dynamic decoding.
///
/// ```
/// use pgext_postgres::values::{CodecConfig, PostgresValue, decode_text};
/// use pgext_types::{CodecError, DecodeMode};
///
/// fn mood(text: &str) -> Result<PostgresValue<'static>, CodecError> {
///     Ok(PostgresValue::Text(text.to_uppercase().into()))
/// }
///
/// let config = CodecConfig::new()
///     .with_array_mode(DecodeMode::Strict)
///     .with_codec("mood", mood);
///
/// let value = decode_text("mood", "happy", &config).unwrap();
/// assert_eq!(value, PostgresValue::Text("HAPPY".into()));
/// assert!(decode_text("int4[]", "{1,x}", &config).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    array_mode: DecodeMode,
    codecs: HashMap<String, CustomCodec>,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_array_mode(mut self, mode: DecodeMode) -> Self {
        self.array_mode = mode;
        self
    }

    /// Registers `codec` for values whose PostgreSQL type is `pg_type`.
    pub fn with_codec(mut self, pg_type: impl Into<String>, codec: CustomCodec) -> Self {
        self.codecs.insert(pg_type.into(), codec);
        self
    }

    #[inline]
    pub fn array_mode(&self) -> DecodeMode {
        self.array_mode
    }

    pub fn codec(&self, pg_type: &str) -> Option<CustomCodec> {
        self.codecs.get(pg_type).copied()
    }
}

/// Decodes the text form of a value of PostgreSQL type `pg_type`.
///
/// Built-in type names are matched case-insensitively, including the usual
/// aliases (`int4`/`integer`, `varchar`/`character varying`, ...). Arrays are
/// written `T[]` or `_T`. Anything else goes to the custom codec registered
/// under that exact name.
pub fn decode_text(
    pg_type: &str,
    text: &str,
    config: &CodecConfig,
) -> Result<PostgresValue<'static>, CodecError> {
    let pg_type = pg_type.trim();
    match array_element_type(pg_type) {
        Some(element) => decode_array(element, text, config),
        None => decode_scalar(pg_type, text, config),
    }
}

fn array_element_type(pg_type: &str) -> Option<&str> {
    pg_type
        .strip_suffix("[]")
        .or_else(|| pg_type.strip_prefix('_').filter(|rest| !rest.is_empty()))
}

fn decode_array(
    element: &str,
    text: &str,
    config: &CodecConfig,
) -> Result<PostgresValue<'static>, CodecError> {
    let tokens = tokenize(text);
    let mut values = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        // The tokenizer folds NULL into an empty token
        if token.is_empty() && !is_text_type(element) {
            values.push(PostgresValue::Null);
            continue;
        }
        match decode_scalar(element, token, config) {
            Ok(value) => values.push(value),
            Err(CodecError::Parse(source)) => match config.array_mode() {
                DecodeMode::Lossy => {
                    pgext_types::pgext_trace_skip!(source.kind(), token, &source);
                }
                DecodeMode::Strict => {
                    return Err(ParseError::Element {
                        kind: source.kind(),
                        index,
                        source: Box::new(source),
                    }
                    .into());
                }
            },
            Err(unsupported) => return Err(unsupported),
        }
    }
    Ok(PostgresValue::Array(values))
}

fn is_text_type(pg_type: &str) -> bool {
    matches!(
        pg_type.to_ascii_lowercase().as_str(),
        "text" | "varchar" | "character varying" | "char" | "character" | "bpchar" | "name"
            | "citext"
    )
}

/// Parses with `T`'s codec and rebinds the canonical text as a typed literal.
fn typed_literal<T>(text: &str) -> Result<PostgresValue<'static>, ParseError>
where
    T: FromLiteral + ToLiteral + PgType,
{
    let value = T::from_literal(text)?;
    Ok(PostgresValue::Literal {
        pg_type: Cow::Borrowed(T::PG_TYPE),
        text: value.to_literal(),
    })
}

fn decode_scalar(
    pg_type: &str,
    text: &str,
    config: &CodecConfig,
) -> Result<PostgresValue<'static>, CodecError> {
    let value = match pg_type.to_ascii_lowercase().as_str() {
        "bool" | "boolean" => PostgresValue::Boolean(bool::from_literal(text)?),
        "int2" | "smallint" | "smallserial" => PostgresValue::Smallint(i16::from_literal(text)?),
        "int4" | "int" | "integer" | "serial" => PostgresValue::Integer(i32::from_literal(text)?),
        "int8" | "bigint" | "bigserial" => PostgresValue::Bigint(i64::from_literal(text)?),
        "float4" | "real" => PostgresValue::Real(f32::from_literal(text)?),
        "float8" | "double precision" => PostgresValue::DoublePrecision(f64::from_literal(text)?),
        "numeric" | "decimal" => PostgresValue::Numeric(Decimal::from_literal(text)?),
        "text" | "varchar" | "character varying" | "char" | "character" | "bpchar" | "name"
        | "citext" => PostgresValue::Text(Cow::Owned(text.to_string())),
        "bytea" => PostgresValue::from(HexBytes::from_literal(text)?),
        "uuid" => PostgresValue::Uuid(Uuid::from_literal(text)?),
        "timestamp" | "timestamp without time zone" => {
            PostgresValue::Timestamp(NaiveDateTime::from_literal(text)?)
        }
        "timestamptz" | "timestamp with time zone" => {
            PostgresValue::TimestampTz(DateTime::<Utc>::from_literal(text)?)
        }
        "date" => PostgresValue::Date(NaiveDate::from_literal(text)?),
        "json" | "jsonb" => PostgresValue::Json(Json::from_literal(text)?.into_inner()),
        "inet" => PostgresValue::Inet(Inet::from_literal(text)?),
        "cidr" => PostgresValue::Cidr(Cidr::from_literal(text)?),
        "macaddr" => PostgresValue::MacAddr(MacAddr::from_literal(text)?),
        "int4range" => typed_literal::<Int4Range>(text)?,
        "int8range" => typed_literal::<Int8Range>(text)?,
        "numrange" => typed_literal::<NumRange>(text)?,
        "tsrange" => typed_literal::<TsRange>(text)?,
        "tstzrange" => typed_literal::<TstzRange>(text)?,
        "daterange" => typed_literal::<DateRange>(text)?,
        "point" => typed_literal::<Point>(text)?,
        "box" => typed_literal::<Rect>(text)?,
        "path" => typed_literal::<Path>(text)?,
        "polygon" => typed_literal::<Polygon>(text)?,
        "circle" => typed_literal::<Circle>(text)?,
        "bit" | "varbit" | "bit varying" => typed_literal::<BitString>(text)?,
        "money" => typed_literal::<Money>(text)?,
        "tsvector" => typed_literal::<TsVector>(text)?,
        "tsquery" => typed_literal::<TsQuery>(text)?,
        "xml" => typed_literal::<Xml>(text)?,
        _ => return decode_custom(pg_type, text, config),
    };
    Ok(value)
}

fn decode_custom(
    pg_type: &str,
    text: &str,
    config: &CodecConfig,
) -> Result<PostgresValue<'static>, CodecError> {
    let Some(codec) = config.codec(pg_type) else {
        return Err(CodecError::UnsupportedType {
            pg_type: pg_type.to_string(),
        });
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(pg_type, "pgext.decode.custom");
    codec(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(pg_type: &str, text: &str) -> Result<PostgresValue<'static>, CodecError> {
        decode_text(pg_type, text, &CodecConfig::default())
    }

    #[test]
    fn scalar_aliases() {
        assert_eq!(decode("INTEGER", "42").unwrap(), PostgresValue::Integer(42));
        assert_eq!(decode("int8", "-7").unwrap(), PostgresValue::Bigint(-7));
        assert_eq!(decode("boolean", "t").unwrap(), PostgresValue::Boolean(true));
        assert_eq!(
            decode("varchar", "hi").unwrap(),
            PostgresValue::Text("hi".into())
        );
        assert_eq!(
            decode("bytea", "\\x00ff").unwrap(),
            PostgresValue::Bytea(vec![0, 255].into())
        );
        assert!(decode("bytea", "\\x0").is_err());
    }

    #[test]
    fn extended_scalars() {
        assert_eq!(
            decode("uuid", "6BA7B810-9DAD-11D1-80B4-00C04FD430C8").unwrap(),
            PostgresValue::Uuid(Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8))
        );
        assert_eq!(
            decode("money", "-$1,234.50").unwrap(),
            PostgresValue::Literal {
                pg_type: "money".into(),
                text: "-1234.50".into(),
            }
        );
        assert_eq!(decode("tsvector", "'fat':1").unwrap().type_name(), "tsvector");
        assert_eq!(decode("TSQUERY", "fat & rat").unwrap().to_string(), "fat & rat");
        assert_eq!(decode("xml", "<a/>").unwrap().type_name(), "xml");
        assert!(decode("uuid", "not-a-uuid").is_err());
        assert_eq!(
            decode("money[]", r#"{"$1.00","$2.50"}"#).unwrap().to_string(),
            "{1.00,2.50}"
        );
    }

    #[test]
    fn composite_types_are_canonicalized() {
        assert_eq!(
            decode("int4range", " [1,5) ").unwrap(),
            PostgresValue::Literal {
                pg_type: "int4range".into(),
                text: "[1,5)".into(),
            }
        );
        assert!(matches!(
            decode("int4range", "1,5)"),
            Err(CodecError::Parse(ParseError::Literal { .. }))
        ));
        assert_eq!(decode("box", "(1,1),(0,0)").unwrap().type_name(), "box");
    }

    #[test]
    fn arrays_in_both_spellings() {
        let expected = PostgresValue::Array(vec![
            PostgresValue::Integer(1),
            PostgresValue::Null,
            PostgresValue::Integer(3),
        ]);
        assert_eq!(decode("int4[]", "{1,NULL,3}").unwrap(), expected);
        assert_eq!(decode("_int4", "{1,NULL,3}").unwrap(), expected);
        assert_eq!(
            decode("text[]", r#"{"a,b",NULL}"#).unwrap(),
            PostgresValue::Array(vec![
                PostgresValue::Text("a,b".into()),
                PostgresValue::Text("".into()),
            ])
        );
    }

    #[test]
    fn array_mode_controls_bad_elements() {
        assert_eq!(
            decode("int4[]", "{1,x,3}").unwrap(),
            PostgresValue::Array(vec![PostgresValue::Integer(1), PostgresValue::Integer(3)])
        );

        let strict = CodecConfig::new().with_array_mode(DecodeMode::Strict);
        let err = decode_text("int4[]", "{1,x,3}", &strict).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Parse(ParseError::Element { index: 1, .. })
        ));
    }

    #[test]
    fn unknown_types_need_a_codec() {
        assert_eq!(
            decode("mood", "happy").unwrap_err(),
            CodecError::UnsupportedType {
                pg_type: "mood".into()
            }
        );
        assert!(matches!(
            decode("mood[]", "{happy}"),
            Err(CodecError::UnsupportedType { .. })
        ));

        fn mood(text: &str) -> Result<PostgresValue<'static>, CodecError> {
            match text {
                "happy" | "sad" => Ok(PostgresValue::Text(text.to_string().into())),
                _ => Err(ParseError::token("mood", text, "unknown variant").into()),
            }
        }
        let config = CodecConfig::new().with_codec("mood", mood);
        assert_eq!(
            decode_text("mood[]", "{happy,grumpy,sad}", &config).unwrap(),
            PostgresValue::Array(vec![
                PostgresValue::Text("happy".into()),
                PostgresValue::Text("sad".into()),
            ])
        );
    }
}
