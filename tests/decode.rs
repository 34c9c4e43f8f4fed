use chrono::NaiveDate;
use pgext::postgres::{CodecConfig, Field, FieldOptions, PostgresValue, decode_text};
use pgext::types::{CodecError, DecodeMode, Json, ParseError, Point};
use rust_decimal::Decimal;
use serde_json::json;

fn decode(pg_type: &str, text: &str) -> Result<PostgresValue<'static>, CodecError> {
    decode_text(pg_type, text, &CodecConfig::default())
}

fn upper_status(text: &str) -> Result<PostgresValue<'static>, CodecError> {
    match text {
        "active" | "banned" => Ok(PostgresValue::Text(text.to_uppercase().into())),
        _ => Err(ParseError::token("status", text, "unknown status").into()),
    }
}

#[test]
fn built_in_scalars() {
    assert_eq!(decode("int2", "7").unwrap(), PostgresValue::Smallint(7));
    assert_eq!(decode("bigint", "9000000000").unwrap(), PostgresValue::Bigint(9_000_000_000));
    assert_eq!(
        decode("numeric", "12.50").unwrap(),
        PostgresValue::Numeric(Decimal::new(1250, 2))
    );
    assert_eq!(decode("bool", "f").unwrap(), PostgresValue::Boolean(false));
    assert_eq!(
        decode("date", "2024-02-29").unwrap(),
        PostgresValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
    );
    assert_eq!(
        decode("jsonb", r#"{"a":[1,2]}"#).unwrap(),
        PostgresValue::Json(json!({"a": [1, 2]}))
    );
    assert_eq!(decode("macaddr", "08002b010203").unwrap().type_name(), "macaddr");
}

#[test]
fn bad_scalars_report_the_kind() {
    let err = decode("int4", "4.5").unwrap_err();
    match err {
        CodecError::Parse(source) => assert_eq!(source.kind(), "i32"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(decode("bytea", "00ff").is_err());
    assert!(decode("bytea", "\\x0").is_err());
}

#[test]
fn composite_values_are_canonical_literals() {
    let value = decode("point", "( 1 , 2 )").unwrap();
    assert_eq!(value.type_name(), "point");
    assert_eq!(value.to_string(), Point::new(1.0, 2.0).to_string());

    assert_eq!(decode("varbit", "1011").unwrap().to_string(), "1011");
    assert!(decode("bit", "10x1").is_err());
    assert_eq!(decode("daterange", "[2024-01-01,2024-01-31)").unwrap().type_name(), "daterange");
}

#[test]
fn arrays_follow_the_configured_mode() {
    let lossy = decode("_float8", "{1.5,abc,NULL}").unwrap();
    assert_eq!(
        lossy,
        PostgresValue::Array(vec![
            PostgresValue::DoublePrecision(1.5),
            PostgresValue::Null,
        ])
    );
    assert_eq!(lossy.type_name(), "float8[]");

    let strict = CodecConfig::new().with_array_mode(DecodeMode::Strict);
    assert_eq!(strict.array_mode(), DecodeMode::Strict);
    assert!(matches!(
        decode_text("float8[]", "{1.5,abc}", &strict),
        Err(CodecError::Parse(ParseError::Element { index: 1, .. }))
    ));

    assert_eq!(decode("int4[]", "{}").unwrap(), PostgresValue::Array(vec![]));
    assert_eq!(decode("int4[]", "{}").unwrap().type_name(), "anyarray");
}

#[test]
fn custom_codecs_by_type_name() {
    assert!(matches!(
        decode("user_status", "active"),
        Err(CodecError::UnsupportedType { .. })
    ));

    let config = CodecConfig::new().with_codec("user_status", upper_status);
    assert!(config.codec("user_status").is_some());
    assert!(config.codec("USER_STATUS").is_none());
    assert_eq!(
        decode_text("user_status", "active", &config).unwrap(),
        PostgresValue::Text("ACTIVE".into())
    );
    assert!(decode_text("user_status", "gone", &config).is_err());

    // built-in names never reach the registry
    let shadow = CodecConfig::new().with_codec("int4", upper_status);
    assert_eq!(
        decode_text("int4", "3", &shadow).unwrap(),
        PostgresValue::Integer(3)
    );
}

#[test]
fn fields_decode_through_their_column_type() {
    let status: Field<String> = Field::new("users", "status")
        .with_options(FieldOptions::new().with_codec("user_status"));
    let config = CodecConfig::new().with_codec("user_status", upper_status);
    assert_eq!(
        status.decode_dynamic("banned", &config).unwrap(),
        PostgresValue::Text("BANNED".into())
    );

    let score: Field<i64> = Field::new("users", "score")
        .with_options(FieldOptions::new().with_column_type("numeric"));
    assert_eq!(score.column_type(), "numeric");
    assert_eq!(
        score.decode_dynamic("1.25", &config).unwrap(),
        PostgresValue::Numeric(Decimal::new(125, 2))
    );

    let meta: Field<Json> = Field::new("users", "meta");
    assert_eq!(meta.column_type(), "jsonb");
    assert_eq!(meta.decode(r#"{"a":1}"#).unwrap(), Json::new(json!({"a": 1})));
}
