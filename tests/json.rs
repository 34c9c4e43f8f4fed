use pgext::postgres::{Field, PostgresValue};
use pgext::types::Json;
use serde_json::json;

const META: Field<Json> = Field::new("t", "c");

#[test]
fn key_eq_with_bool_casts_to_boolean() {
    let (sql, params) = META.key_eq("a.b", true).into_parts();
    assert_eq!(
        sql,
        r#"CAST(json_extract_path_text("t"."c"::json, $1, $2) AS boolean) = $3"#
    );
    assert_eq!(
        params,
        vec![
            PostgresValue::Text("a".into()),
            PostgresValue::Text("b".into()),
            PostgresValue::Boolean(true),
        ]
    );
}

#[test]
fn key_eq_with_number_casts_to_numeric() {
    let (sql, params) = META.key_eq("a.b", 3.5).into_parts();
    assert_eq!(
        sql,
        r#"CAST(json_extract_path_text("t"."c"::json, $1, $2) AS numeric) = $3"#
    );
    assert_eq!(params[2], PostgresValue::DoublePrecision(3.5));

    let integer = META.key_gte("a.b", 10u16);
    assert_eq!(
        integer.sql(),
        r#"CAST(json_extract_path_text("t"."c"::json, $1, $2) AS numeric) >= $3"#
    );
}

#[test]
fn key_eq_with_text_compares_plain_text() {
    let (sql, params) = META.key_eq("a.b", "x").into_parts();
    assert_eq!(sql, r#"json_extract_path_text("t"."c"::json, $1, $2) = $3"#);
    assert_eq!(params[2], PostgresValue::Text("x".into()));

    let owned = String::from("y");
    assert_eq!(
        META.key_neq("a", &owned).sql(),
        r#"json_extract_path_text("t"."c"::json, $1) <> $2"#
    );
}

#[test]
fn empty_path_compares_the_whole_document() {
    assert_eq!(META.key_eq("", "x").sql(), r#""t"."c"::text = $1"#);
    assert_eq!(META.extract_text("").sql(), r#""t"."c"::text"#);
}

#[test]
fn key_pattern_matches() {
    assert_eq!(
        META.key_like("user.email", "%@example.com").sql(),
        r#"json_extract_path_text("t"."c"::json, $1, $2) LIKE $3"#
    );
    assert_eq!(
        META.key_iregexp("user.email", "^ADMIN").sql(),
        r#"json_extract_path_text("t"."c"::json, $1, $2) ~* $3"#
    );
}

#[test]
fn key_existence_operators() {
    assert_eq!(META.has_key("a").sql(), r#""t"."c" ? $1"#);

    let (sql, params) = META.has_any_keys(["a", "b"]).into_parts();
    assert_eq!(sql, r#""t"."c" ?| ARRAY[$1, $2]"#);
    assert_eq!(params.len(), 2);
    assert_eq!(
        META.has_all_keys(vec!["a".to_string()]).sql(),
        r#""t"."c" ?& ARRAY[$1]"#
    );

    // no keys: nothing has any of them, everything has all of them
    assert_eq!(META.has_any_keys(Vec::<&str>::new()).sql(), "1=0");
    assert_eq!(META.has_all_keys(Vec::<&str>::new()).sql(), "1=1");
}

#[test]
fn containment_binds_the_document() {
    let (sql, params) = META.contains(json!({"tags": ["a"]})).into_parts();
    assert_eq!(sql, r#""t"."c" @> $1"#);
    assert_eq!(params, vec![PostgresValue::Json(json!({"tags": ["a"]}))]);

    let (sql, _) = META
        .contained_by(Json::new(json!({"a": 1, "b": 2})))
        .into_parts();
    assert_eq!(sql, r#""t"."c" <@ $1"#);
}

#[test]
fn json_codec() {
    let doc: Json = r#"{"user": {"name": "ann", "roles": ["x", "y"]}}"#.parse().unwrap();
    assert!(doc.has_key("user"));
    assert_eq!(doc.get_path("user.name"), Some(&json!("ann")));
    assert_eq!(doc.get_path("user.roles.1"), Some(&json!("y")));
    assert_eq!(doc.keys(), vec!["user"]);
    assert!("{not json".parse::<Json>().is_err());
}
