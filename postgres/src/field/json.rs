use std::borrow::Cow;

use pgext_core::SQL;
use pgext_core::sql::{SQLChunk, Token};
use pgext_types::Json;

use super::{Field, ValueFor};
use crate::expr::{self, Expression};
use crate::values::{KeyValue, PostgresValue};

/// Path-addressed comparisons, `key_<name>(path, value)`.
macro_rules! key_comparisons {
    ($($name:ident => $op:expr),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Compares the value at a dot-separated key path using `",
                    stringify!($name),
                    "`, cast to match `value`."
                )]
                pub fn [<key_ $name>]<'a>(
                    &self,
                    path: &'a str,
                    value: impl Into<KeyValue<'a>>,
                ) -> Expression<'a> {
                    expr::json_key_compare(self, path, $op, value)
                }
            )*
        }
    };
}

/// Path-addressed pattern matches, compared as text.
macro_rules! key_patterns {
    ($($name:ident => $op:expr),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Matches the text at a dot-separated key path using `",
                    stringify!($name),
                    "`."
                )]
                pub fn [<key_ $name>]<'a>(
                    &self,
                    path: &'a str,
                    pattern: impl Into<Cow<'a, str>>,
                ) -> Expression<'a> {
                    expr::json_key_compare(self, path, $op, KeyValue::Text(pattern.into()))
                }
            )*
        }
    };
}

impl Field<Json> {
    /// `@>`: the document contains `value` at the top level.
    pub fn contains<'a>(&self, value: impl ValueFor<'a, Json>) -> Expression<'a> {
        self.operator("@>", value.into_value())
    }

    /// `<@`: the document is contained in `value`.
    pub fn contained_by<'a>(&self, value: impl ValueFor<'a, Json>) -> Expression<'a> {
        self.operator("<@", value.into_value())
    }

    /// `?`: `key` is a top-level key.
    pub fn has_key<'a>(&self, key: impl Into<Cow<'a, str>>) -> Expression<'a> {
        expr::json_exists(self, key)
    }

    /// `?|`: any of `keys` is a top-level key. No keys matches nothing.
    pub fn has_any_keys<'a, I, K>(&self, keys: I) -> Expression<'a>
    where
        I: IntoIterator<Item = K>,
        K: Into<Cow<'a, str>>,
    {
        expr::json_exists_any(self, keys)
    }

    /// `?&`: all of `keys` are top-level keys. No keys matches everything.
    pub fn has_all_keys<'a, I, K>(&self, keys: I) -> Expression<'a>
    where
        I: IntoIterator<Item = K>,
        K: Into<Cow<'a, str>>,
    {
        expr::json_exists_all(self, keys)
    }

    /// `@> [element]`: the document is an array holding `element`.
    pub fn includes<'a>(&self, element: impl Into<serde_json::Value>) -> Expression<'a> {
        expr::json_array_includes(self, element)
    }

    /// Starts a `jsonb_set` update of this column.
    pub fn set<'a>(
        &self,
        path: &'a str,
        value: impl Into<serde_json::Value>,
    ) -> expr::JsonSet<'a> {
        expr::JsonSet::new(self).set(path, value)
    }

    /// The text at a dot-separated key path.
    pub fn extract_text<'a>(&self, path: &'a str) -> SQL<'a, PostgresValue<'a>> {
        expr::json_extract_path_text(self, path)
    }

    key_comparisons! {
        eq => Token::EQ,
        neq => Token::NE,
        gt => Token::GT,
        gte => Token::GE,
        lt => Token::LT,
        lte => Token::LE,
    }

    key_patterns! {
        like => Token::LIKE,
        ilike => SQLChunk::raw_static("ILIKE"),
        regexp => SQLChunk::raw_static("~"),
        iregexp => SQLChunk::raw_static("~*"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgext_core::ToSQL;
    use serde_json::json;

    const DATA: Field<Json> = Field::new("t", "c");

    #[test]
    fn key_eq_dispatches_cast_on_value_kind() {
        assert_eq!(
            DATA.key_eq("a.b", true).sql(),
            r#"CAST(json_extract_path_text("t"."c"::json, $1, $2) AS boolean) = $3"#
        );
        assert_eq!(
            DATA.key_eq("a.b", 3.5).sql(),
            r#"CAST(json_extract_path_text("t"."c"::json, $1, $2) AS numeric) = $3"#
        );
        assert_eq!(
            DATA.key_eq("a.b", "x").sql(),
            r#"json_extract_path_text("t"."c"::json, $1, $2) = $3"#
        );
    }

    #[test]
    fn key_patterns_compare_text() {
        let (sql, params) = DATA.key_ilike("user.name", "%ann%").into_parts();
        assert_eq!(
            sql,
            r#"json_extract_path_text("t"."c"::json, $1, $2) ILIKE $3"#
        );
        assert_eq!(params[2], PostgresValue::Text("%ann%".into()));
        assert_eq!(
            DATA.key_regexp("a", "^x").sql(),
            r#"json_extract_path_text("t"."c"::json, $1) ~ $2"#
        );
        assert_eq!(
            DATA.key_lte("n", 10).sql(),
            r#"CAST(json_extract_path_text("t"."c"::json, $1) AS numeric) <= $2"#
        );
    }

    #[test]
    fn containment_and_keys() {
        let (sql, params) = DATA.contains(json!({"a": 1})).into_parts();
        assert_eq!(sql, r#""t"."c" @> $1"#);
        assert_eq!(params, vec![PostgresValue::Json(json!({"a": 1}))]);
        assert_eq!(DATA.has_key("a").sql(), r#""t"."c" ? $1"#);
        assert_eq!(
            DATA.has_any_keys(["a", "b"]).sql(),
            r#""t"."c" ?| ARRAY[$1, $2]"#
        );
        assert_eq!(DATA.has_any_keys(Vec::<&str>::new()).sql(), "1=0");
        assert_eq!(DATA.has_all_keys(Vec::<&str>::new()).sql(), "1=1");
    }

    #[test]
    fn array_includes_any_element_kind() {
        let (sql, params) = DATA.includes(json!({"id": 3})).into_parts();
        assert_eq!(sql, r#""t"."c" @> $1"#);
        assert_eq!(params, vec![PostgresValue::Json(json!([{"id": 3}]))]);
        assert_eq!(
            DATA.includes("tag").into_parts().1,
            vec![PostgresValue::Json(json!(["tag"]))]
        );
    }

    #[test]
    fn set_builds_nested_updates() {
        let update = DATA.set("a", 1).set("b.c", json!(null));
        assert_eq!(
            update.to_sql().sql(),
            r#"jsonb_set(jsonb_set("t"."c", $1, $2), $3, $4)"#
        );
        assert_eq!(update.into_sql().params().count(), 4);
    }
}
