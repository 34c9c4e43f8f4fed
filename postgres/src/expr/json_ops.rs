//! PostgreSQL JSON/JSONB operators.
//!
//! Provides type-safe access to PostgreSQL JSON operators:
//! - `@>` / `<@` (JSON containment)
//! - `?` (JSON key exists)
//! - `?|` / `?&` (any / all of the keys exist)
//! - `json_extract_path_text` (text at a key path)
//! - `jsonb_set` (document updates, see [`JsonSet`])

use std::borrow::Cow;

use pgext_core::ToSQL;
use pgext_core::expr::infix;
use pgext_core::sql::{SQL, SQLChunk, Token};

use super::{Expression, operator};
use crate::values::{KeyValue, PostgresValue};

/// PostgreSQL `@>` operator - JSON contains.
///
/// # Example
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::json_contains;
/// use pgext_postgres::values::PostgresValue;
/// use serde_json::json;
///
/// let data = SQL::<PostgresValue>::column("events", "data");
/// let cond = json_contains(data, PostgresValue::from(json!({"kind": "click"})));
/// assert_eq!(cond.sql(), r#""events"."data" @> $1"#);
/// ```
pub fn json_contains<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "@>", right)
}

/// PostgreSQL `<@` operator - JSON is contained by.
pub fn json_contained<'a, L, R>(left: L, right: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(left, "<@", right)
}

/// PostgreSQL `?` operator - check if a top-level key exists.
pub fn json_exists<'a, E>(expr: E, key: impl Into<Cow<'a, str>>) -> Expression<'a>
where
    E: ToSQL<'a, PostgresValue<'a>>,
{
    operator(expr, "?", PostgresValue::Text(key.into()))
}

fn key_array<'a, I, K>(keys: I) -> Option<SQL<'a, PostgresValue<'a>>>
where
    I: IntoIterator<Item = K>,
    K: Into<Cow<'a, str>>,
{
    let mut keys = keys
        .into_iter()
        .map(|key| PostgresValue::Text(key.into()))
        .peekable();
    keys.peek()?;
    Some(
        SQL::token(Token::ARRAY)
            .push(Token::LBRACKET)
            .append(SQL::param_list(keys))
            .push(Token::RBRACKET),
    )
}

/// PostgreSQL `?|` operator - any of the keys exist.
///
/// An empty key list matches nothing.
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::json_exists_any;
/// use pgext_postgres::values::PostgresValue;
///
/// let data = SQL::<PostgresValue>::column("events", "data");
/// assert_eq!(
///     json_exists_any(data.clone(), ["a", "b"]).sql(),
///     r#""events"."data" ?| ARRAY[$1, $2]"#
/// );
/// assert_eq!(json_exists_any(data, Vec::<&str>::new()).sql(), "1=0");
/// ```
pub fn json_exists_any<'a, E, I, K>(expr: E, keys: I) -> Expression<'a>
where
    E: ToSQL<'a, PostgresValue<'a>>,
    I: IntoIterator<Item = K>,
    K: Into<Cow<'a, str>>,
{
    match key_array(keys) {
        Some(array) => operator(expr, "?|", array),
        None => Expression::always_false(),
    }
}

/// PostgreSQL `?&` operator - all of the keys exist.
///
/// An empty key list matches every row.
pub fn json_exists_all<'a, E, I, K>(expr: E, keys: I) -> Expression<'a>
where
    E: ToSQL<'a, PostgresValue<'a>>,
    I: IntoIterator<Item = K>,
    K: Into<Cow<'a, str>>,
{
    match key_array(keys) {
        Some(array) => operator(expr, "?&", array),
        None => Expression::always_true(),
    }
}

/// Splits a dot-separated key path, ignoring empty segments.
pub fn key_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|segment| !segment.is_empty())
}

/// Text at `path` inside a JSON value:
/// `json_extract_path_text(expr::json, $1, $2, ...)`.
///
/// An empty path yields the whole value as text.
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::json_extract_path_text;
/// use pgext_postgres::values::PostgresValue;
///
/// let data = SQL::<PostgresValue>::column("events", "data");
/// assert_eq!(
///     json_extract_path_text(data.clone(), "user.name").sql(),
///     r#"json_extract_path_text("events"."data"::json, $1, $2)"#
/// );
/// assert_eq!(json_extract_path_text(data, "").sql(), r#""events"."data"::text"#);
/// ```
pub fn json_extract_path_text<'a, E>(expr: E, path: &'a str) -> SQL<'a, PostgresValue<'a>>
where
    E: ToSQL<'a, PostgresValue<'a>>,
{
    let mut segments = key_path(path)
        .map(|segment| PostgresValue::Text(Cow::Borrowed(segment)))
        .peekable();
    if segments.peek().is_none() {
        return expr.into_sql().push(SQLChunk::raw_static("::text"));
    }
    let args = expr
        .into_sql()
        .push(SQLChunk::raw_static("::json"))
        .push(Token::COMMA)
        .append(SQL::param_list(segments));
    SQL::func("json_extract_path_text", args)
}

/// Compares the text at `path` with `value`, casting the extracted text to
/// match the value: `boolean` for booleans, `numeric` for numbers, none for
/// text.
///
/// ```
/// use pgext_core::SQL;
/// use pgext_core::sql::Token;
/// use pgext_postgres::expr::json_key_compare;
/// use pgext_postgres::values::PostgresValue;
///
/// let data = SQL::<PostgresValue>::column("t", "c");
/// let cond = json_key_compare(data, "a.b", Token::EQ, true);
/// assert_eq!(
///     cond.sql(),
///     r#"CAST(json_extract_path_text("t"."c"::json, $1, $2) AS boolean) = $3"#
/// );
/// ```
pub fn json_key_compare<'a, E>(
    expr: E,
    path: &'a str,
    op: impl Into<SQLChunk<'a, PostgresValue<'a>>>,
    value: impl Into<KeyValue<'a>>,
) -> Expression<'a>
where
    E: ToSQL<'a, PostgresValue<'a>>,
{
    let value = value.into();
    let extracted = json_extract_path_text(expr, path);
    let left = match value.cast() {
        Some(ty) => SQL::token(Token::CAST)
            .push(Token::LPAREN)
            .append(extracted)
            .push(Token::AS)
            .push(SQLChunk::raw_static(ty))
            .push(Token::RPAREN),
        None => extracted,
    };
    infix(left, op, value.into_value())
}

/// A `text[]` path parameter from a dot-separated key path.
fn path_array<'a>(path: &'a str) -> PostgresValue<'a> {
    PostgresValue::Array(
        key_path(path)
            .map(|segment| PostgresValue::Text(Cow::Borrowed(segment)))
            .collect(),
    )
}

/// Nested `jsonb_set` calls updating several paths of one document.
///
/// Assignments apply in the order they were added, so a later path wins
/// when two overlap. Array elements are addressed by index segments.
///
/// ```
/// use pgext_core::{SQL, ToSQL};
/// use pgext_postgres::expr::JsonSet;
/// use pgext_postgres::values::PostgresValue;
/// use serde_json::json;
///
/// let attrs = SQL::<PostgresValue>::column("users", "attrs");
/// let update = JsonSet::new(attrs)
///     .set("orgs.orga", json!("bar"))
///     .set("tags.0", json!("first"));
/// assert_eq!(
///     update.to_sql().sql(),
///     r#"jsonb_set(jsonb_set("users"."attrs", $1, $2), $3, $4)"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct JsonSet<'a> {
    target: SQL<'a, PostgresValue<'a>>,
    assignments: Vec<(&'a str, serde_json::Value)>,
}

impl<'a> JsonSet<'a> {
    pub fn new<E: ToSQL<'a, PostgresValue<'a>>>(target: E) -> Self {
        Self {
            target: target.into_sql(),
            assignments: Vec::new(),
        }
    }

    /// Sets `value` at a dot-separated `path`.
    pub fn set(mut self, path: &'a str, value: impl Into<serde_json::Value>) -> Self {
        self.assignments.push((path, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl<'a> ToSQL<'a, PostgresValue<'a>> for JsonSet<'a> {
    fn to_sql(&self) -> SQL<'a, PostgresValue<'a>> {
        self.clone().into_sql()
    }

    /// No assignments leaves the target as is.
    fn into_sql(self) -> SQL<'a, PostgresValue<'a>> {
        self.assignments
            .into_iter()
            .fold(self.target, |document, (path, value)| {
                let args = document
                    .push(Token::COMMA)
                    .append(SQL::param(path_array(path)))
                    .push(Token::COMMA)
                    .append(SQL::param(PostgresValue::Json(value)));
                SQL::func("jsonb_set", args)
            })
    }
}

/// `@>` with a one-element array: the JSON array contains `element`.
///
/// Unlike `?`, this also finds numbers, booleans and objects.
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::json_array_includes;
/// use pgext_postgres::values::PostgresValue;
/// use serde_json::json;
///
/// let tags = SQL::<PostgresValue>::column("posts", "tags");
/// let (sql, params) = json_array_includes(tags, json!(7)).into_parts();
/// assert_eq!(sql, r#""posts"."tags" @> $1"#);
/// assert_eq!(params, vec![PostgresValue::Json(json!([7]))]);
/// ```
pub fn json_array_includes<'a, E>(
    expr: E,
    element: impl Into<serde_json::Value>,
) -> Expression<'a>
where
    E: ToSQL<'a, PostgresValue<'a>>,
{
    let array = serde_json::Value::Array(vec![element.into()]);
    operator(expr, "@>", PostgresValue::Json(array))
}
