//! PostgreSQL full text search.
//!
//! - `@@` (document matches query)
//! - `to_tsquery` / `plainto_tsquery` / `websearch_to_tsquery` (query parsers)

use std::borrow::Cow;

use pgext_core::ToSQL;
use pgext_core::sql::{SQL, Token};

use super::{Expression, operator};
use crate::values::PostgresValue;

/// PostgreSQL `@@` operator - a `tsvector` matches a `tsquery`.
///
/// # Example
///
/// ```
/// use pgext_core::SQL;
/// use pgext_postgres::expr::{plainto_tsquery, ts_match};
/// use pgext_postgres::values::PostgresValue;
///
/// let body = SQL::<PostgresValue>::column("posts", "search");
/// let cond = ts_match(body, plainto_tsquery(None, "fat rats"));
/// assert_eq!(cond.sql(), r#""posts"."search" @@ plainto_tsquery($1)"#);
/// ```
pub fn ts_match<'a, L, R>(document: L, query: R) -> Expression<'a>
where
    L: ToSQL<'a, PostgresValue<'a>>,
    R: ToSQL<'a, PostgresValue<'a>>,
{
    operator(document, "@@", query)
}

/// `name([config, ]text)` with both arguments bound.
fn parser_call<'a>(
    name: &'static str,
    config: Option<&'a str>,
    text: impl Into<Cow<'a, str>>,
) -> SQL<'a, PostgresValue<'a>> {
    let text = SQL::param(PostgresValue::Text(text.into()));
    let args = match config {
        Some(config) => SQL::param(PostgresValue::Text(Cow::Borrowed(config)))
            .push(Token::COMMA)
            .append(text),
        None => text,
    };
    SQL::func(name, args)
}

/// `to_tsquery([config, ]$n)`: the text uses tsquery syntax (`fat & rat`).
pub fn to_tsquery<'a>(
    config: Option<&'a str>,
    text: impl Into<Cow<'a, str>>,
) -> SQL<'a, PostgresValue<'a>> {
    parser_call("to_tsquery", config, text)
}

/// `plainto_tsquery([config, ]$n)`: words are ANDed, punctuation ignored.
pub fn plainto_tsquery<'a>(
    config: Option<&'a str>,
    text: impl Into<Cow<'a, str>>,
) -> SQL<'a, PostgresValue<'a>> {
    parser_call("plainto_tsquery", config, text)
}

/// `websearch_to_tsquery([config, ]$n)`: quoted phrases, `or` and `-word`.
pub fn websearch_to_tsquery<'a>(
    config: Option<&'a str>,
    text: impl Into<Cow<'a, str>>,
) -> SQL<'a, PostgresValue<'a>> {
    parser_call("websearch_to_tsquery", config, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> SQL<'static, PostgresValue<'static>> {
        SQL::column("posts", "search")
    }

    #[test]
    fn parsers_bind_config_first() {
        let (sql, params) =
            ts_match(search(), to_tsquery(Some("english"), "fat & rat")).into_parts();
        assert_eq!(sql, r#""posts"."search" @@ to_tsquery($1, $2)"#);
        assert_eq!(
            params,
            vec![
                PostgresValue::Text("english".into()),
                PostgresValue::Text("fat & rat".into()),
            ]
        );
        assert_eq!(
            websearch_to_tsquery(None, "\"fat rat\" -cat").sql(),
            "websearch_to_tsquery($1)"
        );
    }
}
