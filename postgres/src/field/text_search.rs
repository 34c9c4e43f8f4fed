use std::borrow::Cow;

use pgext_types::{TsQuery, TsVector};

use super::{Field, ValueFor};
use crate::expr::{self, Expression};

impl Field<TsVector> {
    /// `@@` against a bound `tsquery`, written in tsquery syntax.
    pub fn matches<'a>(&self, query: impl ValueFor<'a, TsQuery>) -> Expression<'a> {
        self.operator("@@", query.into_value())
    }

    /// `@@ plainto_tsquery(..)`: every word of `text` must occur.
    pub fn matches_plain<'a>(
        &self,
        config: Option<&'a str>,
        text: impl Into<Cow<'a, str>>,
    ) -> Expression<'a> {
        expr::ts_match(self, expr::plainto_tsquery(config, text))
    }

    /// `@@ websearch_to_tsquery(..)`: search-engine style input.
    pub fn matches_web<'a>(
        &self,
        config: Option<&'a str>,
        text: impl Into<Cow<'a, str>>,
    ) -> Expression<'a> {
        expr::ts_match(self, expr::websearch_to_tsquery(config, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::PostgresValue;

    const SEARCH: Field<TsVector> = Field::new("posts", "search");

    #[test]
    fn matches_binds_a_typed_query() {
        let (sql, params) = SEARCH.matches("fat & rat").into_parts();
        assert_eq!(sql, r#""posts"."search" @@ $1"#);
        assert_eq!(params[0].type_name(), "tsquery");
        assert_eq!(params[0].to_string(), "fat & rat");

        let query = TsQuery::new("fat").and(TsQuery::new("rat"));
        let (_, params) = SEARCH.matches(query).into_parts();
        assert_eq!(params[0], PostgresValue::literal(&TsQuery::new("(fat) & (rat)")));
    }

    #[test]
    fn parser_variants() {
        assert_eq!(
            SEARCH.matches_plain(Some("english"), "fat rats").sql(),
            r#""posts"."search" @@ plainto_tsquery($1, $2)"#
        );
        assert_eq!(
            SEARCH.matches_web(None, "\"fat rat\" or cat").sql(),
            r#""posts"."search" @@ websearch_to_tsquery($1)"#
        );
    }
}
