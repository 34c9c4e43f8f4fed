use pgext_types::Array;

use super::{Field, ValueFor};
use crate::expr::{self, Expression};
use crate::values::PostgresValue;

impl<E> Field<Array<E>> {
    /// `@>`: the column holds every element of `values`.
    pub fn contains<'a>(&self, values: impl ValueFor<'a, Array<E>>) -> Expression<'a> {
        self.operator("@>", values.into_value())
    }

    /// `<@`: every element of the column is in `values`.
    pub fn contained_by<'a>(&self, values: impl ValueFor<'a, Array<E>>) -> Expression<'a> {
        self.operator("<@", values.into_value())
    }

    /// `&&`: the column shares at least one element with `values`.
    pub fn overlaps<'a>(&self, values: impl ValueFor<'a, Array<E>>) -> Expression<'a> {
        self.operator("&&", values.into_value())
    }

    /// `$1 = ANY("t"."c")`: some element equals `value`.
    pub fn has<'a>(&self, value: impl ValueFor<'a, E>) -> Expression<'a> {
        let value: PostgresValue<'a> = value.into_value();
        expr::any_eq(value, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: Field<Array<String>> = Field::new("posts", "tags");

    #[test]
    fn array_operators() {
        let (sql, params) = TAGS.contains(vec!["a".to_string(), "b".to_string()]).into_parts();
        assert_eq!(sql, r#""posts"."tags" @> $1"#);
        assert_eq!(params[0].to_string(), "{a,b}");

        assert_eq!(
            TAGS.contained_by(Array::from(vec!["x".to_string()])).sql(),
            r#""posts"."tags" <@ $1"#
        );
        assert_eq!(
            TAGS.overlaps(Vec::<String>::new()).sql(),
            r#""posts"."tags" && $1"#
        );
        assert_eq!(TAGS.has("rust").sql(), r#"$1 = ANY("posts"."tags")"#);
    }
}
