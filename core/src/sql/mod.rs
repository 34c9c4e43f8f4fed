mod chunk;
mod tokens;

use std::borrow::Cow;
use std::fmt::{Display, Write};

use smallvec::SmallVec;

use crate::param::Param;
use crate::traits::{SQLParam, ToSQL};
pub use chunk::*;
pub use tokens::*;

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation.
#[derive(Debug, Clone)]
pub struct SQL<'a, V: SQLParam> {
    pub chunks: SmallVec<[SQLChunk<'a, V>; 8]>,
}

impl<'a, V: SQLParam> SQL<'a, V> {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with a single token
    #[inline]
    pub fn token(t: Token) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Token(t)],
        }
    }

    /// Creates SQL with a quoted identifier
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Ident(name.into())],
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single parameter value
    #[inline]
    pub fn param(value: impl Into<Cow<'a, V>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Param(Param::new(value))],
        }
    }

    /// Creates SQL referencing a column: "table"."column"
    #[inline]
    pub fn column(table: impl Into<Cow<'a, str>>, column: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![
                SQLChunk::Ident(table.into()),
                SQLChunk::Token(Token::DOT),
                SQLChunk::Ident(column.into()),
            ],
        }
    }

    /// Creates SQL for a function call: NAME(args)
    /// Subqueries are automatically wrapped in parentheses: NAME((SELECT ...))
    #[inline]
    pub fn func(name: impl Into<Cow<'a, str>>, args: SQL<'a, V>) -> Self {
        let args = if args.is_subquery() {
            args.parens()
        } else {
            args
        };
        SQL::raw(name)
            .push(Token::LPAREN)
            .append(args)
            .push(Token::RPAREN)
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL<'a, V>>) -> Self {
        let other = other.into();

        if self.chunks.is_empty() {
            return other;
        }
        if other.chunks.is_empty() {
            return self;
        }

        self.chunks.extend(other.chunks);
        self
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk<'a, V>>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    // ==================== combinators ====================

    /// Joins multiple SQL fragments with a separator
    pub fn join<T>(sqls: T, separator: Token) -> SQL<'a, V>
    where
        T: IntoIterator,
        T::Item: ToSQL<'a, V>,
    {
        let mut iter = sqls.into_iter();
        let Some(first) = iter.next() else {
            return SQL::empty();
        };

        let mut result = first.into_sql();
        let (lower, _) = iter.size_hint();
        result.chunks.reserve(lower.saturating_mul(2));

        for item in iter {
            result.chunks.push(SQLChunk::Token(separator));
            result.chunks.extend(item.into_sql().chunks);
        }
        result
    }

    /// Creates a comma-separated list of parameters.
    /// Builds chunks directly without intermediate SQL allocations.
    pub fn param_list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'a, V>>,
    {
        let iter = values.into_iter();
        let (lower, _) = iter.size_hint();
        let mut chunks = SmallVec::with_capacity(lower.saturating_mul(2));
        for (i, v) in iter.enumerate() {
            if i > 0 {
                chunks.push(SQLChunk::Token(Token::COMMA));
            }
            chunks.push(SQLChunk::Param(Param::new(v)));
        }
        SQL { chunks }
    }

    /// Wrap in parentheses: (self)
    #[inline]
    pub fn parens(self) -> Self {
        SQL::token(Token::LPAREN).append(self).push(Token::RPAREN)
    }

    /// Check if this SQL fragment is a subquery (starts with SELECT)
    #[inline]
    pub fn is_subquery(&self) -> bool {
        match self.chunks.first() {
            Some(SQLChunk::Token(Token::SELECT)) => true,
            Some(SQLChunk::Raw(text)) => text
                .trim_start()
                .get(..6)
                .is_some_and(|head| head.eq_ignore_ascii_case("select")),
            _ => false,
        }
    }

    /// Whether the whole fragment is a single `( ... )` group.
    pub fn is_parenthesized(&self) -> bool {
        let (Some(SQLChunk::Token(Token::LPAREN)), Some(SQLChunk::Token(Token::RPAREN))) =
            (self.chunks.first(), self.chunks.last())
        else {
            return false;
        };
        let mut depth = 0usize;
        for (i, chunk) in self.chunks.iter().enumerate() {
            match chunk {
                SQLChunk::Token(Token::LPAREN) => depth += 1,
                SQLChunk::Token(Token::RPAREN) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return i == self.chunks.len() - 1;
                    }
                }
                _ => {}
            }
        }
        false
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    // ==================== output methods ====================

    /// Returns the SQL string with `$1, $2, ...` placeholders.
    pub fn sql(&self) -> String {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(64));
        self.write_to(&mut buf);
        buf
    }

    /// Generates the SQL string and collects parameter references in a single pass.
    pub fn build(&self) -> (String, Vec<&V>) {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(64));
        let mut params = Vec::with_capacity(self.chunks.len() / 2);
        self.render(&mut buf, |param| params.push(&*param.value));
        (buf, params)
    }

    /// Like [`SQL::build`], consuming the fragment and returning owned values.
    pub fn into_parts(self) -> (String, Vec<V>) {
        let sql = self.sql();
        let params = self
            .chunks
            .into_iter()
            .filter_map(|chunk| match chunk {
                SQLChunk::Param(param) => Some(param.value.into_owned()),
                _ => None,
            })
            .collect();
        (sql, params)
    }

    /// Write SQL to a buffer with `$n` placeholders.
    pub fn write_to(&self, buf: &mut impl Write) {
        self.render(buf, |_| {});
    }

    fn render<'s>(&'s self, buf: &mut impl Write, mut on_param: impl FnMut(&'s Param<'a, V>)) {
        let mut param_index = 1usize;
        for (i, chunk) in self.chunks.iter().enumerate() {
            match chunk {
                SQLChunk::Param(param) => {
                    let _ = write!(buf, "${param_index}");
                    param_index += 1;
                    on_param(param);
                }
                _ => chunk.write(buf),
            }

            if self.needs_space(i) {
                let _ = buf.write_char(' ');
            }
        }
    }

    fn needs_space(&self, index: usize) -> bool {
        let Some(next) = self.chunks.get(index + 1) else {
            return false;
        };

        let current = &self.chunks[index];
        chunk_needs_space(current, next)
    }

    /// Returns an iterator over references to parameter values
    pub fn params(&self) -> impl Iterator<Item = &V> {
        self.chunks.iter().filter_map(|chunk| {
            if let SQLChunk::Param(param) = chunk {
                Some(&*param.value)
            } else {
                None
            }
        })
    }
}

// ==================== trait implementations ====================

impl<'a, V: SQLParam> Default for SQL<'a, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, V: SQLParam> From<Token> for SQL<'a, V> {
    fn from(value: Token) -> Self {
        SQL::token(value)
    }
}

impl<'a, V: SQLParam> From<SQLChunk<'a, V>> for SQL<'a, V> {
    fn from(value: SQLChunk<'a, V>) -> Self {
        Self {
            chunks: smallvec::smallvec![value],
        }
    }
}

impl<'a, V: SQLParam> Display for SQL<'a, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let params: Vec<_> = self.params().collect();
        write!(f, r#"sql: "{}", params: {:?}"#, self.sql(), params)
    }
}

impl<'a, V: SQLParam + 'a> ToSQL<'a, V> for SQL<'a, V> {
    fn to_sql(&self) -> SQL<'a, V> {
        self.clone()
    }

    fn into_sql(self) -> SQL<'a, V> {
        self
    }
}

impl<'a, V: SQLParam, T> FromIterator<T> for SQL<'a, V>
where
    SQLChunk<'a, V>: From<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let chunks = SmallVec::from_iter(iter.into_iter().map(SQLChunk::from));
        Self { chunks }
    }
}

impl<'a, V: SQLParam> IntoIterator for SQL<'a, V> {
    type Item = SQLChunk<'a, V>;
    type IntoIter = smallvec::IntoIter<[SQLChunk<'a, V>; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Value(i64);

    impl SQLParam for Value {}

    impl<'a> From<Value> for Cow<'a, Value> {
        fn from(value: Value) -> Self {
            Cow::Owned(value)
        }
    }

    #[test]
    fn placeholders_are_numbered_left_to_right() {
        let sql: SQL<'_, Value> = SQL::column("t", "a")
            .push(Token::EQ)
            .append(SQL::param(Value(1)))
            .push(Token::AND)
            .append(SQL::column("t", "b"))
            .push(Token::EQ)
            .append(SQL::param(Value(2)));
        let (text, params) = sql.build();
        assert_eq!(text, r#""t"."a" = $1 AND "t"."b" = $2"#);
        assert_eq!(params, vec![&Value(1), &Value(2)]);
    }

    #[test]
    fn function_calls_and_casts() {
        let args = SQL::column("t", "c")
            .push(SQLChunk::raw_static("::json"))
            .push(Token::COMMA)
            .append(SQL::param(Value(1)));
        let sql = SQL::func("json_extract_path_text", args);
        assert_eq!(sql.sql(), r#"json_extract_path_text("t"."c"::json, $1)"#);

        let cast: SQL<'_, Value> = SQL::token(Token::CAST)
            .push(Token::LPAREN)
            .append(SQL::ident("x"))
            .push(Token::AS)
            .push(SQLChunk::raw_static("numeric"))
            .push(Token::RPAREN);
        assert_eq!(cast.sql(), r#"CAST("x" AS numeric)"#);
    }

    #[test]
    fn array_constructor() {
        let sql: SQL<'_, Value> = SQL::token(Token::ARRAY)
            .push(Token::LBRACKET)
            .append(SQL::param_list([Value(1), Value(2)]))
            .push(Token::RBRACKET);
        assert_eq!(sql.sql(), "ARRAY[$1, $2]");
    }

    #[test]
    fn identifiers_escape_quotes() {
        let sql: SQL<'_, Value> = SQL::ident(r#"we"ird"#);
        assert_eq!(sql.sql(), r#""we""ird""#);
    }

    #[test]
    fn into_parts_owns_values() {
        let sql: SQL<'_, Value> = SQL::param_list([Value(7), Value(8)]).parens();
        let (text, params) = sql.into_parts();
        assert_eq!(text, "($1, $2)");
        assert_eq!(params, vec![Value(7), Value(8)]);
    }

    #[test]
    fn raw_subquery_detection() {
        let sub: SQL<'_, Value> = SQL::raw("select id from users");
        assert!(sub.is_subquery());
        assert!(!SQL::<Value>::raw("1=0").is_subquery());
    }
}
