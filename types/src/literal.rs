//! Character-level scanner for PostgreSQL composite literals.
//!
//! Array literals look like `{a,"b,c",NULL}`: elements are separated by
//! top-level commas, may be double-quoted, and inside quotes a backslash
//! escapes the next character. The scanner is deliberately permissive: an
//! unterminated quote never fails, whatever was collected is flushed as the
//! last token. Nested arrays are not supported.

use std::borrow::Cow;

/// Unquoted sentinel PostgreSQL uses for an absent array element.
pub const NULL_SENTINEL: &str = "NULL";

/// Splits an array literal (with or without its surrounding braces) into raw
/// element tokens.
///
/// - `""` and `"{}"` yield no tokens
/// - quotes are removed and backslash escapes resolved
/// - whitespace around unquoted tokens is discarded
/// - an unquoted `NULL` becomes an empty token; the scanner has no separate
///   null representation, so `NULL` and `""` are indistinguishable afterwards
///
/// ```
/// use pgext_types::literal::tokenize;
///
/// assert_eq!(tokenize(r#"{"a,b","c"}"#), vec!["a,b", "c"]);
/// assert_eq!(tokenize("{NULL,x}"), vec!["", "x"]);
/// assert!(tokenize("{}").is_empty());
/// ```
pub fn tokenize(body: &str) -> Vec<String> {
    let body = body.trim();
    let inner = body
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(body);

    if inner.trim().is_empty() {
        return Vec::new();
    }

    let mut scanner = Scanner::default();
    for ch in inner.chars() {
        scanner.feed(ch);
    }
    scanner.finish()
}

#[derive(Default)]
struct Scanner {
    tokens: Vec<String>,
    current: String,
    // whitespace seen after content; only kept if more content follows
    pending: String,
    started: bool,
    quoted: bool,
    in_quotes: bool,
    escaped: bool,
}

impl Scanner {
    fn feed(&mut self, ch: char) {
        if self.in_quotes {
            if self.escaped {
                self.current.push(ch);
                self.escaped = false;
                return;
            }
            match ch {
                '\\' => self.escaped = true,
                '"' => self.in_quotes = false,
                _ => self.current.push(ch),
            }
            return;
        }

        match ch {
            '"' => {
                self.flush_pending();
                self.in_quotes = true;
                self.quoted = true;
                self.started = true;
            }
            ',' => self.flush(),
            c if c.is_whitespace() => {
                if self.started {
                    self.pending.push(c);
                }
            }
            c => {
                self.flush_pending();
                self.current.push(c);
                self.started = true;
            }
        }
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            self.current.push_str(&self.pending);
            self.pending.clear();
        }
    }

    fn flush(&mut self) {
        let mut token = std::mem::take(&mut self.current);
        if !self.quoted && token == NULL_SENTINEL {
            token.clear();
        }
        self.tokens.push(token);
        self.pending.clear();
        self.started = false;
        self.quoted = false;
        self.in_quotes = false;
        self.escaped = false;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.tokens
    }
}

/// Splits `body` at the first comma that is not inside double quotes.
///
/// Both halves are returned untrimmed and still quoted. Used to separate the
/// lower and upper bound of a range literal.
pub fn split_first_top_level(body: &str) -> Option<(&str, &str)> {
    let mut in_quotes = false;
    let mut escaped = false;
    for (idx, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => return Some((&body[..idx], &body[idx + 1..])),
            _ => {}
        }
    }
    None
}

/// Removes one level of surrounding double quotes and resolves backslash
/// escapes. Text that is not quoted is returned as is.
pub fn unquote(token: &str) -> Cow<'_, str> {
    let Some(inner) = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return Cow::Borrowed(token);
    };

    if !inner.contains('\\') && !inner.contains("\"\"") {
        return Cow::Borrowed(inner);
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            // range literals double embedded quotes
            '"' if chars.peek() == Some(&'"') => {
                chars.next();
                out.push('"');
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Whether `text` has to be quoted to survive inside a composite literal.
pub fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.eq_ignore_ascii_case(NULL_SENTINEL)
        || text.chars().any(|c| {
            matches!(c, ',' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\\') || c.is_whitespace()
        })
}

/// Wraps `text` in double quotes, escaping backslashes and quotes.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if matches!(ch, '\\' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("{}").is_empty());
        assert!(tokenize("  { }  ").is_empty());
    }

    #[test]
    fn quoted_commas_and_braces_are_literal() {
        assert_eq!(tokenize(r#"{"a,b","c"}"#), vec!["a,b", "c"]);
        assert_eq!(tokenize(r#"{"{x}",y}"#), vec!["{x}", "y"]);
    }

    #[test]
    fn backslash_escapes_inside_quotes() {
        assert_eq!(
            tokenize(r#"{"say \"hi\"","back\\slash"}"#),
            vec![r#"say "hi""#, r"back\slash"]
        );
    }

    #[test]
    fn unquoted_null_becomes_empty() {
        assert_eq!(tokenize("{NULL,x}"), vec!["", "x"]);
        // only the exact, unquoted sentinel
        assert_eq!(tokenize(r#"{"NULL",null}"#), vec!["NULL", "null"]);
    }

    #[test]
    fn whitespace_is_trimmed_around_unquoted_tokens() {
        assert_eq!(tokenize("{ 1 , 2 ,3 }"), vec!["1", "2", "3"]);
        assert_eq!(tokenize("{hello world, x}"), vec!["hello world", "x"]);
        assert_eq!(tokenize(r#"{ " padded " }"#), vec![" padded "]);
    }

    #[test]
    fn unterminated_quote_flushes_remaining_text() {
        assert_eq!(tokenize(r#"{a,"bc,d"#), vec!["a", "bc,d"]);
    }

    #[test]
    fn body_without_braces_is_accepted() {
        assert_eq!(tokenize("1,2"), vec!["1", "2"]);
    }

    #[test]
    fn split_respects_quotes() {
        assert_eq!(split_first_top_level("1,5"), Some(("1", "5")));
        assert_eq!(
            split_first_top_level(r#""a,b",c"#),
            Some((r#""a,b""#, "c"))
        );
        assert_eq!(split_first_top_level("15"), None);
    }

    #[test]
    fn unquote_resolves_escapes() {
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote(r#""2020-01-01 00:00:00""#), "2020-01-01 00:00:00");
        assert_eq!(unquote(r#""a\"b""#), r#"a"b"#);
        assert_eq!(unquote(r#""a""b""#), r#"a"b"#);
    }

    #[test]
    fn quoting_rules() {
        assert!(!needs_quotes("42"));
        assert!(needs_quotes(""));
        assert!(needs_quotes("null"));
        assert!(needs_quotes("2024-01-01 10:00:00"));
        assert!(needs_quotes("a,b"));
    }

    #[test]
    fn quote_escapes_specials() {
        assert_eq!(quote(r#"a"b\c"#), r#""a\"b\\c""#);
    }
}
