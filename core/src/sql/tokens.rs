/// SQL keywords and punctuation used by the expression builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Punctuation
    LPAREN,
    RPAREN,
    LBRACKET,
    RBRACKET,
    COMMA,
    DOT,

    // Comparison
    EQ,
    NE,
    LT,
    GT,
    LE,
    GE,

    // Keywords
    AND,
    OR,
    NOT,
    IN,
    BETWEEN,
    LIKE,
    IS,
    NULL,
    EXISTS,
    CAST,
    AS,
    ANY,
    ARRAY,
    SELECT,
}

impl Token {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Token::LPAREN => "(",
            Token::RPAREN => ")",
            Token::LBRACKET => "[",
            Token::RBRACKET => "]",
            Token::COMMA => ",",
            Token::DOT => ".",
            Token::EQ => "=",
            Token::NE => "<>",
            Token::LT => "<",
            Token::GT => ">",
            Token::LE => "<=",
            Token::GE => ">=",
            Token::AND => "AND",
            Token::OR => "OR",
            Token::NOT => "NOT",
            Token::IN => "IN",
            Token::BETWEEN => "BETWEEN",
            Token::LIKE => "LIKE",
            Token::IS => "IS",
            Token::NULL => "NULL",
            Token::EXISTS => "EXISTS",
            Token::CAST => "CAST",
            Token::AS => "AS",
            Token::ANY => "ANY",
            Token::ARRAY => "ARRAY",
            Token::SELECT => "SELECT",
        }
    }

    /// Keywords written directly against a following `(` or `[`.
    pub(crate) const fn is_call_like(&self) -> bool {
        matches!(self, Token::CAST | Token::ANY | Token::ARRAY)
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
