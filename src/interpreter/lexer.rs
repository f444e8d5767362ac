use logos::Logos;

/// Represents a lexical token in an input line.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-7`.
    ///
    /// The text is kept as is; range checking happens when the literal is
    /// read into a value.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator symbols: `+`, `-`, `*`, `/`, `min` and `max`.
    #[token("+", |lex| lex.slice().to_string())]
    #[token("-", |lex| lex.slice().to_string())]
    #[token("*", |lex| lex.slice().to_string())]
    #[token("/", |lex| lex.slice().to_string())]
    #[token("min", |lex| lex.slice().to_string())]
    #[token("max", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns the source text of the token.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Number(text) | Self::Symbol(text) => text,
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}
