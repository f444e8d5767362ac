#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// The `Display` text is the bare message. Callers that know where the line
/// came from prefix it with the source name, line and column, see
/// [`crate::session`].
pub enum ParseError {
    /// Found a token or character that cannot appear at this position.
    UnexpectedToken {
        /// The offending source text.
        token:  String,
        /// The 1-based column where the token starts.
        column: usize,
    },
    /// The input ended while a `(` was still open.
    ExpectedClosingParen {
        /// The 1-based column of the unmatched `(`.
        column: usize,
    },
    /// Groups were nested deeper than the parser accepts.
    NestingTooDeep {
        /// The deepest nesting level allowed.
        limit:  usize,
        /// The 1-based column of the first `(` past the limit.
        column: usize,
    },
}

impl ParseError {
    /// Returns the column the diagnostic points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::ExpectedClosingParen { column }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, .. } => write!(f, "Unexpected token: '{token}'."),
            Self::ExpectedClosingParen { .. } => {
                write!(f, "Expected closing parenthesis ')' for this '(' but none found.")
            },
            Self::NestingTooDeep { limit, .. } => {
                write!(f, "Expressions nested deeper than {limit} levels are not supported.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
