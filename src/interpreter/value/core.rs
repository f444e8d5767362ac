use std::str::FromStr;

use crate::{
    error::EvalError,
    interpreter::value::{sexpr::SExpr, symbol::Symbol},
};

/// Represents a runtime value in the interpreter.
///
/// Values form a tree: an `SExpr` exclusively owns its children and nothing
/// is ever shared between two owners, so dropping the root frees the whole
/// tree exactly once.
#[derive(Debug, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Number(i64),
    /// A failure carried as a value, holding its message text.
    Error(String),
    /// A symbol in operator position, such as `+` or `max`.
    Symbol(Symbol),
    /// A parenthesized, ordered list of values.
    SExpr(SExpr),
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Self::Error(error.message().to_string())
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<SExpr> for Value {
    fn from(list: SExpr) -> Self {
        Self::SExpr(list)
    }
}

impl Value {
    /// Builds an error value with the given message.
    ///
    /// # Example
    /// ```
    /// use bblisp::interpreter::value::core::Value;
    ///
    /// let v = Value::error("division by zero");
    /// assert_eq!(v.to_string(), "Error: division by zero");
    /// ```
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Builds a symbol value from its name.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    /// Builds an empty S-expression.
    #[must_use]
    pub const fn sexpr() -> Self {
        Self::SExpr(SExpr::new())
    }

    /// Returns `true` if the value is an `Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the number held by the value, if it is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromStr for Value {
    type Err = EvalError;

    /// Parses the printed form of an atom back into a value.
    ///
    /// Integers become `Number`, text of the form `Error: <message>` becomes
    /// `Error`, and any other single word becomes a `Symbol`. S-expressions
    /// go through the full parser instead.
    ///
    /// # Errors
    /// Returns `EvalError::InvalidNumber` for an integer literal that does not
    /// fit in an `i64`, and `EvalError::UnknownSyntaxNode` for empty text or
    /// text containing whitespace or parentheses outside an error message.
    ///
    /// # Example
    /// ```
    /// use bblisp::interpreter::value::core::Value;
    ///
    /// assert_eq!("-42".parse(), Ok(Value::Number(-42)));
    /// assert_eq!("Error: invalid number".parse(), Ok(Value::error("invalid number")));
    /// assert_eq!("min".parse::<Value>().unwrap().to_string(), "min");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(message) = s.strip_prefix("Error: ") {
            return Ok(Self::error(message));
        }

        let digits = s.strip_prefix('-').unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse().map(Self::Number).map_err(|_| EvalError::InvalidNumber);
        }

        if s.is_empty() || s.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
            return Err(EvalError::UnknownSyntaxNode);
        }

        Ok(Self::symbol(s))
    }
}
