#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents every failure that can occur while reading or evaluating a value
/// tree.
///
/// An `EvalError` is never returned as `Err`. It is turned into a
/// `Value::Error` carrying [`EvalError::message`] and flows through evaluation
/// like any other value.
pub enum EvalError {
    /// A number literal was malformed or does not fit in an `i64`.
    InvalidNumber,
    /// A builtin operator received an operand that is not a number.
    NonNumberOperand,
    /// A division had a zero divisor.
    DivisionByZero,
    /// An S-expression with two or more elements did not start with a symbol.
    MissingOperatorSymbol,
    /// The head symbol does not name a builtin operator.
    UnknownOperator,
    /// A builtin operator was applied to an empty operand list.
    NoOperands,
    /// The reader met a syntax node whose tag it does not understand.
    UnknownSyntaxNode,
}

impl EvalError {
    /// Returns the message text stored in the resulting `Value::Error`.
    ///
    /// # Example
    /// ```
    /// use bblisp::error::EvalError;
    ///
    /// assert_eq!(EvalError::DivisionByZero.message(), "division by zero");
    /// ```
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidNumber => "invalid number",
            Self::NonNumberOperand => "cannot operate on non-number",
            Self::DivisionByZero => "division by zero",
            Self::MissingOperatorSymbol => "S-expression does not start with symbol",
            Self::UnknownOperator => "unknown operator",
            Self::NoOperands => "operator needs at least one operand",
            Self::UnknownSyntaxNode => "unknown syntax node",
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EvalError {}
