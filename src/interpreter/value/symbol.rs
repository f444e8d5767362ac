use crate::interpreter::evaluator::builtin::Operator;

/// A named token in operator position.
///
/// The name is resolved against the builtin operator table once, when the
/// symbol is built. Names outside the table are kept verbatim so they still
/// print as written; applying one yields an "unknown operator" error.
#[derive(Debug, PartialEq, Eq)]
pub enum Symbol {
    /// One of the builtin operators.
    Builtin(Operator),
    /// Any other name.
    Unbound(String),
}

impl Symbol {
    /// Builds a symbol from its source text.
    ///
    /// # Example
    /// ```
    /// use bblisp::interpreter::{evaluator::builtin::Operator, value::symbol::Symbol};
    ///
    /// assert_eq!(Symbol::new("max"), Symbol::Builtin(Operator::Max));
    /// assert_eq!(Symbol::new("foo"), Symbol::Unbound("foo".to_string()));
    /// ```
    #[must_use]
    pub fn new(name: &str) -> Self {
        Operator::from_name(name).map_or_else(|| Self::Unbound(name.to_string()), Self::Builtin)
    }

    /// Returns the symbol's literal name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(op) => op.name(),
            Self::Unbound(name) => name,
        }
    }

    /// Returns the builtin operator this symbol names, if any.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Builtin(op) => Some(*op),
            Self::Unbound(_) => None,
        }
    }
}
