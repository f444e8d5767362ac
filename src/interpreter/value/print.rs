use crate::interpreter::value::{core::Value, sexpr::SExpr, symbol::Symbol};

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::SExpr(list) => write!(f, "{list}"),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for SExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;

        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{value}")?;
        }

        write!(f, ")")
    }
}
