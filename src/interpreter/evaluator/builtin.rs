use crate::{
    error::EvalError,
    interpreter::value::{core::Value, sexpr::SExpr, symbol::Symbol},
};

/// The builtin operators.
///
/// Each operator folds its operands from left to right, using the first
/// operand as the starting accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`, or negation when given a single operand.
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `min`
    Min,
    /// `max`
    Max,
}

/// Name table used to resolve symbols.
const OPERATORS: [(&str, Operator); 6] = [("+", Operator::Add),
                                          ("-", Operator::Sub),
                                          ("*", Operator::Mul),
                                          ("/", Operator::Div),
                                          ("min", Operator::Min),
                                          ("max", Operator::Max)];

impl Operator {
    /// Looks up an operator by its source name.
    ///
    /// # Example
    /// ```
    /// use bblisp::interpreter::evaluator::builtin::Operator;
    ///
    /// assert_eq!(Operator::from_name("*"), Some(Operator::Mul));
    /// assert_eq!(Operator::from_name("pow"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        OPERATORS.iter().find(|(n, _)| *n == name).map(|(_, op)| *op)
    }

    /// Returns the operator's source name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Combines the accumulator with the next operand.
    ///
    /// Arithmetic wraps on overflow. `Min` and `Max` keep the accumulator on
    /// ties.
    ///
    /// # Errors
    /// Returns `EvalError::DivisionByZero` when dividing by zero.
    pub const fn apply(self, acc: i64, operand: i64) -> Result<i64, EvalError> {
        Ok(match self {
            Self::Add => acc.wrapping_add(operand),
            Self::Sub => acc.wrapping_sub(operand),
            Self::Mul => acc.wrapping_mul(operand),
            Self::Div => {
                if operand == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                acc.wrapping_div(operand)
            },
            Self::Min => {
                if operand < acc {
                    operand
                } else {
                    acc
                }
            },
            Self::Max => {
                if operand > acc {
                    operand
                } else {
                    acc
                }
            },
        })
    }

    /// Folds a list of numbers under this operator.
    ///
    /// A lone operand under `Sub` is negated. Folding stops at the first
    /// error; the remaining operands are never looked at.
    ///
    /// # Errors
    /// Returns `EvalError::NoOperands` for an empty list and
    /// `EvalError::DivisionByZero` when a divisor is zero.
    ///
    /// # Example
    /// ```
    /// use bblisp::{error::EvalError, interpreter::evaluator::builtin::Operator};
    ///
    /// assert_eq!(Operator::Add.fold(&[1, 2, 3]), Ok(6));
    /// assert_eq!(Operator::Sub.fold(&[5]), Ok(-5));
    /// assert_eq!(Operator::Div.fold(&[4, 0, 2]), Err(EvalError::DivisionByZero));
    /// ```
    pub fn fold(self, operands: &[i64]) -> Result<i64, EvalError> {
        let Some((&first, rest)) = operands.split_first() else {
            return Err(EvalError::NoOperands);
        };

        if self == Self::Sub && rest.is_empty() {
            return Ok(first.wrapping_neg());
        }

        rest.iter().try_fold(first, |acc, &operand| self.apply(acc, operand))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Applies the operator named by `symbol` to an evaluated operand list.
///
/// Every operand must be a `Number`; otherwise the whole list is dropped and a
/// "cannot operate on non-number" error is returned. An unbound symbol yields
/// "unknown operator". The operand list is consumed in every case.
///
/// # Example
/// ```
/// use bblisp::interpreter::{
///     evaluator::builtin::builtin_op,
///     value::{core::Value, sexpr::SExpr, symbol::Symbol},
/// };
///
/// let args: SExpr = [4, 2, 7].into_iter().map(Value::Number).collect();
/// assert_eq!(builtin_op(&Symbol::new("min"), args), Value::Number(2));
///
/// let args: SExpr = [Value::Number(1), Value::symbol("+")].into_iter().collect();
/// assert_eq!(builtin_op(&Symbol::new("+"), args), Value::error("cannot operate on non-number"));
/// ```
#[must_use]
pub fn builtin_op(symbol: &Symbol, args: SExpr) -> Value {
    tracing::trace!(operator = %symbol, operands = args.len(), "applying builtin");

    let operands = args.into_iter()
                       .map(|value| value.as_number().ok_or(EvalError::NonNumberOperand))
                       .collect::<Result<Vec<_>, _>>();

    let result = operands.and_then(|operands| {
                             let op = symbol.operator().ok_or(EvalError::UnknownOperator)?;
                             op.fold(&operands)
                         });

    match result {
        Ok(n) => Value::Number(n),
        Err(error) => error.into(),
    }
}
