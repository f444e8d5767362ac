use crate::{
    error::EvalError,
    interpreter::{
        evaluator::builtin::builtin_op,
        value::{core::Value, sexpr::SExpr},
    },
};

/// Evaluates a value.
///
/// S-expressions are reduced with [`eval_sexpr`]. Numbers, errors and
/// symbols evaluate to themselves.
///
/// # Example
/// ```
/// use bblisp::interpreter::{
///     evaluator::core::eval,
///     value::{core::Value, sexpr::SExpr},
/// };
///
/// let list: SExpr = [Value::symbol("*"), Value::Number(6), Value::Number(7)].into_iter()
///                                                                           .collect();
///
/// assert_eq!(eval(list.into()), Value::Number(42));
/// assert_eq!(eval(Value::Number(3)), Value::Number(3));
/// ```
#[must_use]
pub fn eval(value: Value) -> Value {
    match value {
        Value::SExpr(list) => eval_sexpr(list),
        other => other,
    }
}

/// Reduces an S-expression to a single value.
///
/// The steps are, in order:
/// - every child is evaluated, left to right;
/// - the first child that evaluated to an `Error` is returned and the rest of
///   the list is dropped;
/// - an empty list is returned unchanged;
/// - a single child is returned on its own;
/// - otherwise the head must be a symbol, and the remaining children are its
///   operands.
///
/// # Example
/// ```
/// use bblisp::interpreter::{
///     evaluator::core::eval_sexpr,
///     value::{core::Value, sexpr::SExpr},
/// };
///
/// assert_eq!(eval_sexpr(SExpr::new()), Value::sexpr());
///
/// let list: SExpr = [Value::Number(1), Value::Number(2)].into_iter().collect();
/// assert_eq!(eval_sexpr(list), Value::error("S-expression does not start with symbol"));
/// ```
#[must_use]
pub fn eval_sexpr(list: SExpr) -> Value {
    let mut list: SExpr = list.into_iter().map(eval).collect();

    if let Some(index) = list.iter().position(Value::is_error) {
        tracing::trace!(index, "error short-circuits evaluation");
        return list.take(index);
    }

    match list.len() {
        0 => return list.into(),
        1 => return list.take(0),
        _ => {},
    }

    match list.pop(0) {
        Value::Symbol(symbol) => builtin_op(&symbol, list),
        head => {
            tracing::trace!(%head, "head is not a symbol");
            EvalError::MissingOperatorSymbol.into()
        },
    }
}
