/// Parsing errors.
///
/// Defines the diagnostics produced while tokenizing and parsing an input
/// line. Parse errors never become values: the diagnostic text is shown to the
/// user as is and the line is not evaluated.
pub mod parse_error;
/// Evaluation errors.
///
/// The closed set of failures that can happen while reading or evaluating a
/// value tree, such as division by zero or a malformed number literal. These
/// are carried as `Value::Error` values rather than returned as `Err`.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
