/// The `Value` enum and its constructors.
///
/// Declares the four kinds of runtime value (number, error, symbol and
/// S-expression) together with conversions from evaluation errors and the
/// atom parser used to re-read printed values.
pub mod core;
/// Rendering of values to text.
///
/// Implements `Display` for every value kind. Numbers print in decimal, errors
/// as `Error: <message>`, symbols by name and S-expressions as their
/// space-separated children wrapped in parentheses.
pub mod print;
/// Owned, ordered child lists.
///
/// Defines `SExpr`, the container that exclusively owns its children and
/// offers the append, pop and take operations used by the reader and the
/// evaluator.
pub mod sexpr;
/// Operator symbols.
///
/// Defines `Symbol`, which resolves its name against the builtin operator
/// table once at construction time.
pub mod symbol;
