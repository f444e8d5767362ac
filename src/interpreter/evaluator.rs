/// Core evaluation logic.
///
/// Reduces a value tree to a single value: children are evaluated left to
/// right, the first error wins, and an S-expression headed by a symbol is
/// handed to the builtin dispatcher.
pub mod core;

/// Builtin operator evaluation.
///
/// Defines the closed set of arithmetic and comparison operators and folds an
/// evaluated operand list under one of them.
pub mod builtin;
