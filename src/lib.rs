//! # bblisp
//!
//! bblisp is a minimal S-expression calculator written in Rust.
//! It reads a line such as `(+ 1 (* 2 3))`, evaluates it by recursive
//! reduction over integer arithmetic and comparison operators, and prints the
//! result. Failures such as division by zero are ordinary values that travel
//! up the tree and are printed like any other result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::eval, parser::parse, reader::read, value::core::Value},
    session::{STDIN_ORIGIN, run_line_at},
};

/// Provides the error types for parsing and evaluation.
///
/// Parse errors are returned as `Err` and shown to the user verbatim.
/// Evaluation errors are a closed enumeration whose messages become
/// `Value::Error` values.
///
/// # Responsibilities
/// - Defines `ParseError` for malformed input lines.
/// - Defines `EvalError`, the taxonomy of failures carried as values.
pub mod error;
/// Ties together lexing, parsing, reading, evaluation and printing.
///
/// # Responsibilities
/// - Tokenizes and parses an input line into a generic parse tree.
/// - Reads the parse tree into a value tree.
/// - Evaluates value trees and applies builtin operators.
/// - Renders values to text.
pub mod interpreter;
/// Drives the read-eval-print loop over a stream of input lines.
///
/// # Responsibilities
/// - Reads lines from any `BufRead`, tolerating invalid UTF-8.
/// - Writes one output line per input line.
/// - Prefixes parse diagnostics with the source name, line and column.
pub mod session;

/// Parses, reads and evaluates one input line.
///
/// # Errors
/// Returns the parser's diagnostic if the line is not well formed. Evaluation
/// itself never fails with `Err`: failures come back as `Value::Error`.
///
/// # Examples
/// ```
/// use bblisp::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("(+ 1 2 3)").unwrap(), Value::Number(6));
/// assert_eq!(evaluate("(/ 4 0)").unwrap(), Value::error("division by zero"));
///
/// // Not a valid line at all.
/// assert!(evaluate("(+ 1 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, ParseError> {
    let tree = parse(source)?;
    Ok(eval(read(&tree)))
}

/// Runs one read-eval-print step and writes the output line to `out`.
///
/// The rendered result is written followed by a newline. If the line does not
/// parse, the parse diagnostic is written instead, located at line 1 of
/// `<stdin>`.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// bblisp::run_line("(max 4 2 7)", &mut out).unwrap();
/// bblisp::run_line("()", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "7\n()\n");
/// ```
pub fn run_line<W: Write>(source: &str, out: &mut W) -> std::io::Result<()> {
    run_line_at(source, STDIN_ORIGIN, 1, out)
}
