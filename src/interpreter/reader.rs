use crate::{
    error::EvalError,
    interpreter::{
        syntax::{ANCHOR_TAG, NUMBER_TAG, ROOT_TAG, SEXPR_TAG, SYMBOL_TAG, SyntaxNode},
        value::{core::Value, sexpr::SExpr, symbol::Symbol},
    },
};

/// Translates a parse tree node into a value tree.
///
/// - A number leaf becomes a `Number`, or `Error("invalid number")` if the
///   literal is malformed or out of range.
/// - A symbol leaf becomes a `Symbol` with the leaf's text.
/// - The root node and every group become an `SExpr` of their children read
///   in order, skipping parentheses, anchor tokens and whitespace-only
///   leaves.
///
/// Any other node reads as `Error("unknown syntax node")`.
///
/// # Example
/// ```
/// use bblisp::interpreter::{parser::parse, reader::read};
///
/// let value = read(&parse("(max 1 2)").unwrap());
/// assert_eq!(value.to_string(), "((max 1 2))");
///
/// let value = read(&parse("99999999999999999999").unwrap());
/// assert_eq!(value.to_string(), "(Error: invalid number)");
/// ```
#[must_use]
pub fn read<N: SyntaxNode>(node: &N) -> Value {
    let tag = node.tag();

    if tag.contains(NUMBER_TAG) {
        return read_number(node.contents());
    }
    if tag.contains(SYMBOL_TAG) {
        return Symbol::new(node.contents()).into();
    }
    if tag != ROOT_TAG && !tag.contains(SEXPR_TAG) {
        tracing::trace!(tag, "unreadable syntax node");
        return EvalError::UnknownSyntaxNode.into();
    }

    node.children()
        .iter()
        .filter(|child| !is_skipped(*child))
        .map(read)
        .collect::<SExpr>()
        .into()
}

/// Reads a base-10 integer literal.
///
/// # Example
/// ```
/// use bblisp::interpreter::{reader::read_number, value::core::Value};
///
/// assert_eq!(read_number("-17"), Value::Number(-17));
/// assert_eq!(read_number("9223372036854775808"), Value::error("invalid number"));
/// ```
#[must_use]
pub fn read_number(text: &str) -> Value {
    text.parse::<i64>()
        .map_or_else(|_| EvalError::InvalidNumber.into(), Value::Number)
}

/// Delimiters, anchors and whitespace leaves carry no value of their own.
fn is_skipped<N: SyntaxNode>(node: &N) -> bool {
    let contents = node.contents();

    matches!(contents, "(" | ")")
    || node.tag() == ANCHOR_TAG
    || (node.children().is_empty() && !contents.is_empty() && contents.trim().is_empty())
}
