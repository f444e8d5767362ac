/// The evaluator module reduces value trees to results.
///
/// Evaluation is a recursive reduction: every S-expression is replaced by
/// the result of applying its head operator to its evaluated operands, and
/// errors are ordinary values that propagate to the outermost level.
pub mod evaluator;
/// The lexer module tokenizes an input line.
///
/// Recognizes integer literals, the builtin operator symbols and
/// parentheses, and skips whitespace.
pub mod lexer;
/// The parser module builds a generic parse tree from tokens.
pub mod parser;
/// The reader module turns a parse tree into a value tree.
///
/// The reader works against the [`syntax::SyntaxNode`] capability rather
/// than a concrete parser, so any tree with tags, contents and children can
/// be read.
pub mod reader;
/// The parse tree capability and the concrete node type.
pub mod syntax;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines the `Value` enum and the owned `SExpr` child list.
/// - Resolves symbols to builtin operators.
/// - Renders values to text.
pub mod value;
