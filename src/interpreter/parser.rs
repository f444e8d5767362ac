use std::iter::Peekable;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        syntax::{ANCHOR_TAG, CHAR_TAG, NUMBER_TAG, ParseNode, ROOT_TAG, SEXPR_TAG, SYMBOL_TAG},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest group nesting accepted by [`parse`].
///
/// Reading, evaluating and dropping a tree all recurse once per level, so the
/// cap keeps a pathological line from exhausting the stack.
pub const MAX_NESTING: usize = 256;

/// Splits a line into tokens paired with their 1-based column.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for any text that is not a number,
/// an operator symbol, a parenthesis or whitespace.
///
/// # Example
/// ```
/// use bblisp::interpreter::{lexer::Token, parser::tokenize};
///
/// let tokens = tokenize("(- 5)").unwrap();
/// assert_eq!(tokens[1], (Token::Symbol("-".to_string()), 2));
/// assert_eq!(tokens[2], (Token::Number("5".to_string()), 4));
///
/// assert!(tokenize("(+ 1 x)").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     column });
        }
    }

    Ok(tokens)
}

/// Parses a full input line into a generic parse tree.
///
/// The root node is tagged [`ROOT_TAG`] and holds a start anchor, every
/// top-level expression, and an end anchor. Numbers and symbols become leaves;
/// each parenthesized group becomes a node that keeps its `(` and `)`
/// delimiters as children.
///
/// Grammar:
/// ```text
///     line  := expr*
///     expr  := number | symbol | sexpr
///     sexpr := '(' expr* ')'
/// ```
///
/// # Errors
/// - `UnexpectedToken` for unknown characters or an unmatched `)`.
/// - `ExpectedClosingParen` if the line ends inside a group.
/// - `NestingTooDeep` if groups nest deeper than [`MAX_NESTING`].
///
/// # Example
/// ```
/// use bblisp::interpreter::{parser::parse, syntax::SyntaxNode};
///
/// let tree = parse("(+ 1 2)").unwrap();
/// assert_eq!(tree.tag(), ">");
/// // start anchor, the group, end anchor
/// assert_eq!(tree.children().len(), 3);
/// // `(`, `+`, `1`, `2`, `)`
/// assert_eq!(tree.children()[1].children().len(), 5);
/// ```
pub fn parse(source: &str) -> ParseResult<ParseNode> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut children = vec![ParseNode::leaf(ANCHOR_TAG, "")];
    while let Some(token) = iter.next() {
        children.push(parse_expr(token, &mut iter, 0)?);
    }
    children.push(ParseNode::leaf(ANCHOR_TAG, ""));

    Ok(ParseNode::branch(ROOT_TAG, children))
}

/// Parses the expression starting at `token`, which has already been taken
/// from the stream. `depth` counts the groups enclosing it.
fn parse_expr<'a, I>(token: &'a (Token, usize),
                     tokens: &mut Peekable<I>,
                     depth: usize)
                     -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match token {
        (Token::Number(text), _) => Ok(ParseNode::leaf(format!("expr|{NUMBER_TAG}"), text.as_str())),
        (Token::Symbol(text), _) => Ok(ParseNode::leaf(format!("expr|{SYMBOL_TAG}"), text.as_str())),
        (Token::LParen, column) => parse_sexpr(tokens, *column, depth + 1),
        (tok @ Token::RParen, column) => {
            Err(ParseError::UnexpectedToken { token:  tok.text().to_string(),
                                              column: *column, })
        },
    }
}

/// Parses the rest of a group whose `(` sits at `column`, `depth` levels deep.
fn parse_sexpr<'a, I>(tokens: &mut Peekable<I>, column: usize, depth: usize) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                column });
    }

    let mut children = vec![ParseNode::leaf(CHAR_TAG, "(")];

    loop {
        match tokens.next() {
            Some((Token::RParen, _)) => {
                children.push(ParseNode::leaf(CHAR_TAG, ")"));
                return Ok(ParseNode::branch(format!("expr|{SEXPR_TAG}"), children));
            },
            Some(token) => children.push(parse_expr(token, tokens, depth)?),
            None => return Err(ParseError::ExpectedClosingParen { column }),
        }
    }
}
