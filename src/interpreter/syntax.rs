/// Tag of the node that wraps a whole input line.
pub const ROOT_TAG: &str = ">";
/// Substring marking a number literal leaf.
pub const NUMBER_TAG: &str = "number";
/// Substring marking a symbol leaf.
pub const SYMBOL_TAG: &str = "symbol";
/// Substring marking a parenthesized group.
pub const SEXPR_TAG: &str = "sexpr";
/// Tag of a delimiter token such as `(` or `)`.
pub const CHAR_TAG: &str = "char";
/// Tag of a start or end-of-input anchor.
pub const ANCHOR_TAG: &str = "regex";

/// A node of a generic parse tree.
///
/// This is everything the reader needs from a parser: a tag describing which
/// grammar rule produced the node, the literal text it matched, and its
/// children in source order. Tags are matched by substring, so a rule tagged
/// `expr|number` counts as a number.
pub trait SyntaxNode: Sized {
    /// The grammar rule tag.
    fn tag(&self) -> &str;
    /// The matched source text. Empty for interior nodes.
    fn contents(&self) -> &str;
    /// The child nodes in source order.
    fn children(&self) -> &[Self];
}

/// The parse tree node produced by [`crate::interpreter::parser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    /// The grammar rule tag.
    pub tag:      String,
    /// The matched source text.
    pub contents: String,
    /// The child nodes in source order.
    pub children: Vec<Self>,
}

impl ParseNode {
    /// Creates a node with no children.
    ///
    /// # Example
    /// ```
    /// use bblisp::interpreter::syntax::{NUMBER_TAG, ParseNode, SyntaxNode};
    ///
    /// let leaf = ParseNode::leaf(NUMBER_TAG, "12");
    /// assert_eq!(leaf.contents(), "12");
    /// assert!(leaf.children().is_empty());
    /// ```
    #[must_use]
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { tag:      tag.into(),
               contents: contents.into(),
               children: Vec::new(), }
    }

    /// Creates an interior node with the given children.
    #[must_use]
    pub fn branch(tag: impl Into<String>, children: Vec<Self>) -> Self {
        Self { tag: tag.into(),
               contents: String::new(),
               children }
    }
}

impl SyntaxNode for ParseNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn contents(&self) -> &str {
        &self.contents
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
