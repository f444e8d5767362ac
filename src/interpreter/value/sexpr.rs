use crate::interpreter::value::core::Value;

/// An ordered list of values owned by an S-expression.
///
/// Every child has exactly one owner: adding a value moves it into the list
/// and [`SExpr::pop`] moves it back out. Dropping the list drops its children
/// first, so a tree is always freed exactly once.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SExpr {
    children: Vec<Value>,
}

impl SExpr {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { children: Vec::new() }
    }

    /// Appends `child` to the end of the list, taking ownership of it.
    ///
    /// # Example
    /// ```
    /// use bblisp::interpreter::value::{core::Value, sexpr::SExpr};
    ///
    /// let mut list = SExpr::new();
    /// list.add(Value::Number(1));
    /// list.add(Value::Number(2));
    ///
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn add(&mut self, child: Value) {
        self.children.push(child);
    }

    /// Removes the child at `index` and hands ownership to the caller.
    ///
    /// The children after `index` shift down by one; the list itself stays
    /// alive, possibly empty.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Example
    /// ```
    /// use bblisp::interpreter::value::{core::Value, sexpr::SExpr};
    ///
    /// let mut list: SExpr = [Value::Number(1), Value::Number(2), Value::Number(3)].into_iter()
    ///                                                                            .collect();
    ///
    /// assert_eq!(list.pop(0), Value::Number(1));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(0), Some(&Value::Number(2)));
    /// ```
    pub fn pop(&mut self, index: usize) -> Value {
        self.children.remove(index)
    }

    /// Removes the child at `index` and drops the rest of the list.
    ///
    /// Used whenever a list collapses to one of its own elements.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the list has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.children.get(index)
    }

    /// Iterates over the children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.children.iter()
    }
}

impl FromIterator<Value> for SExpr {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self { children: iter.into_iter().collect() }
    }
}

impl IntoIterator for SExpr {
    type IntoIter = std::vec::IntoIter<Value>;
    type Item = Value;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a SExpr {
    type IntoIter = std::slice::Iter<'a, Value>;
    type Item = &'a Value;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
