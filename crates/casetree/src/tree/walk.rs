use super::{ContextId, ContextTree, TestContext};

/// Pre-order iterator over a context and its descendants.
///
/// Siblings are visited in declaration order.
pub struct Walk<'t> {
    tree: &'t ContextTree,
    stack: Vec<ContextId>,
}

impl<'t> Walk<'t> {
    pub(super) fn new(tree: &'t ContextTree, start: ContextId) -> Self {
        Walk {
            tree,
            stack: vec![start],
        }
    }
}

impl<'t> Iterator for Walk<'t> {
    type Item = TestContext<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack
            .extend(self.tree.data(id).contexts.iter().rev().copied());
        Some(self.tree.context(id))
    }
}
