//! Borrowed views over tree nodes.

use std::fmt;

use casetree_decl::{Declaration, TestFn};

use super::{CaseHandle, ContextData, ContextId, ContextTree, TestBody, TestData, TestId, Walk};
use crate::requirements::{FeatureSupport, RequirementMode, Requirements};

/// A context node of a [`ContextTree`].
///
/// Views are `Copy` and compare equal when they address the same node of the
/// same tree.
#[derive(Copy, Clone)]
pub struct TestContext<'t> {
    tree: &'t ContextTree,
    id: ContextId,
}

impl<'t> TestContext<'t> {
    pub(super) fn new(tree: &'t ContextTree, id: ContextId) -> Self {
        TestContext { tree, id }
    }

    #[inline]
    fn data(self) -> &'t ContextData {
        self.tree.data(self.id)
    }

    pub fn id(self) -> ContextId {
        self.id
    }

    pub fn tree(self) -> &'t ContextTree {
        self.tree
    }

    pub fn name(self) -> &'t str {
        &self.data().name
    }

    /// Tests declared directly in this context, in declaration order.
    pub fn tests(self) -> impl ExactSizeIterator<Item = TestCase<'t>> + DoubleEndedIterator + 't {
        let tree = self.tree;
        self.data().tests.iter().map(move |&id| tree.test(id))
    }

    /// Child contexts, in declaration order.
    pub fn contexts(self) -> impl ExactSizeIterator<Item = TestContext<'t>> + DoubleEndedIterator + 't {
        let tree = self.tree;
        self.data().contexts.iter().map(move |&id| tree.context(id))
    }

    pub fn parent(self) -> Option<TestContext<'t>> {
        self.data().parent.map(|id| self.tree.context(id))
    }

    pub fn is_root(self) -> bool {
        self.data().parent.is_none()
    }

    /// This context's own `setUp` hook.
    pub fn set_up(self) -> Option<&'t TestFn> {
        self.data().set_up.as_ref()
    }

    /// This context's own `tearDown` hook.
    pub fn tear_down(self) -> Option<&'t TestFn> {
        self.data().tear_down.as_ref()
    }

    /// The `requiresSupportForAll` block, exactly as declared.
    pub fn requires_support_for_all(self) -> Option<&'t Declaration> {
        self.data().requires_support_for_all.as_ref()
    }

    /// The `requiresSupportForAny` block, exactly as declared.
    pub fn requires_support_for_any(self) -> Option<&'t Declaration> {
        self.data().requires_support_for_any.as_ref()
    }

    /// Requirement blocks declared on this context, `All` before `Any`.
    pub fn requirements(self) -> impl Iterator<Item = Requirements<'t>> + 't {
        let data = self.data();
        let all = data
            .requires_support_for_all
            .as_ref()
            .map(|block| Requirements::new(RequirementMode::All, block));
        let any = data
            .requires_support_for_any
            .as_ref()
            .map(|block| Requirements::new(RequirementMode::Any, block));
        all.into_iter().chain(any)
    }

    /// Handle to the originating test case, unique to this context.
    pub fn test_case(self) -> &'t CaseHandle {
        &self.data().case
    }

    /// Whether this context, or an enclosing one, was declared deferred.
    pub fn deferred(self) -> bool {
        self.data().deferred
    }

    /// Enclosing contexts, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = TestContext<'t>> + 't {
        std::iter::successors(self.parent(), |c| c.parent())
    }

    /// Number of enclosing contexts; the root has depth 0.
    pub fn depth(self) -> usize {
        self.ancestors().count()
    }

    /// Names from the root down to this context, joined by spaces.
    pub fn full_name(self) -> String {
        let mut names: Vec<&str> = self.ancestors().map(TestContext::name).collect();
        names.reverse();
        names.push(self.name());
        names.join(" ")
    }

    /// `setUp` hooks a runner calls before each test here, outermost first.
    pub fn set_up_chain(self) -> Vec<&'t TestFn> {
        let mut chain: Vec<&TestFn> = std::iter::once(self)
            .chain(self.ancestors())
            .filter_map(TestContext::set_up)
            .collect();
        chain.reverse();
        chain
    }

    /// `tearDown` hooks a runner calls after each test here, innermost first.
    pub fn tear_down_chain(self) -> Vec<&'t TestFn> {
        std::iter::once(self)
            .chain(self.ancestors())
            .filter_map(TestContext::tear_down)
            .collect()
    }

    /// Depth-first pre-order walk over this context and its descendants.
    pub fn walk(self) -> Walk<'t> {
        Walk::new(self.tree, self.id)
    }

    /// Why this context cannot run in an environment, if it cannot.
    ///
    /// Checks this context's requirement blocks, then each ancestor's, and
    /// describes the first one that `support` does not satisfy.
    pub fn unsupported_reason(self, support: &impl FeatureSupport) -> Option<String> {
        std::iter::once(self)
            .chain(self.ancestors())
            .flat_map(TestContext::requirements)
            .find(|req| !req.is_satisfied_by(support))
            .map(|req| req.describe())
    }
}

impl PartialEq for TestContext<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for TestContext<'_> {}

impl fmt::Debug for TestContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestContext")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("tests", &self.data().tests.len())
            .field("contexts", &self.data().contexts.len())
            .finish()
    }
}

/// A test of a [`ContextTree`].
#[derive(Copy, Clone)]
pub struct TestCase<'t> {
    tree: &'t ContextTree,
    id: TestId,
}

impl<'t> TestCase<'t> {
    pub(super) fn new(tree: &'t ContextTree, id: TestId) -> Self {
        TestCase { tree, id }
    }

    #[inline]
    fn data(self) -> &'t TestData {
        self.tree.test_data(self.id)
    }

    pub fn id(self) -> TestId {
        self.id
    }

    pub fn name(self) -> &'t str {
        &self.data().name
    }

    pub fn body(self) -> &'t TestBody {
        &self.data().body
    }

    /// The function to run; absent for tests declared as a string.
    pub fn func(self) -> Option<&'t TestFn> {
        match self.body() {
            TestBody::Runnable(f) => Some(f),
            TestBody::Deferred { .. } => None,
        }
    }

    /// Why the test is deferred; only present for tests declared as a string.
    pub fn comment(self) -> Option<&'t str> {
        match self.body() {
            TestBody::Deferred { comment } => Some(comment),
            TestBody::Runnable(_) => None,
        }
    }

    pub fn deferred(self) -> bool {
        self.data().deferred
    }

    /// The context that declared this test.
    pub fn context(self) -> TestContext<'t> {
        self.tree.context(self.data().context)
    }

    /// Context path plus the test name, joined by spaces.
    pub fn full_name(self) -> String {
        format!("{} {}", self.context().full_name(), self.name())
    }
}

impl PartialEq for TestCase<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for TestCase<'_> {}

impl fmt::Debug for TestCase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("deferred", &self.deferred())
            .finish()
    }
}
