//! Arena-backed test context tree.
//!
//! All contexts and tests of one top-level case live in two flat vectors,
//! addressed by [`ContextId`] and [`TestId`]. Parent links are ids, so the
//! tree never owns itself cyclically. Context ids are handed out in
//! pre-order: a context's id is always smaller than its descendants'.
//!
//! Nodes are read through the borrowed views [`TestContext`] and
//! [`TestCase`]. The tree has no mutating API once built.

mod view;
mod walk;

use std::sync::Arc;

use casetree_decl::{Declaration, TestFn};

pub use view::{TestCase, TestContext};
pub use walk::Walk;

/// Index of a context in its [`ContextTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ContextId(u32);

impl ContextId {
    /// The top-level context of every tree.
    pub const ROOT: ContextId = ContextId(0);

    /// Only the tree under construction hands out ids.
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        ContextId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a test in its [`ContextTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TestId(u32);

impl TestId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        TestId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a test does when run.
#[derive(Clone, Debug, PartialEq)]
pub enum TestBody {
    /// A function to invoke.
    Runnable(TestFn),
    /// A placeholder with no body, described by `comment`.
    Deferred { comment: String },
}

/// The top-level declaration every context of a tree descends from.
#[derive(Debug, PartialEq, Eq)]
pub struct CaseOrigin {
    name: String,
}

impl CaseOrigin {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Per-context handle to the originating test case.
///
/// Every context gets its own handle; handles of different contexts never
/// compare equal, including the roots of two builds with the same name.
/// Use [`CaseHandle::same_case`] to ask whether two handles trace back to
/// the same top-level declaration.
#[derive(Clone, Debug)]
pub struct CaseHandle {
    origin: Arc<CaseOrigin>,
    context: ContextId,
}

impl CaseHandle {
    pub fn origin(&self) -> &CaseOrigin {
        &self.origin
    }

    /// The context this handle was issued to.
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// Check whether both handles come from the same top-level build.
    pub fn same_case(&self, other: &CaseHandle) -> bool {
        Arc::ptr_eq(&self.origin, &other.origin)
    }
}

impl PartialEq for CaseHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_case(other) && self.context == other.context
    }
}

impl Eq for CaseHandle {}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ContextData {
    pub(crate) name: String,
    pub(crate) parent: Option<ContextId>,
    pub(crate) tests: Vec<TestId>,
    pub(crate) contexts: Vec<ContextId>,
    pub(crate) set_up: Option<TestFn>,
    pub(crate) tear_down: Option<TestFn>,
    pub(crate) requires_support_for_all: Option<Declaration>,
    pub(crate) requires_support_for_any: Option<Declaration>,
    pub(crate) deferred: bool,
    pub(crate) case: CaseHandle,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestData {
    pub(crate) name: String,
    pub(crate) body: TestBody,
    pub(crate) context: ContextId,
    pub(crate) deferred: bool,
}

/// Counts over a whole tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub contexts: usize,
    pub tests: usize,
    /// Tests that will be reported as pending.
    pub deferred: usize,
    /// Tests a runner will execute.
    pub runnable: usize,
}

/// An immutable tree of test contexts built from one top-level declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextTree {
    contexts: Vec<ContextData>,
    tests: Vec<TestData>,
}

impl ContextTree {
    /// The top-level context.
    pub fn root(&self) -> TestContext<'_> {
        self.context(ContextId::ROOT)
    }

    /// Look up a context by id.
    ///
    /// Ids are only meaningful for the tree that issued them.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a larger tree. Use
    /// [`ContextTree::get_context`] for ids of unknown origin.
    pub fn context(&self, id: ContextId) -> TestContext<'_> {
        assert!(id.index() < self.contexts.len(), "context id out of range");
        TestContext::new(self, id)
    }

    /// Look up a context by id, or `None` if this tree has no such context.
    pub fn get_context(&self, id: ContextId) -> Option<TestContext<'_>> {
        (id.index() < self.contexts.len()).then(|| TestContext::new(self, id))
    }

    /// Look up a test by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a tree with more tests. Use
    /// [`ContextTree::get_test`] for ids of unknown origin.
    pub fn test(&self, id: TestId) -> TestCase<'_> {
        assert!(id.index() < self.tests.len(), "test id out of range");
        TestCase::new(self, id)
    }

    /// Look up a test by id, or `None` if this tree has no such test.
    pub fn get_test(&self, id: TestId) -> Option<TestCase<'_>> {
        (id.index() < self.tests.len()).then(|| TestCase::new(self, id))
    }

    pub fn len_contexts(&self) -> usize {
        self.contexts.len()
    }

    pub fn len_tests(&self) -> usize {
        self.tests.len()
    }

    /// Every test of the tree, in the order they were declared.
    pub fn all_tests(&self) -> impl ExactSizeIterator<Item = TestCase<'_>> {
        (0..self.tests.len()).map(move |i| self.test(TestId::new(index_u32(i))))
    }

    pub fn stats(&self) -> TreeStats {
        let deferred = self.tests.iter().filter(|t| t.deferred).count();
        TreeStats {
            contexts: self.contexts.len(),
            tests: self.tests.len(),
            deferred,
            runnable: self.tests.len() - deferred,
        }
    }

    /// Tests whose full name contains `pattern`.
    pub fn filter(&self, pattern: &str) -> Vec<TestId> {
        self.all_tests()
            .filter(|t| t.full_name().contains(pattern))
            .map(TestCase::id)
            .collect()
    }

    pub(crate) fn data(&self, id: ContextId) -> &ContextData {
        &self.contexts[id.index()]
    }

    pub(crate) fn test_data(&self, id: TestId) -> &TestData {
        &self.tests[id.index()]
    }
}

/// Mutable tree under construction. Only the builder sees this.
pub(crate) struct TreeBuf {
    origin: Arc<CaseOrigin>,
    contexts: Vec<ContextData>,
    tests: Vec<TestData>,
}

impl TreeBuf {
    pub(crate) fn new(case_name: &str) -> Self {
        TreeBuf {
            origin: Arc::new(CaseOrigin {
                name: case_name.to_owned(),
            }),
            contexts: Vec::new(),
            tests: Vec::new(),
        }
    }

    /// Allocate a context and link it into its parent.
    ///
    /// # Panics
    ///
    /// Panics once the tree holds `u32::MAX` contexts.
    pub(crate) fn push_context(
        &mut self,
        name: String,
        parent: Option<ContextId>,
        deferred: bool,
    ) -> ContextId {
        let id = ContextId::new(index_u32(self.contexts.len()));
        self.contexts.push(ContextData {
            name,
            parent,
            tests: Vec::new(),
            contexts: Vec::new(),
            set_up: None,
            tear_down: None,
            requires_support_for_all: None,
            requires_support_for_any: None,
            deferred,
            case: CaseHandle {
                origin: Arc::clone(&self.origin),
                context: id,
            },
        });
        if let Some(parent) = parent {
            self.contexts[parent.index()].contexts.push(id);
        }
        id
    }

    /// Allocate a test owned by `context`.
    ///
    /// # Panics
    ///
    /// Panics once the tree holds `u32::MAX` tests.
    pub(crate) fn push_test(
        &mut self,
        context: ContextId,
        name: String,
        body: TestBody,
        deferred: bool,
    ) -> TestId {
        let id = TestId::new(index_u32(self.tests.len()));
        self.tests.push(TestData {
            name,
            body,
            context,
            deferred,
        });
        self.contexts[context.index()].tests.push(id);
        id
    }

    pub(crate) fn context_mut(&mut self, id: ContextId) -> &mut ContextData {
        &mut self.contexts[id.index()]
    }

    pub(crate) fn context_name(&self, id: ContextId) -> &str {
        &self.contexts[id.index()].name
    }

    pub(crate) fn finish(self) -> ContextTree {
        ContextTree {
            contexts: self.contexts,
            tests: self.tests,
        }
    }
}

/// Convert an arena length to an id index.
///
/// # Panics
///
/// Panics if `len` does not fit in a `u32`. Ids are 32 bits wide, so a
/// single tree holds at most `u32::MAX` contexts and as many tests.
#[inline]
fn index_u32(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(i) => i,
        Err(_) => panic!("context tree exceeded u32::MAX nodes"),
    }
}
