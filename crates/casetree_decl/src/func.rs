//! Shared handle to a test or hook body.

use std::fmt;
use std::sync::Arc;

/// A test body or lifecycle hook.
///
/// Cheap to clone: clones share the same closure. Equality is identity, so
/// two handles compare equal only when they were cloned from one another.
/// Wrapping the same closure twice yields two distinct functions.
#[derive(Clone)]
pub struct TestFn(Arc<dyn Fn() + Send + Sync>);

impl TestFn {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        TestFn(Arc::new(f))
    }

    /// Invoke the body.
    #[inline]
    pub fn call(&self) {
        (self.0)();
    }

    /// Check whether both handles refer to the same function.
    #[inline]
    pub fn ptr_eq(&self, other: &TestFn) -> bool {
        // Compare data pointers only; vtable addresses are not unique.
        std::ptr::eq(
            Arc::as_ptr(&self.0).cast::<()>(),
            Arc::as_ptr(&other.0).cast::<()>(),
        )
    }
}

impl PartialEq for TestFn {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for TestFn {}

impl fmt::Debug for TestFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestFn({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

#[cfg(test)]
mod tests;
