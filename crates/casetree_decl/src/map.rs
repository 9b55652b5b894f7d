//! Insertion-ordered declaration mapping.

use std::fmt;

use casetree_stack::ensure_sufficient_stack;
use indexmap::IndexMap;

use crate::keys;
use crate::{Declaration, TestFn};

/// An ordered mapping of entry names to declaration values.
///
/// Enumeration order is insertion order. Re-inserting an existing key
/// replaces its value but keeps the key where it was first declared, the
/// way object properties behave.
///
/// Maps nest to any depth. Dropping, cloning, comparing and debug-printing
/// a nested map never overflow the stack.
#[derive(Default)]
pub struct DeclMap {
    entries: IndexMap<String, Declaration>,
}

impl DeclMap {
    pub fn new() -> Self {
        DeclMap::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DeclMap {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert an entry, returning the previous value under the same key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Declaration>,
    ) -> Option<Declaration> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Declaration> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Declaration)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Fluent construction

    /// Add an arbitrary entry.
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Declaration>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a runnable test.
    #[must_use]
    pub fn test(self, name: impl Into<String>, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.entry(name, TestFn::new(f))
    }

    /// Add a test from an existing function handle.
    #[must_use]
    pub fn test_fn(self, name: impl Into<String>, f: &TestFn) -> Self {
        self.entry(name, f.clone())
    }

    /// Add a pending test described by `comment`.
    #[must_use]
    pub fn pending(self, name: impl Into<String>, comment: impl Into<String>) -> Self {
        self.entry(name, Declaration::Str(comment.into()))
    }

    /// Add a nested context.
    #[must_use]
    pub fn context(self, name: impl Into<String>, body: DeclMap) -> Self {
        self.entry(name, body)
    }

    #[must_use]
    pub fn set_up(self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.entry(keys::SET_UP, TestFn::new(f))
    }

    #[must_use]
    pub fn tear_down(self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.entry(keys::TEAR_DOWN, TestFn::new(f))
    }

    /// Require every listed feature.
    #[must_use]
    pub fn requires_support_for_all<'a>(self, features: impl IntoIterator<Item = &'a str>) -> Self {
        self.entry(keys::REQUIRES_SUPPORT_FOR_ALL, feature_block(features))
    }

    /// Require at least one listed feature.
    #[must_use]
    pub fn requires_support_for_any<'a>(self, features: impl IntoIterator<Item = &'a str>) -> Self {
        self.entry(keys::REQUIRES_SUPPORT_FOR_ANY, feature_block(features))
    }
}

/// Build `{ feature: true, ... }`.
fn feature_block<'a>(features: impl IntoIterator<Item = &'a str>) -> DeclMap {
    features
        .into_iter()
        .map(|name| (name, Declaration::Bool(true)))
        .collect()
}

impl<K: Into<String>, V: Into<Declaration>> FromIterator<(K, V)> for DeclMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        DeclMap {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Clone for DeclMap {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| DeclMap {
            entries: self.entries.clone(),
        })
    }
}

/// Order-sensitive: two maps are equal when they hold equal entries in the
/// same order.
impl PartialEq for DeclMap {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| {
            self.entries.len() == other.entries.len()
                && self.entries.iter().eq(other.entries.iter())
        })
    }
}

impl fmt::Debug for DeclMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| f.debug_map().entries(self.entries.iter()).finish())
    }
}

/// Nested maps are unlinked onto a worklist instead of being dropped
/// recursively.
impl Drop for DeclMap {
    fn drop(&mut self) {
        let mut pending: Vec<DeclMap> = take_nested(&mut self.entries).collect();
        while let Some(mut map) = pending.pop() {
            pending.extend(take_nested(&mut map.entries));
        }
    }
}

/// Empty `entries`, yielding the nested maps it held.
fn take_nested(
    entries: &mut IndexMap<String, Declaration>,
) -> impl Iterator<Item = DeclMap> + '_ {
    entries.drain(..).filter_map(|(_, value)| match value {
        Declaration::Map(map) => Some(map),
        _ => None,
    })
}
