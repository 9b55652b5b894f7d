//! Feature requirement blocks.
//!
//! A context may declare `requiresSupportForAll` (or its alias
//! `requiresSupportFor`) and `requiresSupportForAny`. Each block maps
//! feature names to a requirement flag; only entries with a truthy flag are
//! required. The builder stores the blocks verbatim, and runners evaluate
//! them here against the features the environment supports.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;

use casetree_decl::Declaration;
use rustc_hash::FxHashSet;

/// Source of truth for which features the current environment supports.
///
/// Closures qualify, so a runner can pass `|f: &str| env.has(f)`.
pub trait FeatureSupport {
    fn supports(&self, feature: &str) -> bool;
}

impl<F: Fn(&str) -> bool> FeatureSupport for F {
    fn supports(&self, feature: &str) -> bool {
        self(feature)
    }
}

impl<S: BuildHasher> FeatureSupport for HashSet<String, S> {
    fn supports(&self, feature: &str) -> bool {
        self.contains(feature)
    }
}

impl FeatureSupport for BTreeSet<String> {
    fn supports(&self, feature: &str) -> bool {
        self.contains(feature)
    }
}

/// A set of supported feature names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSet {
    features: FxHashSet<String>,
}

impl FeatureSet {
    pub fn new() -> Self {
        FeatureSet::default()
    }

    /// Mark a feature as supported. Returns false if it already was.
    pub fn insert(&mut self, feature: impl Into<String>) -> bool {
        self.features.insert(feature.into())
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FeatureSet {
            features: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl FeatureSupport for FeatureSet {
    fn supports(&self, feature: &str) -> bool {
        self.contains(feature)
    }
}

/// How the features of a block combine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequirementMode {
    /// Every required feature must be supported.
    All,
    /// At least one required feature must be supported.
    Any,
}

impl fmt::Display for RequirementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequirementMode::All => "all",
            RequirementMode::Any => "any",
        })
    }
}

/// View over one stored requirement block.
#[derive(Copy, Clone, Debug)]
pub struct Requirements<'t> {
    mode: RequirementMode,
    block: &'t Declaration,
}

impl<'t> Requirements<'t> {
    pub fn new(mode: RequirementMode, block: &'t Declaration) -> Self {
        Requirements { mode, block }
    }

    pub fn mode(&self) -> RequirementMode {
        self.mode
    }

    /// The block as declared.
    pub fn block(&self) -> &'t Declaration {
        self.block
    }

    /// Feature names flagged as required, in declaration order.
    ///
    /// A block that is not a mapping requires nothing.
    pub fn required_features(&self) -> impl Iterator<Item = &'t str> + 't {
        let map = self.block.as_map();
        if map.is_none() {
            tracing::debug!(
                kind = %self.block.kind(),
                "requirement block is not a mapping; treating as empty"
            );
        }
        map.into_iter()
            .flat_map(|m| m.iter())
            .filter(|(_, flag)| flag.is_truthy())
            .map(|(name, _)| name)
    }

    /// Check the block against the supported features.
    ///
    /// An `Any` block with no required features is satisfied.
    pub fn is_satisfied_by(&self, support: &impl FeatureSupport) -> bool {
        let mut required = self.required_features().peekable();
        match self.mode {
            RequirementMode::All => required.all(|f| support.supports(f)),
            RequirementMode::Any => {
                required.peek().is_none() || required.any(|f| support.supports(f))
            }
        }
    }

    /// Human-readable summary, e.g. `requires support for all of: a, b`.
    pub fn describe(&self) -> String {
        let features: Vec<&str> = self.required_features().collect();
        format!(
            "requires support for {} of: {}",
            self.mode,
            features.join(", ")
        )
    }
}

#[cfg(test)]
mod tests;
