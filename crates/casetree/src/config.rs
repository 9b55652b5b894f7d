//! Builder configuration.

/// Which block wins when `requiresSupportForAll` and its alias
/// `requiresSupportFor` are both declared on one context.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RequirementConflict {
    /// The key declared later replaces the earlier one.
    #[default]
    LastDeclared,
    /// `requiresSupportForAll` is kept regardless of order.
    CanonicalWins,
}

/// Context builder configuration.
#[derive(Clone, Debug)]
pub struct BuilderConfig {
    /// Leading token that marks a test or context as deferred.
    /// An empty marker disables deferral by name.
    pub deferral_marker: String,
    /// Resolution of `requiresSupportForAll`/`requiresSupportFor` collisions.
    pub requirement_conflict: RequirementConflict,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            deferral_marker: "//".to_owned(),
            requirement_conflict: RequirementConflict::LastDeclared,
        }
    }
}
