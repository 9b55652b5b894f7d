//! Per-entry classification.
//!
//! Each entry of a declaration mapping plays exactly one role in the context
//! being built. Classification decides that role once, so the builder can
//! match exhaustively instead of re-inspecting values.

use casetree_decl::{keys, DeclKind, DeclMap, Declaration, TestFn};

use crate::name::clean_name;
use crate::tree::TestBody;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Hook {
    SetUp,
    TearDown,
}

/// Which requirement key an entry was declared under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RequirementKey {
    /// `requiresSupportForAll`
    All,
    /// `requiresSupportFor`, stored as `All`.
    AllAlias,
    /// `requiresSupportForAny`
    Any,
}

impl RequirementKey {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RequirementKey::All => keys::REQUIRES_SUPPORT_FOR_ALL,
            RequirementKey::AllAlias => keys::REQUIRES_SUPPORT_FOR,
            RequirementKey::Any => keys::REQUIRES_SUPPORT_FOR_ANY,
        }
    }
}

/// Why an entry contributes nothing to the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Ignored {
    /// The value was `null`.
    Null,
    /// A hook key whose value is not a function.
    HookNotFunction(DeclKind),
    /// A value that is neither a function, string, nor mapping.
    Unsupported(DeclKind),
}

/// The role an entry plays in its context.
#[derive(Debug, PartialEq)]
pub(crate) enum Entry<'d> {
    Hook(Hook, &'d TestFn),
    Requirement(RequirementKey, &'d Declaration),
    Test {
        name: String,
        body: TestBody,
        deferred: bool,
    },
    Context {
        name: String,
        deferred: bool,
        body: &'d DeclMap,
    },
    Ignored(Ignored),
}

/// Classify one declared entry.
///
/// Reserved keys are matched on the raw key, before any cleaning.
pub(crate) fn classify<'d>(key: &str, value: &'d Declaration, marker: &str) -> Entry<'d> {
    let hook = match key {
        keys::SET_UP => Some(Hook::SetUp),
        keys::TEAR_DOWN => Some(Hook::TearDown),
        _ => None,
    };
    if let Some(hook) = hook {
        return match value {
            Declaration::Func(f) => Entry::Hook(hook, f),
            other => Entry::Ignored(Ignored::HookNotFunction(other.kind())),
        };
    }

    let requirement = match key {
        keys::REQUIRES_SUPPORT_FOR_ALL => Some(RequirementKey::All),
        keys::REQUIRES_SUPPORT_FOR => Some(RequirementKey::AllAlias),
        keys::REQUIRES_SUPPORT_FOR_ANY => Some(RequirementKey::Any),
        _ => None,
    };
    if let Some(requirement) = requirement {
        return Entry::Requirement(requirement, value);
    }

    match value {
        Declaration::Null => Entry::Ignored(Ignored::Null),
        Declaration::Func(f) => {
            let cleaned = clean_name(key, marker);
            Entry::Test {
                name: cleaned.name,
                body: TestBody::Runnable(f.clone()),
                deferred: cleaned.deferred,
            }
        }
        Declaration::Str(comment) => Entry::Test {
            name: clean_name(key, marker).name,
            body: TestBody::Deferred {
                comment: comment.clone(),
            },
            deferred: true,
        },
        Declaration::Map(body) => {
            let cleaned = clean_name(key, marker);
            Entry::Context {
                name: cleaned.name,
                deferred: cleaned.deferred,
                body,
            }
        }
        Declaration::Bool(_) | Declaration::Number(_) => {
            Entry::Ignored(Ignored::Unsupported(value.kind()))
        }
    }
}

#[cfg(test)]
mod tests;
