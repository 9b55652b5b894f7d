//! Context tree construction.
//!
//! [`ContextBuilder`] turns a top-level declaration into a [`ContextTree`].
//! Each entry of the declaration is classified (see `classify`) and then
//! applied to the context being built; nested mappings recurse depth-first,
//! so a child context is fully built before the next sibling entry is read.
//!
//! A builder may carry one creation listener. It runs once for every
//! successful top-level build and never for nested contexts.

mod classify;

use casetree_decl::{DeclMap, Declaration};
use casetree_stack::ensure_sufficient_stack;

use crate::config::{BuilderConfig, RequirementConflict};
use crate::error::InvalidDeclarationError;
use crate::tree::{ContextId, ContextTree, TreeBuf};
use classify::{classify, Entry, Hook, Ignored, RequirementKey};

/// Callback invoked with every newly built top-level tree.
pub type CreateListener = Box<dyn Fn(&ContextTree) + Send + Sync>;

/// Builds [`ContextTree`]s from test declarations.
#[derive(Default)]
pub struct ContextBuilder {
    config: BuilderConfig,
    on_create: Option<CreateListener>,
}

impl ContextBuilder {
    /// Create a builder with the default configuration and no listener.
    pub fn new() -> Self {
        ContextBuilder::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        ContextBuilder {
            config,
            on_create: None,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Register the creation listener, replacing any previous one.
    ///
    /// Returns the listener that was replaced.
    pub fn on_create(
        &mut self,
        listener: impl Fn(&ContextTree) + Send + Sync + 'static,
    ) -> Option<CreateListener> {
        self.on_create.replace(Box::new(listener))
    }

    /// Remove the creation listener.
    pub fn clear_on_create(&mut self) -> Option<CreateListener> {
        self.on_create.take()
    }

    pub fn has_listener(&self) -> bool {
        self.on_create.is_some()
    }

    /// Build the tree for a top-level test case.
    ///
    /// `name` must be non-empty and `declaration` must be a mapping.
    ///
    /// # Panics
    ///
    /// Panics if the declaration holds more than `u32::MAX` contexts or
    /// tests, the capacity of a [`ContextTree`].
    pub fn build(
        &self,
        name: &str,
        declaration: &Declaration,
    ) -> Result<ContextTree, InvalidDeclarationError> {
        if name.is_empty() {
            return Err(InvalidDeclarationError::EmptyName);
        }
        let body = match declaration {
            Declaration::Map(body) => body,
            Declaration::Null => {
                return Err(InvalidDeclarationError::NullDeclaration {
                    name: name.to_owned(),
                })
            }
            other => {
                return Err(InvalidDeclarationError::DeclarationNotMapping {
                    name: name.to_owned(),
                    found: other.kind(),
                })
            }
        };

        let _span = tracing::debug_span!("build_context", case = name).entered();

        let mut buf = TreeBuf::new(name);
        let mut cx = BuildCx {
            config: &self.config,
            buf: &mut buf,
        };
        // The root name is kept as given; only nested names are cleaned.
        cx.build_nested(name.to_owned(), body, None, false);
        let tree = buf.finish();

        tracing::debug!(
            contexts = tree.len_contexts(),
            tests = tree.len_tests(),
            "built test case"
        );

        if let Some(listener) = &self.on_create {
            listener(&tree);
        }
        Ok(tree)
    }

    /// Build from untyped values, as handed over by a dynamic declaration
    /// site. Both arguments may be missing.
    pub fn build_value(
        &self,
        name: Option<&Declaration>,
        declaration: Option<&Declaration>,
    ) -> Result<ContextTree, InvalidDeclarationError> {
        let name = match name {
            None => return Err(InvalidDeclarationError::MissingName),
            Some(Declaration::Str(name)) => name,
            Some(other) => {
                return Err(InvalidDeclarationError::NameNotString {
                    found: other.kind(),
                })
            }
        };
        if name.is_empty() {
            return Err(InvalidDeclarationError::EmptyName);
        }
        let Some(declaration) = declaration else {
            return Err(InvalidDeclarationError::MissingDeclaration { name: name.clone() });
        };
        self.build(name, declaration)
    }
}

impl std::fmt::Debug for ContextBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextBuilder")
            .field("config", &self.config)
            .field("has_listener", &self.has_listener())
            .finish()
    }
}

/// Build a tree with a default builder, without a creation listener.
pub fn build_context(
    name: &str,
    declaration: &Declaration,
) -> Result<ContextTree, InvalidDeclarationError> {
    ContextBuilder::new().build(name, declaration)
}

/// State of one top-level build.
struct BuildCx<'a> {
    config: &'a BuilderConfig,
    buf: &'a mut TreeBuf,
}

impl BuildCx<'_> {
    /// Build one context and, recursively, everything declared inside it.
    fn build_nested(
        &mut self,
        name: String,
        body: &DeclMap,
        parent: Option<ContextId>,
        deferred: bool,
    ) -> ContextId {
        ensure_sufficient_stack(|| {
            let id = self.buf.push_context(name, parent, deferred);
            // Source key of the stored `requiresSupportForAll` block.
            let mut all_from: Option<RequirementKey> = None;

            for (key, value) in body.iter() {
                let entry = classify(key, value, &self.config.deferral_marker);
                tracing::trace!(key, ?entry, "classified entry");

                match entry {
                    Entry::Hook(hook, f) => {
                        let cx = self.buf.context_mut(id);
                        let slot = match hook {
                            Hook::SetUp => &mut cx.set_up,
                            Hook::TearDown => &mut cx.tear_down,
                        };
                        *slot = Some(f.clone());
                    }
                    Entry::Requirement(RequirementKey::Any, block) => {
                        self.buf.context_mut(id).requires_support_for_any = Some(block.clone());
                    }
                    Entry::Requirement(source, block) => {
                        if self.keep_requirement(id, all_from, source) {
                            self.buf.context_mut(id).requires_support_for_all =
                                Some(block.clone());
                            all_from = Some(source);
                        }
                    }
                    Entry::Test {
                        name,
                        body,
                        deferred: marked,
                    } => {
                        self.buf.push_test(id, name, body, marked || deferred);
                    }
                    Entry::Context {
                        name,
                        deferred: marked,
                        body,
                    } => {
                        self.build_nested(name, body, Some(id), marked || deferred);
                    }
                    Entry::Ignored(reason) => log_ignored(key, reason),
                }
            }

            let cx = self.buf.context_mut(id);
            tracing::debug!(
                name = %cx.name,
                tests = cx.tests.len(),
                contexts = cx.contexts.len(),
                deferred = cx.deferred,
                "built context"
            );
            id
        })
    }

    /// Decide whether a `requiresSupportForAll`-style block declared under
    /// `incoming` replaces the one already stored from `existing`.
    fn keep_requirement(
        &self,
        id: ContextId,
        existing: Option<RequirementKey>,
        incoming: RequirementKey,
    ) -> bool {
        let Some(existing) = existing else {
            return true;
        };
        let keep = match self.config.requirement_conflict {
            RequirementConflict::LastDeclared => true,
            RequirementConflict::CanonicalWins => incoming == RequirementKey::All,
        };
        let discarded = if keep { existing } else { incoming };
        tracing::warn!(
            context = %self.buf.context_name(id),
            kept = if keep { incoming.as_str() } else { existing.as_str() },
            discarded = discarded.as_str(),
            "conflicting requirement keys; one block is discarded"
        );
        keep
    }
}

fn log_ignored(key: &str, reason: Ignored) {
    match reason {
        Ignored::Null => tracing::trace!(key, "skipping null entry"),
        Ignored::HookNotFunction(kind) => {
            tracing::debug!(key, %kind, "hook is not a function; ignoring");
        }
        Ignored::Unsupported(kind) => {
            tracing::debug!(key, %kind, "unsupported entry value; ignoring");
        }
    }
}
