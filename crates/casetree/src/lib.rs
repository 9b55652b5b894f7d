//! casetree: immutable test-context trees from nested test declarations.
//!
//! A test case is declared as a name plus a nested mapping (see
//! [`casetree_decl`]). [`ContextBuilder`] classifies every entry of that
//! mapping and produces a [`ContextTree`]:
//!
//! ```text
//! "Name" {                         TestContext "Name"
//!     setUp: fn,                     ├─ set_up
//!     "test 1": fn,                  ├─ tests:    [test 1, pending]
//!     "pending": "Later, peeps",     ├─ contexts: [up next]
//!     "// up next": {                │    └─ TestContext "up next" (deferred)
//!         "cool feature": fn,        │         └─ tests: [cool feature (deferred)]
//!     },
//!     requiresSupportFor: {..},      └─ requires_support_for_all
//! }
//! ```
//!
//! The tree is the input of test runners, reporters and filters. It holds
//! no execution state and never changes after it is built.

mod builder;
mod config;
mod error;
mod name;
mod requirements;
mod tree;
pub mod tracing_setup;

pub use builder::{build_context, ContextBuilder, CreateListener};
pub use config::{BuilderConfig, RequirementConflict};
pub use error::InvalidDeclarationError;
pub use name::{clean_name, CleanName};
pub use requirements::{FeatureSet, FeatureSupport, RequirementMode, Requirements};
pub use tree::{
    CaseHandle, CaseOrigin, ContextId, ContextTree, TestBody, TestCase, TestContext, TestId,
    TreeStats, Walk,
};

pub use casetree_decl::{keys, DeclKind, DeclMap, Declaration, TestFn};
