//! Declaration errors.

use casetree_decl::DeclKind;
use thiserror::Error;

/// A top-level declaration that cannot be built into a context tree.
///
/// These are mistakes at the declaration site. Individual entries with
/// unsupported values never produce an error; they are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDeclarationError {
    #[error("test case name is required")]
    MissingName,

    #[error("test case name must be a string, found {found}")]
    NameNotString { found: DeclKind },

    #[error("test case name must not be empty")]
    EmptyName,

    #[error("test case `{name}` has no tests")]
    MissingDeclaration { name: String },

    #[error("tests for `{name}` must be an object, found null")]
    NullDeclaration { name: String },

    #[error("tests for `{name}` must be an object, found {found}")]
    DeclarationNotMapping { name: String, found: DeclKind },
}
