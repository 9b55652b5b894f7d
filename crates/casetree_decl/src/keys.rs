//! Reserved entry names with structural meaning.
//!
//! Entries under these keys configure the enclosing context instead of
//! declaring a test or a nested context.

/// Hook run before each test in the context.
pub const SET_UP: &str = "setUp";

/// Hook run after each test in the context.
pub const TEAR_DOWN: &str = "tearDown";

/// Features that must all be supported for the context to run.
pub const REQUIRES_SUPPORT_FOR_ALL: &str = "requiresSupportForAll";

/// Alias of [`REQUIRES_SUPPORT_FOR_ALL`].
pub const REQUIRES_SUPPORT_FOR: &str = "requiresSupportFor";

/// Features of which at least one must be supported.
pub const REQUIRES_SUPPORT_FOR_ANY: &str = "requiresSupportForAny";

/// Check whether a key is one of the reserved structural names.
pub fn is_reserved(key: &str) -> bool {
    matches!(
        key,
        SET_UP | TEAR_DOWN | REQUIRES_SUPPORT_FOR_ALL | REQUIRES_SUPPORT_FOR | REQUIRES_SUPPORT_FOR_ANY
    )
}
