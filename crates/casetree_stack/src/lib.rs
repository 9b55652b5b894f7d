//! Stack growth for deeply nested declarations.
//!
//! Context construction recurses once per nesting level, and so do the
//! clone, comparison and debug impls of the declaration types. Generated
//! declarations can nest far deeper than a hand-written file, so each level
//! goes through [`ensure_sufficient_stack`], which grows the stack on demand
//! on native targets and is a passthrough on WASM.

/// Grow the stack when less than this remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
