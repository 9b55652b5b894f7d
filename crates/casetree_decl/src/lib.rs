//! Declaration values for casetree.
//!
//! A test declaration is a loosely typed, nested mapping: every entry is a
//! name paired with a function, a string, another mapping, or some other
//! plain value. This crate models that shape as a closed sum type so the
//! context builder can classify entries exhaustively.
//!
//! # Example
//!
//! ```text
//! let decl = DeclMap::new()
//!     .set_up(|| {})
//!     .test("adds numbers", || assert_eq!(1 + 1, 2))
//!     .pending("handles overflow", "Later, peeps")
//!     .context("// up next", DeclMap::new().test("cool feature", || {}));
//! ```

mod func;
pub mod keys;
mod map;
mod value;

pub use func::TestFn;
pub use map::DeclMap;
pub use value::{DeclKind, Declaration};
