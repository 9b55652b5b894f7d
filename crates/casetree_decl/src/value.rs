//! The declaration value type.

use std::fmt;

use crate::{DeclMap, TestFn};

/// A single value in a test declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Null,
    Bool(bool),
    Number(f64),
    /// A pending test, described by the string.
    Str(String),
    /// A test body or hook.
    Func(TestFn),
    /// A nested mapping: a sub-context, or a requirement block.
    Map(DeclMap),
}

/// Kind tag of a [`Declaration`], used in diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Null,
    Boolean,
    Number,
    String,
    Function,
    Object,
}

impl DeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKind::Null => "null",
            DeclKind::Boolean => "boolean",
            DeclKind::Number => "number",
            DeclKind::String => "string",
            DeclKind::Function => "function",
            DeclKind::Object => "object",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Declaration {
    /// Wrap a closure as a function value.
    pub fn func(f: impl Fn() + Send + Sync + 'static) -> Self {
        Declaration::Func(TestFn::new(f))
    }

    pub fn kind(&self) -> DeclKind {
        match self {
            Declaration::Null => DeclKind::Null,
            Declaration::Bool(_) => DeclKind::Boolean,
            Declaration::Number(_) => DeclKind::Number,
            Declaration::Str(_) => DeclKind::String,
            Declaration::Func(_) => DeclKind::Function,
            Declaration::Map(_) => DeclKind::Object,
        }
    }

    /// Truthiness: `Null`, `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Declaration::Null => false,
            Declaration::Bool(b) => *b,
            Declaration::Number(n) => *n != 0.0 && !n.is_nan(),
            Declaration::Str(s) => !s.is_empty(),
            Declaration::Func(_) | Declaration::Map(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Declaration::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Declaration::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_func(&self) -> Option<&TestFn> {
        match self {
            Declaration::Func(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&DeclMap> {
        match self {
            Declaration::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for Declaration {
    fn from(b: bool) -> Self {
        Declaration::Bool(b)
    }
}

impl From<f64> for Declaration {
    fn from(n: f64) -> Self {
        Declaration::Number(n)
    }
}

impl From<i32> for Declaration {
    fn from(n: i32) -> Self {
        Declaration::Number(f64::from(n))
    }
}

impl From<&str> for Declaration {
    fn from(s: &str) -> Self {
        Declaration::Str(s.to_owned())
    }
}

impl From<String> for Declaration {
    fn from(s: String) -> Self {
        Declaration::Str(s)
    }
}

impl From<TestFn> for Declaration {
    fn from(f: TestFn) -> Self {
        Declaration::Func(f)
    }
}

impl From<DeclMap> for Declaration {
    fn from(m: DeclMap) -> Self {
        Declaration::Map(m)
    }
}

impl<T: Into<Declaration>> From<Option<T>> for Declaration {
    fn from(v: Option<T>) -> Self {
        v.map_or(Declaration::Null, Into::into)
    }
}
