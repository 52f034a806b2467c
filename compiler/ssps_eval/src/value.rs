//! Runtime values.

use std::fmt;

/// A value on the operand stack or bound in a frame.
///
/// There is deliberately no floating-point variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Bool(bool),
    /// Name literal, stored without its leading `/`.
    Name(String),
    /// Deferred source text of a `{ ... }` block.
    Procedure(String),
}

impl Value {
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Name(name) => write!(f, "/{name}"),
            Value::Procedure(body) => write!(f, "{{{body}}}"),
        }
    }
}
