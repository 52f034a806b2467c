//! The operand stack.

use std::fmt;

use crate::errors::{operand_underflow, EvalResult};
use crate::value::Value;

/// LIFO of runtime values.
///
/// Push is infallible: [`Value`] has no representation for the numeric
/// kinds the language forbids, so the float check happens before a value
/// is ever built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack::default()
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> EvalResult<Value> {
        self.values.pop().ok_or_else(operand_underflow)
    }

    /// Pop two operands, returning `(left, right)`.
    ///
    /// The first pop yields the right-hand operand.
    pub fn pop_2(&mut self) -> EvalResult<(Value, Value)> {
        let right = self.pop()?;
        let left = self.pop()?;
        Ok((left, right))
    }

    /// Values from top to bottom.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().rev()
    }

}

/// Bottom-to-top, comma separated. Used by trace output.
impl fmt::Display for OperandStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
