//! `if` and `ifelse`.
//!
//! Bodies run inline in the current frame; no dictionary frame is pushed.

use super::Interpreter;
use crate::errors::{type_mismatch, EvalResult, Mismatch};
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

fn condition(operation: &'static str, value: Value) -> EvalResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| type_mismatch(operation, Mismatch::NonBool, vec![value]))
}

fn body(operation: &'static str, value: Value) -> EvalResult<String> {
    match value {
        Value::Procedure(text) => Ok(text),
        other => Err(type_mismatch(operation, Mismatch::NonProcedure, vec![other])),
    }
}

impl Interpreter {
    pub(super) fn if_op(&mut self) -> EvalResult {
        let block = self.operands.pop()?;
        let cond = self.operands.pop()?;
        let cond = condition("if", cond)?;
        let block = body("if", block)?;
        if cond {
            self.interpret_inline(&block)?;
        }
        Ok(())
    }

    pub(super) fn if_else_op(&mut self) -> EvalResult {
        let else_block = self.operands.pop()?;
        let then_block = self.operands.pop()?;
        let cond = self.operands.pop()?;
        let cond = condition("ifelse", cond)?;
        let then_block = body("ifelse", then_block)?;
        let else_block = body("ifelse", else_block)?;
        self.interpret_inline(if cond { &then_block } else { &else_block })
    }

    fn interpret_inline(&mut self, code: &str) -> EvalResult {
        tracing::trace!(code, "conditional body");
        ensure_sufficient_stack(|| self.interpret(code))
    }
}
