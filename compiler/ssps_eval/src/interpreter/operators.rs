//! Built-in operators over the operand stack.
//!
//! Binary operators pop the right operand first, then the left.

use ssps_lexer::Operator;

use super::Interpreter;
use crate::errors::{
    division_by_zero, integer_overflow, malformed_name, type_mismatch, EvalResult, Mismatch,
};
use crate::value::Value;

/// Floor division. `None` only for `i64::MIN / -1`.
///
/// Callers rule out a zero divisor.
pub(crate) fn floor_div(left: i64, right: i64) -> Option<i64> {
    let quotient = left.checked_div(right)?;
    if left % right != 0 && ((left < 0) != (right < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

impl Interpreter {
    /// Dispatch one operator, bracketed by trace lines when tracing.
    pub(super) fn apply(&mut self, op: Operator) -> EvalResult {
        if self.config.trace {
            self.trace(&format!("***{op} performed***"));
            self.trace(&format!("Operand Stack (Before): {}", self.operands));
            if op == Operator::Def {
                self.trace(&format!(
                    "Top Dictionary and Link (Before): {}",
                    self.top_frame_text()
                ));
            }
        }
        match op {
            Operator::Add => self.arithmetic(op, i64::checked_add)?,
            Operator::Sub => self.arithmetic(op, i64::checked_sub)?,
            Operator::Mul => self.arithmetic(op, i64::checked_mul)?,
            Operator::Div => self.div()?,
            Operator::Eq => self.eq()?,
            Operator::Lt => self.compare(op, |l, r| l < r)?,
            Operator::Gt => self.compare(op, |l, r| l > r)?,
            Operator::And => self.logic(op, |l, r| l && r)?,
            Operator::Or => self.logic(op, |l, r| l || r)?,
            Operator::Not => self.not()?,
            Operator::If => self.if_op()?,
            Operator::IfElse => self.if_else_op()?,
            Operator::Dup => self.dup()?,
            Operator::Exch => self.exch()?,
            Operator::Pop => {
                self.operands.pop()?;
            }
            Operator::Top => self.top()?,
            Operator::Stack => self.stack(),
            Operator::Def => self.def()?,
        }
        if self.config.trace {
            self.trace(&format!("Operand Stack (After): {}", self.operands));
            if op == Operator::Def {
                self.trace(&format!(
                    "Top Dictionary and Link (After): {}",
                    self.top_frame_text()
                ));
            }
            self.trace("");
        }
        Ok(())
    }

    fn pop_ints(&mut self, op: Operator) -> EvalResult<(i64, i64)> {
        let (left, right) = self.operands.pop_2()?;
        match (left.as_int(), right.as_int()) {
            (Some(l), Some(r)) => Ok((l, r)),
            _ => Err(type_mismatch(op.as_str(), Mismatch::NonInt, vec![left, right])),
        }
    }

    fn arithmetic(&mut self, op: Operator, f: fn(i64, i64) -> Option<i64>) -> EvalResult {
        let (l, r) = self.pop_ints(op)?;
        let result =
            f(l, r).ok_or_else(|| integer_overflow(op.as_str(), Value::Int(l), Value::Int(r)))?;
        self.operands.push(Value::Int(result));
        Ok(())
    }

    fn div(&mut self) -> EvalResult {
        let (l, r) = self.pop_ints(Operator::Div)?;
        if r == 0 {
            return Err(division_by_zero(Value::Int(l), Value::Int(r)));
        }
        let quotient = floor_div(l, r)
            .ok_or_else(|| integer_overflow("div", Value::Int(l), Value::Int(r)))?;
        self.operands.push(Value::Int(quotient));
        Ok(())
    }

    fn eq(&mut self) -> EvalResult {
        let (left, right) = self.operands.pop_2()?;
        let equal = match (&left, &right) {
            (Value::Int(l), Value::Int(r)) => l == r,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            _ => {
                return Err(type_mismatch(
                    "eq",
                    Mismatch::NonMatching,
                    vec![left, right],
                ))
            }
        };
        self.operands.push(Value::Bool(equal));
        Ok(())
    }

    fn compare(&mut self, op: Operator, f: fn(i64, i64) -> bool) -> EvalResult {
        let (l, r) = self.pop_ints(op)?;
        self.operands.push(Value::Bool(f(l, r)));
        Ok(())
    }

    fn logic(&mut self, op: Operator, f: fn(bool, bool) -> bool) -> EvalResult {
        let (left, right) = self.operands.pop_2()?;
        let (Some(l), Some(r)) = (left.as_bool(), right.as_bool()) else {
            return Err(type_mismatch(op.as_str(), Mismatch::NonBool, vec![left, right]));
        };
        self.operands.push(Value::Bool(f(l, r)));
        Ok(())
    }

    fn not(&mut self) -> EvalResult {
        let value = self.operands.pop()?;
        let Some(b) = value.as_bool() else {
            return Err(type_mismatch("not", Mismatch::NonBool, vec![value]));
        };
        self.operands.push(Value::Bool(!b));
        Ok(())
    }

    fn dup(&mut self) -> EvalResult {
        let value = self.operands.pop()?;
        self.operands.push(value.clone());
        self.operands.push(value);
        Ok(())
    }

    fn exch(&mut self) -> EvalResult {
        let (left, right) = self.operands.pop_2()?;
        self.operands.push(right);
        self.operands.push(left);
        Ok(())
    }

    /// `=`
    fn top(&mut self) -> EvalResult {
        let value = self.operands.pop()?;
        self.print_handler.println(&value.to_string());
        Ok(())
    }

    fn stack(&self) {
        let mut dump = self.snapshot();
        dump.calls.clear();
        self.print_handler.println(&dump.to_string());
    }

    fn def(&mut self) -> EvalResult {
        let (key, value) = self.operands.pop_2()?;
        let Value::Name(name) = key else {
            return Err(malformed_name(key));
        };
        tracing::trace!(%name, %value, frame = self.dicts.top_index(), "def");
        self.dicts.define(name, value);
        Ok(())
    }
}
