//! Evaluation errors.
//!
//! Every error is fatal: it propagates to [`Interpreter::run`](crate::Interpreter::run)
//! and the caller renders it with [`render_fatal`](crate::render_fatal).
//! Factory functions below are the construction API; each records the
//! operation that failed and the operands involved.

use std::fmt;

use ssps_lexer::LexError;

use crate::report::StackDump;
use crate::scope::Scoping;
use crate::value::Value;

/// Result of an evaluation step.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Which operand-kind precondition was violated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// Arithmetic or comparison on a non-integer.
    NonInt,
    /// Boolean operator or condition on a non-boolean.
    NonBool,
    /// `eq` on an int/bool mix or on names/procedures.
    NonMatching,
    /// Conditional body that is not procedure text.
    NonProcedure,
    /// Float literal pushed; the language has no floats.
    Float(String),
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::NonInt => f.write_str("non-int operand encountered"),
            Mismatch::NonBool => f.write_str("non-bool operand encountered"),
            Mismatch::NonMatching => f.write_str("non-matching operand types encountered"),
            Mismatch::NonProcedure => f.write_str("non-procedure operand encountered"),
            Mismatch::Float(text) => write!(f, "float argument encountered ({text})"),
        }
    }
}

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("empty {stack} stack")]
    StackUnderflow { stack: &'static str },
    #[error("{0}")]
    TypeMismatch(Mismatch),
    #[error("dividing by zero")]
    DivideByZero,
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("trying to define non-name")]
    MalformedName,
    #[error("name '{name}' is undefined in current {scoping} scope")]
    UndefinedName { name: String, scoping: Scoping },
    #[error("static link chain for '{name}' loops at frame {index}")]
    ScopeCycle { name: String, index: usize },
    #[error("procedure call depth exceeded {max}")]
    RecursionLimit { max: usize },
    #[error("{0}")]
    Lex(#[from] LexError),
}

/// A fatal evaluation error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("Error in {operation}: {kind}.")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Operation that detected the error (`add`, `lookup`, `op_pop`, ...).
    pub operation: &'static str,
    /// Operands implicated in the failure, left to right.
    pub operands: Vec<Value>,
    /// Both stacks as they were when the error was raised.
    ///
    /// Filled in by the interpreter on the way out; `None` only for errors
    /// built outside a running interpreter.
    pub dump: Option<StackDump>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, operation: &'static str) -> Self {
        EvalError {
            kind,
            operation,
            operands: Vec::new(),
            dump: None,
        }
    }

    #[must_use]
    pub fn with_operands(mut self, operands: Vec<Value>) -> Self {
        self.operands = operands;
        self
    }

    /// Attach a stack dump unless one is already present.
    ///
    /// The innermost attachment wins so the dump reflects the frame the
    /// error was raised in, not the frames left after unwinding.
    #[must_use]
    pub fn with_dump(mut self, dump: impl FnOnce() -> StackDump) -> Self {
        if self.dump.is_none() {
            self.dump = Some(dump());
        }
        self
    }
}

impl From<LexError> for EvalError {
    fn from(err: LexError) -> Self {
        EvalError::new(EvalErrorKind::Lex(err), "lex")
    }
}

/// Pop from an empty operand stack.
#[cold]
pub fn operand_underflow() -> EvalError {
    EvalError::new(EvalErrorKind::StackUnderflow { stack: "operand" }, "op_pop")
}

/// Pop of the bottom (or a missing) dictionary frame.
#[cold]
pub fn dict_underflow() -> EvalError {
    EvalError::new(
        EvalErrorKind::StackUnderflow {
            stack: "dictionary",
        },
        "dict_pop",
    )
}

#[cold]
pub fn type_mismatch(
    operation: &'static str,
    mismatch: Mismatch,
    operands: Vec<Value>,
) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch(mismatch), operation).with_operands(operands)
}

/// A float literal reached `op_push`.
#[cold]
pub fn float_operand(text: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch(Mismatch::Float(text.to_string())),
        "op_push",
    )
}

#[cold]
pub fn division_by_zero(left: Value, right: Value) -> EvalError {
    EvalError::new(EvalErrorKind::DivideByZero, "div").with_operands(vec![left, right])
}

#[cold]
pub fn integer_overflow(operation: &'static str, left: Value, right: Value) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow, operation).with_operands(vec![left, right])
}

#[cold]
pub fn malformed_name(key: Value) -> EvalError {
    EvalError::new(EvalErrorKind::MalformedName, "def").with_operands(vec![key])
}

#[cold]
pub fn undefined_name(name: &str, scoping: Scoping) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedName {
            name: name.to_string(),
            scoping,
        },
        "lookup",
    )
    .with_operands(vec![Value::Name(name.to_string())])
}

#[cold]
pub fn scope_cycle(name: &str, index: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::ScopeCycle {
            name: name.to_string(),
            index,
        },
        "lookup",
    )
    .with_operands(vec![Value::Name(name.to_string())])
}

#[cold]
pub fn recursion_limit_exceeded(max: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { max }, "call")
}

#[cfg(test)]
mod tests;
