//! RAII guard for procedure frames.
//!
//! Entering a procedure records the call and pushes a fresh dictionary
//! frame; dropping the guard undoes both, whether the body returned `Ok`,
//! returned an error, or unwound. The guard derefs to the interpreter so
//! the body is evaluated through it.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::dict_stack::Link;
use crate::errors::EvalResult;

pub struct ProcedureFrame<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ProcedureFrame<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.interpreter.dicts.pop_frame() {
            tracing::error!(%err, "procedure frame missing on exit");
        }
        self.interpreter.call_stack.pop();
        tracing::trace!(
            depth = self.interpreter.dicts.depth(),
            "popped procedure frame"
        );
    }
}

impl Deref for ProcedureFrame<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ProcedureFrame<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Record a call to `name` and push its frame.
    ///
    /// Fails without pushing anything when the call depth limit is hit.
    pub fn enter_procedure(&mut self, name: &str, link: Link) -> EvalResult<ProcedureFrame<'_>> {
        self.call_stack.push(name)?;
        self.dicts.push_frame(link);
        tracing::trace!(name, %link, depth = self.dicts.depth(), "pushed procedure frame");
        Ok(ProcedureFrame { interpreter: self })
    }
}
