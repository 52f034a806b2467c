//! Live procedure-call tracking.
//!
//! Each procedure call pushes its name; return pops it. The depth check is
//! part of `push()`, and the recorded names become the call chain shown in
//! fatal reports.

use crate::errors::{recursion_limit_exceeded, EvalResult};

/// Names of the procedures currently executing, outermost first.
#[derive(Clone, Debug)]
pub struct CallStack {
    names: Vec<String>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` is `None` for unlimited; `stacker` keeps the host stack
    /// from overflowing either way.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            names: Vec::new(),
            max_depth,
        }
    }

    /// Record a call, checking the depth limit.
    ///
    /// Nothing is pushed when the limit is exceeded.
    pub fn push(&mut self, name: &str) -> EvalResult {
        if let Some(max) = self.max_depth {
            if self.names.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.names.push(name.to_string());
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.names.is_empty(), "CallStack::pop() on empty stack");
        self.names.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.names.len()
    }

    /// Outermost call first.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
