//! Interpreter configuration.

use crate::scope::Scoping;

/// Settings fixed for the lifetime of one [`Interpreter`](crate::Interpreter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    /// Name-resolution discipline.
    pub scoping: Scoping,
    /// Emit per-operator trace lines to the print handler.
    pub trace: bool,
    /// Maximum procedure call depth, or `None` for unlimited.
    pub max_depth: Option<usize>,
}

impl EvalConfig {
    #[must_use]
    pub fn with_scoping(mut self, scoping: Scoping) -> Self {
        self.scoping = scoping;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether dumps print frame links.
    #[inline]
    pub fn shows_links(&self) -> bool {
        self.scoping == Scoping::Static
    }
}
