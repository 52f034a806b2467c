//! Identifier evaluation: resolve, then either push data or call.

use super::Interpreter;
use crate::dict_stack::Link;
use crate::errors::EvalResult;
use crate::scope::{resolve, resolve_dynamic, Scoping};
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

impl Interpreter {
    /// Evaluate an identifier.
    ///
    /// A name bound to procedure text runs that text in a new frame. Under
    /// static scoping the frame links to the topmost frame binding the name,
    /// found by a top-down scan independent of the static chain. A name
    /// bound to anything else pushes the value.
    #[tracing::instrument(level = "debug", skip(self))]
    pub(super) fn call(&mut self, name: &str) -> EvalResult {
        let scoping = self.config.scoping;
        if self.config.trace {
            self.trace("***Name lookup***");
            self.trace(&format!("Name being looked up: \"{name}\""));
            self.trace(&format!("Dictionary stack: {}", self.dicts));
        }

        let (value, index) = {
            let resolved = resolve(&self.dicts, name, scoping)?;
            (resolved.value.clone(), resolved.index)
        };

        let body = match value {
            Value::Procedure(body) => body,
            data => {
                if self.config.trace {
                    self.trace(&format!("Value found: {data}"));
                    self.trace("");
                }
                self.operands.push(data);
                return Ok(());
            }
        };

        let link = match scoping {
            Scoping::Static => Link::Frame(resolve_dynamic(&self.dicts, name)?.index),
            Scoping::Dynamic => Link::Unlinked,
        };
        if self.config.trace {
            self.trace(&format!("Code found: \"{body}\""));
            if let Link::Frame(index) = link {
                self.trace(&format!("Link made: index {index}"));
            }
            self.trace("");
        }
        tracing::debug!(found_at = index, %link, depth = self.call_stack.depth(), "calling procedure");

        let mut frame = self.enter_procedure(name, link)?;
        ensure_sufficient_stack(|| frame.interpret(&body))
    }
}
