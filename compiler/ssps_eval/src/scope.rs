//! Name resolution over the dictionary stack.
//!
//! Two disciplines:
//! - **Dynamic**: scan frames from the top down; the first frame binding the
//!   name wins.
//! - **Static**: start at the top frame and follow each frame's link until a
//!   frame binds the name or the chain ends.
//!
//! Both return the index of the frame the binding was found in. When a
//! procedure is called under static scoping, the new frame's link is the
//! index a dynamic scan returns, even though the value itself came from the
//! static chain.

use std::fmt;

use crate::dict_stack::{DictStack, Link};
use crate::errors::{scope_cycle, undefined_name, EvalResult};
use crate::value::Value;

/// Name-resolution discipline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scoping {
    #[default]
    Dynamic,
    Static,
}

impl fmt::Display for Scoping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scoping::Dynamic => f.write_str("dynamic"),
            Scoping::Static => f.write_str("static"),
        }
    }
}

/// A successful lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub value: &'a Value,
    /// Index of the frame holding the binding.
    pub index: usize,
}

/// Resolve `name` using the given discipline.
pub fn resolve<'a>(dicts: &'a DictStack, name: &str, scoping: Scoping) -> EvalResult<Resolved<'a>> {
    match scoping {
        Scoping::Dynamic => resolve_dynamic(dicts, name),
        Scoping::Static => resolve_static(dicts, name),
    }
}

pub fn resolve_dynamic<'a>(dicts: &'a DictStack, name: &str) -> EvalResult<Resolved<'a>> {
    for (index, frame) in dicts.iter_top_down() {
        if let Some(value) = frame.get(name) {
            tracing::trace!(name, index, "resolved dynamically");
            return Ok(Resolved { value, index });
        }
    }
    Err(undefined_name(name, Scoping::Dynamic))
}

/// Follow the static chain from the top frame.
///
/// A link to the frame's own index, or any chain longer than the stack is
/// deep, is a cycle. A link past the top of the stack ends the chain.
pub fn resolve_static<'a>(dicts: &'a DictStack, name: &str) -> EvalResult<Resolved<'a>> {
    let mut index = dicts.top_index();
    let mut hops = 0;
    loop {
        let Some(frame) = dicts.frame(index) else {
            tracing::warn!(name, index, "static link points past the dictionary stack");
            return Err(undefined_name(name, Scoping::Static));
        };
        if let Some(value) = frame.get(name) {
            tracing::trace!(name, index, hops, "resolved statically");
            return Ok(Resolved { value, index });
        }
        match frame.link() {
            Link::Unlinked => return Err(undefined_name(name, Scoping::Static)),
            Link::Frame(next) if next == index || hops >= dicts.depth() => {
                return Err(scope_cycle(name, index));
            }
            Link::Frame(next) => {
                index = next;
                hops += 1;
            }
        }
    }
}
