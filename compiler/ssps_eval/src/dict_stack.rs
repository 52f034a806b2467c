//! The dictionary stack: scope frames pushed per procedure call.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::{dict_underflow, EvalResult};
use crate::report::FrameDump;
use crate::value::Value;

/// Where a static lookup goes when a frame lacks the name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Link {
    /// Bottom frame, and every frame under dynamic scoping.
    #[default]
    Unlinked,
    /// Index into the dictionary stack.
    Frame(usize),
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Link::Unlinked => f.write_str("none"),
            Link::Frame(index) => write!(f, "{index}"),
        }
    }
}

/// A single scope frame.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    bindings: FxHashMap<String, Value>,
    link: Link,
}

impl Frame {
    pub fn new(link: Link) -> Self {
        Frame {
            bindings: FxHashMap::default(),
            link,
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn link(&self) -> Link {
        self.link
    }

    fn define(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    fn sorted_bindings(&self) -> Vec<(&String, &Value)> {
        let mut bindings: Vec<_> = self.bindings.iter().collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }

    /// Snapshot with bindings sorted by name.
    fn dump(&self, index: usize) -> FrameDump {
        FrameDump {
            index,
            link: self.link,
            bindings: self
                .sorted_bindings()
                .into_iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }
}

/// `({name: value, ...}, link)` with bindings sorted by name. Used by trace output.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("({")?;
        for (i, (name, value)) in self.sorted_bindings().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}, {})", self.link)
    }
}

/// Stack of scope frames.
///
/// The bottom frame exists from construction, has no link, and is never
/// popped. Only the top frame is ever written.
#[derive(Clone, Debug)]
pub struct DictStack {
    frames: Vec<Frame>,
}

impl DictStack {
    pub fn new() -> Self {
        DictStack {
            frames: vec![Frame::new(Link::Unlinked)],
        }
    }

    /// Number of frames, including the bottom frame.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Index of the top frame.
    #[inline]
    pub fn top_index(&self) -> usize {
        self.frames.len() - 1
    }

    #[inline]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn push_frame(&mut self, link: Link) {
        self.frames.push(Frame::new(link));
    }

    /// Pop the top frame. The bottom frame cannot be popped.
    pub fn pop_frame(&mut self) -> EvalResult<Frame> {
        if self.frames.len() <= 1 {
            return Err(dict_underflow());
        }
        self.frames.pop().ok_or_else(dict_underflow)
    }

    /// Bind `name` in the top frame.
    pub fn define(&mut self, name: String, value: Value) {
        let top = self.top_index();
        self.frames[top].define(name, value);
    }

    /// Frames with their indices, top first.
    pub fn iter_top_down(&self) -> impl Iterator<Item = (usize, &Frame)> {
        self.frames.iter().enumerate().rev()
    }

    /// Snapshot of every frame, top first.
    pub fn dump(&self) -> Vec<FrameDump> {
        self.iter_top_down()
            .map(|(index, frame)| frame.dump(index))
            .collect()
    }
}

/// Frames bottom to top, comma separated.
impl fmt::Display for DictStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{frame}")?;
        }
        Ok(())
    }
}

impl Default for DictStack {
    fn default() -> Self {
        Self::new()
    }
}
