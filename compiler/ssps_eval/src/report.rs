//! Stack dumps and fatal-error rendering.
//!
//! A [`StackDump`] is an owned snapshot of both stacks. The `stack`
//! operator prints one, and every [`EvalError`] carries the one taken
//! where it was raised.

use std::fmt;

use crate::dict_stack::Link;
use crate::errors::EvalError;
use crate::value::Value;

const RULE: &str = "==============";

/// Snapshot of one dictionary frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameDump {
    pub index: usize,
    pub link: Link,
    /// Bindings sorted by name.
    pub bindings: Vec<(String, Value)>,
}

/// Snapshot of the operand and dictionary stacks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackDump {
    /// Operands, top first.
    pub operands: Vec<Value>,
    /// Frames, top first.
    pub frames: Vec<FrameDump>,
    /// Print frame links (static scoping only).
    pub show_links: bool,
    /// Active procedure calls, outermost first. Not part of the `stack`
    /// operator's output.
    pub calls: Vec<String>,
}

impl fmt::Display for StackDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for operand in &self.operands {
            writeln!(f, "{operand}")?;
        }
        writeln!(f, "{RULE}")?;
        for frame in &self.frames {
            if self.show_links {
                writeln!(f, "---- {} ---- {} ----", frame.index, frame.link)?;
            } else {
                writeln!(f, "---- {} ----", frame.index)?;
            }
            for (name, value) in &frame.bindings {
                writeln!(f, "{name} [{value}]")?;
            }
        }
        write!(f, "{RULE}")
    }
}

/// Render the full fatal-error report.
///
/// Layout: headline, implicated operands, call chain (when inside a
/// procedure), the stack dump, and a closing line.
pub fn render_fatal(err: &EvalError) -> String {
    let mut out = String::new();
    out.push_str(&err.to_string());
    out.push('\n');
    if !err.operands.is_empty() {
        let operands: Vec<String> = err.operands.iter().map(ToString::to_string).collect();
        out.push_str("Problem Arguments: ");
        out.push_str(&operands.join(", "));
        out.push('\n');
    }
    if let Some(dump) = &err.dump {
        if !dump.calls.is_empty() {
            out.push_str("Call Chain: ");
            out.push_str(&dump.calls.join(" > "));
            out.push('\n');
        }
        out.push_str(&dump.to_string());
        out.push('\n');
    }
    out.push_str("Exiting program.");
    out
}
