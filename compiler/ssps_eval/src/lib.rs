//! SSPS Eval - stack machine and evaluator for SSPS programs.
//!
//! # Architecture
//!
//! - `OperandStack`: LIFO of [`Value`]s, the only data path between operators
//! - `DictStack`: scope frames, one pushed per procedure call
//! - `scope`: dynamic (top-down scan) and static (link chain) name resolution
//! - `Interpreter`: token dispatch and recursive procedure invocation
//!
//! Every error is fatal. Errors propagate with `?` to [`Interpreter::run`],
//! carrying a [`StackDump`] captured where they were raised.

mod call_stack;
mod config;
mod dict_stack;
pub mod errors;
pub mod interpreter;
mod operand_stack;
mod print_handler;
mod report;
pub mod scope;
mod stack;
mod value;

pub use call_stack::CallStack;
pub use config::EvalConfig;
pub use dict_stack::{DictStack, Frame, Link};
pub use errors::{EvalError, EvalErrorKind, EvalResult, Mismatch};
pub use interpreter::Interpreter;
pub use operand_stack::OperandStack;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
};
pub use report::{render_fatal, FrameDump, StackDump};
pub use scope::Scoping;
pub use stack::ensure_sufficient_stack;
pub use value::Value;
