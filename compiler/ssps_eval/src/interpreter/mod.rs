//! Token-driven evaluator.
//!
//! One [`Interpreter`] owns both stacks for a whole run. Procedure calls
//! and conditional bodies recurse through [`Interpreter::interpret`]; every
//! error returned from a step gets a [`StackDump`] attached on the way out,
//! so the dump reflects the innermost frame that was live when it failed.

mod call;
mod control;
mod frame_guard;
mod operators;

use ssps_lexer::{lex, Token};

use crate::call_stack::CallStack;
use crate::config::EvalConfig;
use crate::dict_stack::DictStack;
use crate::errors::{float_operand, EvalError, EvalResult};
use crate::operand_stack::OperandStack;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::report::{render_fatal, StackDump};
use crate::value::Value;

pub use frame_guard::ProcedureFrame;

const INTERPRET_HEADER: &str = "=======================Interpreting Code=======================";

pub struct Interpreter {
    operands: OperandStack,
    dicts: DictStack,
    config: EvalConfig,
    call_stack: CallStack,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new(config: EvalConfig) -> Self {
        Self::with_print_handler(config, stdout_handler())
    }

    pub fn with_print_handler(config: EvalConfig, print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            operands: OperandStack::new(),
            dicts: DictStack::new(),
            call_stack: CallStack::new(config.max_depth),
            config,
            print_handler,
        }
    }

    /// Run a whole program.
    ///
    /// The first error stops the run; output emitted before it stays.
    pub fn run(&mut self, source: &str) -> EvalResult {
        tracing::debug!(
            scoping = %self.config.scoping,
            trace = self.config.trace,
            bytes = source.len(),
            "running program"
        );
        self.interpret(source)
    }

    /// Print the fatal report for `err` to the output channel.
    pub fn report_fatal(&self, err: &EvalError) {
        self.print_handler.println(&render_fatal(err));
    }

    /// Lex `code` and evaluate its tokens in the current frame.
    pub fn interpret(&mut self, code: &str) -> EvalResult {
        if self.config.trace {
            self.trace(INTERPRET_HEADER);
            self.trace(&format!("Code: \"{code}\""));
            self.trace(&format!("Operand stack: {}", self.operands));
            self.trace(&format!("Dictionary stack: {}", self.dicts));
            self.trace(&format!("Top dictionary: {}", self.top_frame_text()));
            self.trace("");
        }

        let tokens = lex(code).map_err(|e| EvalError::from(e).with_dump(|| self.snapshot()))?;
        for token in tokens {
            tracing::trace!(%token, "step");
            self.step(token)
                .map_err(|e| e.with_dump(|| self.snapshot()))?;
        }
        Ok(())
    }

    fn step(&mut self, token: Token) -> EvalResult {
        match token {
            Token::Int(n) => self.operands.push(Value::Int(n)),
            Token::Bool(b) => self.operands.push(Value::Bool(b)),
            Token::Name(name) => self.operands.push(Value::Name(name)),
            Token::Procedure(body) => self.operands.push(Value::Procedure(body)),
            Token::Float(text) => return Err(float_operand(&text)),
            Token::Operator(op) => return self.apply(op),
            Token::Ident(name) => return self.call(&name),
        }
        Ok(())
    }

    /// Owned snapshot of both stacks and the active calls.
    pub fn snapshot(&self) -> StackDump {
        StackDump {
            operands: self.operands.iter_top_down().cloned().collect(),
            frames: self.dicts.dump(),
            show_links: self.config.shows_links(),
            calls: self.call_stack.names().to_vec(),
        }
    }

    /// Emit a trace line. Callers check `config.trace` first.
    fn trace(&self, line: &str) {
        self.print_handler.println(line);
    }

    fn top_frame_text(&self) -> String {
        self.dicts
            .frame(self.dicts.top_index())
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
