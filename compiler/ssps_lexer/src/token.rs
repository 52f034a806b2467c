//! Condensed tokens consumed by the evaluator.

use std::fmt;

/// Built-in operator keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Lt,
    Gt,
    And,
    Or,
    Not,
    If,
    IfElse,
    Dup,
    Exch,
    Pop,
    Stack,
    /// `=`: pop and print the top operand.
    Top,
    Def,
}

impl Operator {
    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Eq => "eq",
            Operator::Lt => "lt",
            Operator::Gt => "gt",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::If => "if",
            Operator::IfElse => "ifelse",
            Operator::Dup => "dup",
            Operator::Exch => "exch",
            Operator::Pop => "pop",
            Operator::Stack => "stack",
            Operator::Top => "=",
            Operator::Def => "def",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical unit after condensing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Signed integer literal.
    Int(i64),
    /// Floating-point literal. The language has no floats; the evaluator
    /// rejects these when it tries to push them.
    Float(String),
    /// `true` / `false`.
    Bool(bool),
    /// Name literal, stored without its leading `/`.
    Name(String),
    Operator(Operator),
    /// Any other identifier: evaluated as a procedure call.
    Ident(String),
    /// Inner text of an outermost `{ ... }` block.
    Procedure(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{n}"),
            Token::Float(text) | Token::Ident(text) => f.write_str(text),
            Token::Bool(b) => write!(f, "{b}"),
            Token::Name(name) => write!(f, "/{name}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Procedure(body) => write!(f, "{{{body}}}"),
        }
    }
}
