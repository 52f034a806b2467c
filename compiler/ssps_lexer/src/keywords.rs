//! Keyword resolution.
//!
//! logos lexes every word as an identifier; reserved spellings are promoted
//! to operator or boolean tokens here. `=` arrives as a single-character
//! `Other` lexeme and is resolved through the same table.

use crate::token::{Operator, Token};

/// Look up a reserved word.
///
/// Returns `None` for ordinary identifiers.
pub fn lookup(text: &str) -> Option<Token> {
    let op = match text {
        "add" => Operator::Add,
        "sub" => Operator::Sub,
        "mul" => Operator::Mul,
        "div" => Operator::Div,
        "eq" => Operator::Eq,
        "lt" => Operator::Lt,
        "gt" => Operator::Gt,
        "and" => Operator::And,
        "or" => Operator::Or,
        "not" => Operator::Not,
        "if" => Operator::If,
        "ifelse" => Operator::IfElse,
        "dup" => Operator::Dup,
        "exch" => Operator::Exch,
        "pop" => Operator::Pop,
        "stack" => Operator::Stack,
        "=" => Operator::Top,
        "def" => Operator::Def,
        "true" => return Some(Token::Bool(true)),
        "false" => return Some(Token::Bool(false)),
        _ => return None,
    };
    Some(Token::Operator(op))
}
