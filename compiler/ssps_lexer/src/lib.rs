//! SSPS Lexer - tokenizer and procedure condenser.
//!
//! Lexing happens in two passes:
//! 1. `raw_token`: logos splits source text into atomic tokens.
//! 2. `condense`: outermost `{ ... }` runs collapse into a single
//!    [`Token::Procedure`] carrying the inner source text.
//!
//! Procedure text is re-lexed when the procedure is invoked, so a body is
//! never validated beyond brace balance until it runs.

mod comments;
mod condense;
mod keywords;
mod lex_error;
mod raw_token;
mod token;

pub use comments::strip_comment;
pub use condense::lex;
pub use lex_error::LexError;
pub use token::{Operator, Token};
