//! Procedure condensing.
//!
//! Collapses every outermost balanced `{ ... }` run into one
//! [`Token::Procedure`]. Nested braces stay in the body as text; body
//! lexemes are re-joined with single spaces. Comments are dropped in both
//! positions.

use crate::keywords;
use crate::lex_error::LexError;
use crate::raw_token::{scan, RawLexeme, RawToken};
use crate::token::Token;

/// Tokenize and condense `source`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let raw = scan(source).map_err(|offset| LexError::UnrecognizedInput { offset })?;

    let mut tokens = Vec::with_capacity(raw.len());
    let mut depth = 0usize;
    let mut open_offset = 0;
    let mut body: Vec<&str> = Vec::new();

    for lexeme in raw {
        if depth > 0 {
            match lexeme.kind {
                RawToken::Comment => continue,
                RawToken::LBrace => depth += 1,
                RawToken::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        tokens.push(Token::Procedure(body.join(" ")));
                        body.clear();
                        continue;
                    }
                }
                _ => {}
            }
            body.push(lexeme.text);
            continue;
        }

        let token = match lexeme.kind {
            RawToken::Comment => continue,
            RawToken::LBrace => {
                depth = 1;
                open_offset = lexeme.offset;
                continue;
            }
            RawToken::RBrace => {
                return Err(LexError::UnmatchedClose {
                    offset: lexeme.offset,
                });
            }
            RawToken::Int => int_literal(&lexeme)?,
            RawToken::Float => Token::Float(lexeme.text.to_string()),
            RawToken::NameLiteral => {
                let name = lexeme.text.strip_prefix('/').unwrap_or(lexeme.text);
                Token::Name(name.to_string())
            }
            RawToken::Ident | RawToken::Other => word(lexeme.text),
        };
        tokens.push(token);
    }

    if depth > 0 {
        return Err(LexError::UnclosedProcedure {
            offset: open_offset,
        });
    }
    Ok(tokens)
}

fn int_literal(lexeme: &RawLexeme<'_>) -> Result<Token, LexError> {
    lexeme
        .text
        .parse::<i64>()
        .map(Token::Int)
        .map_err(|_| LexError::IntegerOutOfRange {
            text: lexeme.text.to_string(),
            offset: lexeme.offset,
        })
}

/// Operator keyword, boolean, or plain identifier.
fn word(text: &str) -> Token {
    keywords::lookup(text).unwrap_or_else(|| Token::Ident(text.to_string()))
}
