//! Raw tokens produced by logos, before condensing.

use logos::Logos;

/// Raw token from logos.
///
/// `Other` catches any single non-whitespace character not claimed by a
/// longer or higher-priority pattern (`=`, `-`, `/` on its own, ...).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"%[^\n]*")]
    Comment,

    #[regex(r"/[a-zA-Z][a-zA-Z0-9_]*")]
    NameLiteral,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", priority = 3)]
    Ident,

    #[regex(r"-?[0-9]+", priority = 3)]
    Int,

    #[regex(r"-?[0-9]+\.[0-9]+", priority = 3)]
    Float,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[regex(r"[^ \t\r\n\f]", priority = 1)]
    Other,
}

/// A raw token with its source text and starting byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawLexeme<'src> {
    pub kind: RawToken,
    pub text: &'src str,
    pub offset: usize,
}

/// Scan `source` into raw lexemes.
///
/// Returns the offset of the first unrecognised byte on failure.
pub(crate) fn scan(source: &str) -> Result<Vec<RawLexeme<'_>>, usize> {
    let mut lexer = RawToken::lexer(source);
    let mut out = Vec::new();
    while let Some(next) = lexer.next() {
        let span = lexer.span();
        match next {
            Ok(kind) => out.push(RawLexeme {
                kind,
                text: lexer.slice(),
                offset: span.start,
            }),
            Err(()) => return Err(span.start),
        }
    }
    Ok(out)
}
