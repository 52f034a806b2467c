//! Lexer error types.

/// A lexical error. Offsets are byte positions in the text being lexed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexError {
    /// `}` with no open procedure.
    #[error("unmatched '}}' at byte {offset}")]
    UnmatchedClose { offset: usize },
    /// `{` never closed before end of input.
    #[error("procedure opened at byte {offset} is never closed")]
    UnclosedProcedure { offset: usize },
    /// Integer literal outside the signed 64-bit range.
    #[error("integer literal '{text}' at byte {offset} is out of range")]
    IntegerOutOfRange { text: String, offset: usize },
    #[error("unrecognized input at byte {offset}")]
    UnrecognizedInput { offset: usize },
}
