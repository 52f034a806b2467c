//! Comment stripping for line-oriented loaders.
//!
//! Loaders join source lines with spaces before lexing, which would let a
//! `%` comment swallow every following line. Stripping per line first keeps
//! comments line-scoped.

/// Return `line` with any `%` comment removed.
pub fn strip_comment(line: &str) -> &str {
    match line.find('%') {
        Some(start) => &line[..start],
        None => line,
    }
}
