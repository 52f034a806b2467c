//! Source loading.
//!
//! A program file becomes one source string: each line loses its
//! terminator and any `%` comment, and lines are joined with single spaces.

use std::io;

use ssps_lexer::strip_comment;

/// A program file that could not be read.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Error in reading file: file does not exist.")]
    NotFound { path: String },
    #[error("Error in reading file: permission denied.")]
    PermissionDenied { path: String },
    #[error("Error in reading file: file is not valid UTF-8.")]
    InvalidData { path: String },
    #[error("Error in reading file: {source}.")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn from_io(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => LoadError::InvalidData { path },
            _ => LoadError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            LoadError::NotFound { path }
            | LoadError::PermissionDenied { path }
            | LoadError::InvalidData { path }
            | LoadError::Io { path, .. } => path,
        }
    }

    /// Fatal report in the same layout as evaluation errors.
    pub fn report(&self) -> String {
        format!(
            "{self}\nProblem Arguments: {}\nExiting program.",
            self.path()
        )
    }
}

/// Read `path` and flatten it into one source string.
pub fn load_source(path: &str) -> Result<String, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    tracing::debug!(path, bytes = text.len(), "loaded program");
    Ok(join_lines(&text))
}

/// Strip comments line by line and join the lines with single spaces.
pub fn join_lines(text: &str) -> String {
    text.lines().map(strip_comment).collect::<Vec<_>>().join(" ")
}
