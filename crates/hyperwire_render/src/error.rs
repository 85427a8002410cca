//! Render error types

use std::fmt;
use std::io;

/// Error type for building or writing frames
#[derive(Debug)]
pub enum RenderError {
    /// IO error while writing output
    Io(io::Error),
    /// Formatting into the output buffer failed
    Format(fmt::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(err) => write!(f, "Render IO error: {}", err),
            RenderError::Format(err) => write!(f, "Render format error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            RenderError::Format(err) => Some(err),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<fmt::Error> for RenderError {
    fn from(err: fmt::Error) -> Self {
        RenderError::Format(err)
    }
}
