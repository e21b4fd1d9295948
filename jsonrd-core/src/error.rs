//! The single structured failure type raised by either stage.
//!
//! Both the lexer and the parser fail fast: the first error aborts the
//! whole read and propagates to the caller unchanged. There is no
//! recovery and no partial value tree alongside an error.

use std::fmt;

/// A positioned syntax error.
///
/// `line` is 1-based; `col` is the 0-based character offset from the most
/// recent line start. The position points at the exact offending character
/// or token, even when detected partway through a multi-character lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub col: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn new(line: usize, col: usize, message: impl Into<String>) -> Self {
        SyntaxError {
            line,
            col,
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.message, self.line, self.col)
    }
}

impl std::error::Error for SyntaxError {}

/// Result alias threaded through both stages.
pub type Result<T> = std::result::Result<T, SyntaxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_position() {
        let err = SyntaxError::new(3, 14, "Invalid character");
        assert_eq!(err.to_string(), "Invalid character at line 3, column 14");
    }
}
