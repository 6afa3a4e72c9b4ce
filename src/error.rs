//! Contains the error types for the library.
//!
//! Every error is terminal for the parse call that produced it: there is
//! no recovery and no partial result. Each variant carries the 1-indexed
//! line and column of the token that violated the rule.

use thiserror::Error;

/// The reason a run of characters could not be tokenized.
#[derive(Debug, PartialEq, Clone, Copy, Error)]
pub enum LexicalErrorKind {
    /// A byte that cannot start any token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// A keyword (`true`, `false`, `null`) that matched only partway.
    #[error("malformed keyword, expected '{0}'")]
    MalformedKeyword(&'static str),
    /// A string literal with no closing quote before the end of input.
    #[error("unterminated string")]
    UnterminatedString,
    /// A `-` sign with no digits after it.
    #[error("malformed number")]
    MalformedNumber,
}

/// The primary error type for all parsing operations.
#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    /// The tokenizer could not recognize the input at the character level.
    #[error("{kind} at line {line}, column {column}")]
    Lexical {
        kind: LexicalErrorKind,
        line: usize,
        column: usize,
    },
    /// A valid token appeared where the grammar does not allow it.
    #[error("expected {expected}, found {found} at line {line}, column {column}")]
    UnexpectedToken {
        found: &'static str,
        expected: &'static str,
        line: usize,
        column: usize,
    },
    /// A complete value was parsed but more tokens followed it.
    #[error("unexpected {found} after parsing ends at line {line}, column {column}")]
    TrailingInput {
        found: &'static str,
        line: usize,
        column: usize,
    },
    /// Nesting went past the configured limit.
    #[error("maximum nesting depth {limit} exceeded at line {line}, column {column}")]
    MaxDepthExceeded {
        limit: usize,
        line: usize,
        column: usize,
    },
}
