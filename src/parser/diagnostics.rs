//! Parse diagnostics
//!
//! This module defines [`ParseError`], one non-fatal problem found while
//! parsing, and [`Diagnostics`], the ordered list a parse accumulates.
//!
//! None of these abort parsing. A parse always runs to the end of input and
//! hands back whatever AST it could build together with every diagnostic; a
//! non-empty list means that AST must not be trusted.

use super::ast::SourceLocation;
use super::lexer::{Token, TokenKind};
use thiserror::Error;

/// A single parse diagnostic. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A mandatory token was missing at a fixed grammar position
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        location: SourceLocation,
    },

    /// The current token cannot start an expression
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn {
        kind: TokenKind,
        location: SourceLocation,
    },

    /// Integer literal text does not fit in an `i64`
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger {
        literal: String,
        location: SourceLocation,
    },

    /// Expression nesting exceeded [`MAX_EXPRESSION_DEPTH`]
    ///
    /// [`MAX_EXPRESSION_DEPTH`]: super::parser::MAX_EXPRESSION_DEPTH
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },

    /// End of input inside `{ ... }` (strict mode only)
    #[error("expected next token to be }}, got EOF instead")]
    UnterminatedBlock { location: SourceLocation },
}

impl ParseError {
    pub(crate) fn unexpected(expected: TokenKind, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: found.kind,
            location: found.location,
        }
    }

    /// Get the source location this diagnostic points at
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::NoPrefixParseFn { location, .. }
            | ParseError::InvalidInteger { location, .. }
            | ParseError::NestingTooDeep { location, .. }
            | ParseError::UnterminatedBlock { location } => *location,
        }
    }
}

/// Ordered collection of diagnostics for one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<ParseError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.errors.iter()
    }

    /// Rendered messages, in the order they were recorded
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl IntoIterator for Diagnostics {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let loc = SourceLocation::new(1, 5);
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(ParseError::UnexpectedToken {
            expected: TokenKind::Ident,
            found: TokenKind::Assign,
            location: loc,
        });
        diagnostics.push(ParseError::NoPrefixParseFn {
            kind: TokenKind::RParen,
            location: loc,
        });
        diagnostics.push(ParseError::InvalidInteger {
            literal: "99999999999999999999".to_string(),
            location: loc,
        });
        diagnostics.push(ParseError::NestingTooDeep {
            limit: 128,
            location: loc,
        });
        diagnostics.push(ParseError::UnterminatedBlock { location: loc });

        assert_eq!(
            diagnostics.messages(),
            vec![
                "expected next token to be IDENT, got = instead",
                "no prefix parse function for ) found",
                "could not parse \"99999999999999999999\" as integer",
                "expression nested deeper than 128 levels",
                "expected next token to be }, got EOF instead",
            ]
        );
        assert_eq!(diagnostics.len(), 5);
        assert!(diagnostics.iter().all(|e| e.location() == loc));
    }
}
