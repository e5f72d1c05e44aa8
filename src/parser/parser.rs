//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct: token lookahead, the prefix and
//! infix dispatch tables, helper methods, and the program entry point.
//!
//! # Parser Architecture
//!
//! Parser methods are split across files using `impl Parser` blocks:
//! - This module: Parser state, dispatch tables, token helpers
//! - `statements`: `let`, `return`, expression statements and blocks
//! - `expressions`: precedence climbing and every prefix/infix handler
//!
//! Every parse function returns `Option`. `None` means the construct could
//! not be built and a diagnostic has already been recorded; callers check for
//! it (usually with `?`) before using a result.

use crate::parser::ast::*;
use crate::parser::diagnostics::{Diagnostics, ParseError};
use crate::parser::lexer::{Lexer, Token, TokenKind, TokenSource};
use rustc_hash::FxHashMap;

/// Binding power of operators, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -X or !X
    Call,        // myFunction(X)
}

impl Precedence {
    /// Precedence of a token when it appears in infix position
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// Deepest expression nesting the parser will follow before giving up
/// on the statement.
pub const MAX_EXPRESSION_DEPTH: usize = 128;

/// Parser behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Report end of input inside `{ ... }` instead of accepting the
    /// truncated block.
    pub strict_blocks: bool,
}

pub(crate) type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<Expression>;
pub(crate) type InfixParseFn<S> = fn(&mut Parser<S>, Expression) -> Option<Expression>;

/// Pratt parser for Monkey
pub struct Parser<S: TokenSource = Lexer> {
    pub(crate) tokens: S,
    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
    pub(crate) errors: Diagnostics,
    pub(crate) options: ParserOptions,
    pub(crate) depth: usize,
    prefix_parse_fns: FxHashMap<TokenKind, PrefixParseFn<S>>,
    infix_parse_fns: FxHashMap<TokenKind, InfixParseFn<S>>,
}

impl Parser<Lexer> {
    pub fn new(source: &str) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    pub fn with_options(source: &str, options: ParserOptions) -> Self {
        Parser::from_tokens(Lexer::new(source), options)
    }
}

impl<S: TokenSource> Parser<S> {
    /// Build a parser over any token source. Reads two tokens to fill
    /// `cur_token` and `peek_token`.
    pub fn from_tokens(mut tokens: S, options: ParserOptions) -> Self {
        let cur_token = tokens.next_token();
        let peek_token = tokens.next_token();

        let mut parser = Self {
            tokens,
            cur_token,
            peek_token,
            errors: Diagnostics::new(),
            options,
            depth: 0,
            prefix_parse_fns: FxHashMap::default(),
            infix_parse_fns: FxHashMap::default(),
        };

        parser.register_prefix(TokenKind::Ident, Self::parse_identifier);
        parser.register_prefix(TokenKind::Int, Self::parse_integer_literal);
        parser.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::True, Self::parse_boolean);
        parser.register_prefix(TokenKind::False, Self::parse_boolean);
        parser.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);
        parser.register_prefix(TokenKind::If, Self::parse_if_expression);
        parser.register_prefix(TokenKind::Function, Self::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            parser.register_infix(kind, Self::parse_infix_expression);
        }
        parser.register_infix(TokenKind::LParen, Self::parse_call_expression);

        parser
    }

    /// Parse the entire program. Malformed statements are skipped after
    /// recording their diagnostics; parsing always reaches end of input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(stmt) => program.statements.push(stmt),
                None => self.skip_to_statement_end(),
            }
            self.next_token();
        }

        program
    }

    /// Drop the rest of a malformed statement so the next one starts clean.
    /// Stops on the `;` that ends it, or just before a `let`/`return` that
    /// begins the next statement.
    fn skip_to_statement_end(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon)
            && !self.cur_token_is(TokenKind::Eof)
            && !self.peek_token_is(TokenKind::Let)
            && !self.peek_token_is(TokenKind::Return)
        {
            self.next_token();
        }
    }

    /// Diagnostics recorded so far
    pub fn errors(&self) -> &Diagnostics {
        &self.errors
    }

    pub fn into_errors(self) -> Diagnostics {
        self.errors
    }

    // ===== Dispatch tables =====

    fn register_prefix(&mut self, kind: TokenKind, f: PrefixParseFn<S>) {
        self.prefix_parse_fns.insert(kind, f);
    }

    fn register_infix(&mut self, kind: TokenKind, f: InfixParseFn<S>) {
        self.infix_parse_fns.insert(kind, f);
    }

    pub(crate) fn prefix_parse_fn(&self, kind: TokenKind) -> Option<PrefixParseFn<S>> {
        self.prefix_parse_fns.get(&kind).copied()
    }

    pub(crate) fn infix_parse_fn(&self, kind: TokenKind) -> Option<InfixParseFn<S>> {
        self.infix_parse_fns.get(&kind).copied()
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.tokens.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(crate) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    pub(crate) fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    /// Advance if the lookahead has the given kind, otherwise record a
    /// diagnostic and stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.errors.push(ParseError::unexpected(kind, &self.peek_token));
            None
        }
    }
}

/// Parse everything `tokens` produces.
pub fn parse_program<S: TokenSource>(tokens: S) -> (Program, Diagnostics) {
    parse_program_with(tokens, ParserOptions::default())
}

pub fn parse_program_with<S: TokenSource>(tokens: S, options: ParserOptions) -> (Program, Diagnostics) {
    let mut parser = Parser::from_tokens(tokens, options);
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Tokenize and parse `source` in one go.
pub fn parse(source: &str) -> (Program, Diagnostics) {
    parse_program(Lexer::new(source))
}
