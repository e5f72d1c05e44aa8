//! Expression parsing implementation
//!
//! Pratt (precedence climbing) parsing driven by the dispatch tables that
//! [`Parser::from_tokens`] fills in. A prefix handler starts an expression
//! from the current token; an infix handler receives the expression parsed so
//! far and extends it.
//!
//! # Precedence
//!
//! Binary handlers parse their right operand with their own precedence as the
//! bound, so chains of equal precedence associate to the left. Unary handlers
//! use [`Precedence::Prefix`], so `-a * b` is `((-a) * b)`. A `(` in infix
//! position is a call and binds tightest.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::diagnostics::ParseError;
use crate::parser::lexer::{TokenKind, TokenSource};
use crate::parser::parser::{Parser, Precedence, MAX_EXPRESSION_DEPTH};

impl<S: TokenSource> Parser<S> {
    /// Parse an expression whose operators all bind tighter than `precedence`
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let outer = self.depth;
        self.enter_nested(self.cur_token.location)?;
        let expr = self.parse_expression_at(precedence);
        self.depth = outer;
        expr
    }

    /// Count one more level of tree height, refusing past the limit.
    /// Left-leaning operator chains count too since they nest just as deep.
    fn enter_nested(&mut self, location: SourceLocation) -> Option<()> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            self.errors.push(ParseError::NestingTooDeep {
                limit: MAX_EXPRESSION_DEPTH,
                location,
            });
            return None;
        }
        self.depth += 1;
        Some(())
    }

    fn parse_expression_at(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fn(self.cur_token.kind) else {
            self.errors.push(ParseError::NoPrefixParseFn {
                kind: self.cur_token.kind,
                location: self.cur_token.location,
            });
            return None;
        };

        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fn(self.peek_token.kind) else {
                return Some(left);
            };
            self.enter_nested(self.peek_token.location)?;
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    // ===== Prefix handlers =====

    pub(crate) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(
            self.cur_token.literal.clone(),
        )))
    }

    /// Decimal digits, or octal when the literal has a leading `0`
    pub(crate) fn parse_integer_literal(&mut self) -> Option<Expression> {
        let literal = self.cur_token.literal.as_str();
        let value = match literal.strip_prefix('0') {
            Some(octal) if !octal.is_empty() => i64::from_str_radix(octal, 8),
            _ => literal.parse::<i64>(),
        };

        match value {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                self.errors.push(ParseError::InvalidInteger {
                    literal: self.cur_token.literal.clone(),
                    location: self.cur_token.location,
                });
                None
            }
        }
    }

    pub(crate) fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.cur_token_is(TokenKind::True)))
    }

    /// -x, !x
    pub(crate) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = PrefixOperator::from_token(self.cur_token.kind)?;
        self.next_token();

        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix {
            operator,
            operand: Box::new(operand),
        })
    }

    /// ( expr )
    pub(crate) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Some(expr)
    }

    /// if (cond) { ... } [else { ... }]
    pub(crate) fn parse_if_expression(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// fn(a, b) { ... }
    pub(crate) fn parse_function_literal(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Some(Expression::FunctionLiteral { parameters, body })
    }

    /// Parameter list after `(`, through the closing `)`
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.cur_token.literal.clone()));

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.cur_token.literal.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    // ===== Infix handlers =====

    /// left OP right
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = InfixOperator::from_token(self.cur_token.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// callee(args...)
    pub(crate) fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    /// Argument list after `(`, through the closing `)`
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(arguments)
    }
}
