//! Statement parsing implementation
//!
//! Handles `let`, `return`, expression statements and `{ ... }` blocks.
//! A trailing `;` is consumed when present but never required, so one-line
//! inputs such as `let x = 5` parse cleanly.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::diagnostics::ParseError;
use crate::parser::lexer::{TokenKind, TokenSource};
use crate::parser::parser::{Parser, Precedence};

impl<S: TokenSource> Parser<S> {
    /// Parse a statement starting at the current token
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// let <ident> = <expr> [;]
    fn parse_let_statement(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cur_token.literal.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Let { name, value })
    }

    /// return <expr> [;]
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Expression { expr })
    }

    /// Parse statements up to the closing `}`. The current token is the
    /// opening `{`; on return it is the `}` (or `Eof`).
    pub(crate) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
            }
            self.next_token();
        }

        if self.options.strict_blocks && self.cur_token_is(TokenKind::Eof) {
            self.errors.push(ParseError::UnterminatedBlock {
                location: self.cur_token.location,
            });
            return None;
        }

        Some(block)
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parser::{parse, Parser, ParserOptions};

    #[test]
    fn test_let_statements() {
        let (program, errors) = parse("let x = 5;\nlet y = true;\nlet foobar = y;");

        assert!(errors.is_empty(), "{:?}", errors.messages());
        assert_eq!(program.statements.len(), 3);

        let expected = [
            ("x", Expression::IntegerLiteral(5)),
            ("y", Expression::Boolean(true)),
            ("foobar", Expression::Identifier(Identifier::new("y"))),
        ];
        for (stmt, (name, value)) in program.statements.iter().zip(expected) {
            match stmt {
                Statement::Let { name: n, value: v } => {
                    assert_eq!(n.name, name);
                    assert_eq!(*v, value);
                }
                other => panic!("Expected let statement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_let_without_semicolon() {
        let (with, _) = parse("let x = 5;");
        let (without, errors) = parse("let x = 5");

        assert!(errors.is_empty());
        assert_eq!(with, without);
    }

    #[test]
    fn test_return_statements() {
        let (program, errors) = parse("return 5; return 10\nreturn add(1, 2);");

        assert!(errors.is_empty(), "{:?}", errors.messages());
        assert_eq!(program.statements.len(), 3);
        assert!(program
            .statements
            .iter()
            .all(|s| matches!(s, Statement::Return { .. })));
        assert_eq!(program.to_string(), "return 5;return 10;return add(1, 2);");
    }

    #[test]
    fn test_let_errors() {
        let (program, errors) = parse("let x 5;");
        assert!(program.statements.is_empty());
        assert_eq!(
            errors.messages(),
            vec!["expected next token to be =, got INT instead"]
        );

        let (program, errors) = parse("let 838383;");
        assert!(program.statements.is_empty());
        assert_eq!(
            errors.messages(),
            vec!["expected next token to be IDENT, got INT instead"]
        );
    }

    #[test]
    fn test_let_with_missing_value() {
        let (program, errors) = parse("let x = ;");

        assert!(program.statements.is_empty());
        assert_eq!(errors.messages(), vec!["no prefix parse function for ; found"]);
    }

    #[test]
    fn test_unterminated_block_permissive() {
        let (program, errors) = parse("if (x) { y");

        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn test_unterminated_block_strict() {
        let mut parser = Parser::with_options(
            "if (x) { y",
            ParserOptions {
                strict_blocks: true,
            },
        );
        let program = parser.parse_program();

        assert!(program.statements.is_empty());
        assert_eq!(
            parser.errors().messages(),
            vec!["expected next token to be }, got EOF instead"]
        );
    }

    #[test]
    fn test_bad_statement_inside_block_is_dropped() {
        let (program, errors) = parse("fn() { ) x }");

        assert_eq!(errors.messages(), vec!["no prefix parse function for ) found"]);
        match &program.statements[0] {
            Statement::Expression {
                expr: Expression::FunctionLiteral { body, .. },
            } => {
                assert_eq!(body.statements.len(), 1);
                assert_eq!(body.to_string(), "x");
            }
            other => panic!("Expected function literal, got {:?}", other),
        }
    }
}
