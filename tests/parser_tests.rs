// Integration tests for the Monkey parser

use monkey::parser::ast::*;
use monkey::parser::{parse, parse_program, tokenize, Parser, ParserOptions, TokenKind};

fn canonical(source: &str) -> String {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "{}: {:?}", source, errors.messages());
    program.to_string()
}

#[test]
fn test_precedence_properties() {
    assert_eq!(canonical("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(canonical("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(canonical("-a * b"), "((-a) * b)");
    assert_eq!(canonical("a + b + c"), "((a + b) + c)");
}

#[test]
fn test_let_with_and_without_semicolon() {
    for source in ["let x = 5;", "let x = 5"] {
        let (program, errors) = parse(source);
        assert!(errors.is_empty());
        assert_eq!(
            program.statements,
            vec![Statement::Let {
                name: Identifier::new("x"),
                value: Expression::IntegerLiteral(5),
            }]
        );
    }
}

#[test]
fn test_if_else_blocks() {
    let (program, errors) = parse("if (x < y) { x } else { y }");
    assert!(errors.is_empty());

    let Statement::Expression {
        expr:
            Expression::If {
                consequence,
                alternative: Some(alternative),
                ..
            },
    } = &program.statements[0]
    else {
        panic!("Expected if/else expression, got {:?}", program.statements);
    };

    assert_eq!(
        consequence.statements,
        vec![Statement::Expression {
            expr: Expression::Identifier(Identifier::new("x")),
        }]
    );
    assert_eq!(
        alternative.statements,
        vec![Statement::Expression {
            expr: Expression::Identifier(Identifier::new("y")),
        }]
    );
}

#[test]
fn test_function_literal_and_call() {
    let (program, errors) = parse("fn(x, y) { x + y; }");
    assert!(errors.is_empty());
    assert!(matches!(
        &program.statements[0],
        Statement::Expression {
            expr: Expression::FunctionLiteral { parameters, body },
        } if parameters.len() == 2 && body.statements.len() == 1
    ));

    let (program, errors) = parse("add(1, 2 * 3, 4 + 5)");
    assert!(errors.is_empty());
    match &program.statements[0] {
        Statement::Expression {
            expr: Expression::Call { callee, arguments },
        } => {
            assert_eq!(**callee, Expression::Identifier(Identifier::new("add")));
            assert_eq!(arguments.len(), 3);
        }
        other => panic!("Expected call expression, got {:?}", other),
    }
}

#[test]
fn test_missing_let_identifier() {
    let (program, errors) = parse("let = 5;");

    assert!(program.statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.messages()[0],
        "expected next token to be IDENT, got = instead"
    );
}

#[test]
fn test_bare_rparen_has_no_prefix_function() {
    let (program, errors) = parse(")");

    assert!(program.statements.is_empty());
    assert_eq!(errors.messages(), vec!["no prefix parse function for ) found"]);
}

#[test]
fn test_canonical_form_is_stable() {
    let sources = [
        "1 + 2 * 3",
        "-a * b",
        "!-a == !true",
        "a + b * c + d / e - f",
        "5 > 4 == 3 < 4",
        "3 + 4 * 5 == 3 * 1 + 4 * 5",
        "-(5 + 5) * -x / y",
        "!(true == false) != !false",
        "a * (b + (c - d)) < e",
        "x",
        "42",
    ];

    for source in sources {
        let first = canonical(source);
        let second = canonical(&first);
        assert_eq!(first, second, "{}", source);
        assert_eq!(canonical(&second), second, "{}", source);
    }
}

#[test]
fn test_errors_do_not_stop_later_statements() {
    let (program, errors) = parse("let x 5; let y = 10; ); return y;");

    assert_eq!(
        errors.messages(),
        vec![
            "expected next token to be =, got INT instead",
            "no prefix parse function for ) found",
        ]
    );
    assert_eq!(program.to_string(), "let y = 10;return y;");
}

#[test]
fn test_diagnostic_locations() {
    let (_, errors) = parse("let a = 1;\nlet = 2;");
    let error = errors.iter().next().expect("missing diagnostic");

    assert_eq!(error.location(), SourceLocation::new(2, 5));
}

#[test]
fn test_pre_tokenized_input() {
    let tokens: Vec<_> = tokenize("fn(a) { a * 2 }(3)").collect();
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

    let (program, errors) = parse_program(tokens.into_iter());
    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "fn(a) (a * 2)(3)");
}

#[test]
fn test_strict_blocks_option() {
    let source = "fn(x) { x";

    let mut lenient = Parser::new(source);
    assert_eq!(lenient.parse_program().statements.len(), 1);
    assert!(lenient.errors().is_empty());

    let mut strict = Parser::with_options(
        source,
        ParserOptions {
            strict_blocks: true,
        },
    );
    assert!(strict.parse_program().statements.is_empty());
    assert_eq!(strict.errors().len(), 1);
}
