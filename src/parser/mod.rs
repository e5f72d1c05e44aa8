//! Monkey source code parser
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens, pulled on demand)
//! - [`parser`]: Parsing (tokens → AST) with prefix/infix dispatch tables
//! - [`ast`]: AST node definitions and their canonical text
//! - [`diagnostics`]: Non-fatal parse errors collected during a parse
//!
//! # Grammar
//!
//! - Statements: `let <ident> = <expr>`, `return <expr>`, expression statements;
//!   a trailing `;` is optional
//! - Expressions: identifiers, integers, `true`/`false`, unary `-` and `!`,
//!   binary `+ - * / < > == !=`, grouping, `if`/`else`, `fn(...) { ... }`,
//!   calls
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser with two tokens of lookahead.
//! No external parser generator dependencies.

pub mod ast;
pub mod diagnostics;
mod expressions;
pub mod lexer;
pub mod parser;
mod statements;

pub use diagnostics::{Diagnostics, ParseError};
pub use lexer::{tokenize, Lexer, Token, TokenKind, TokenSource};
pub use parser::{parse, parse_program, parse_program_with, Parser, ParserOptions, Precedence};
