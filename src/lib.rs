//! # Introduction
//!
//! A front-end for Monkey, a small expression-oriented toy language. Source
//! text is tokenized, parsed with a Pratt parser into an AST, and the AST can
//! be printed back in a canonical, fully parenthesized form.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → (Program, Diagnostics) → canonical text
//! ```
//!
//! 1. [`parser`] — tokenizer, parser, AST and diagnostics.
//! 2. [`repl`] — line-reading shell used by the `monkey` binary; not part of
//!    the stable library API.
//!
//! ## Example
//!
//! ```
//! let (program, errors) = monkey::parser::parse("let x = 1 + 2 * 3;");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```
//!
//! Parsing never fails outright. Problems are collected as
//! [`parser::ParseError`]s and returned next to whatever AST could be built.

pub mod parser;
pub mod repl;
