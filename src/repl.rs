//! Line-at-a-time shell around the parser
//!
//! Each input line gets a fresh lexer and parser; nothing carries over between
//! lines. A line that parses cleanly is echoed back in canonical form,
//! otherwise every diagnostic is printed on its own tab-indented line.

use crate::parser::{tokenize, Parser, ParserOptions, TokenKind};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// Shell settings, filled from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplConfig {
    /// Style the prompt and diagnostics with ANSI colors
    pub color: bool,
    /// Print the token stream instead of the parsed program
    pub show_tokens: bool,
    /// Prefix diagnostics with their line and column
    pub show_locations: bool,
    pub parser: ParserOptions,
}

/// Outcome of rendering one chunk of source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub had_errors: bool,
}

/// Parse `source` and produce what the shell prints for it
pub fn render(source: &str, config: &ReplConfig) -> Rendered {
    if config.show_tokens {
        return render_tokens(source);
    }

    let mut parser = Parser::with_options(source, config.parser);
    let program = parser.parse_program();
    let errors = parser.into_errors();

    if errors.is_empty() {
        return Rendered {
            text: format!("{}\n", program),
            had_errors: false,
        };
    }

    let mut text = String::new();
    for error in &errors {
        let message = if config.show_locations {
            format!("{}: {}", error.location(), error)
        } else {
            error.to_string()
        };
        let message = if config.color {
            message.red().to_string()
        } else {
            message
        };
        text.push_str(&format!("\t{}\n", message));
    }

    Rendered {
        text,
        had_errors: true,
    }
}

fn render_tokens(source: &str) -> Rendered {
    let mut text = String::new();
    let mut had_errors = false;

    for token in tokenize(source).take_while(|t| !t.is(TokenKind::Eof)) {
        had_errors |= token.is(TokenKind::Illegal);
        text.push_str(&format!(
            "{}:{}\t{}\n",
            token.location.line, token.location.column, token
        ));
    }

    Rendered { text, had_errors }
}

/// Run the read-parse-print loop until `input` is exhausted
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, config: &ReplConfig) -> io::Result<()> {
    let mut line = String::new();

    loop {
        if config.color {
            write!(output, "{}", PROMPT.dim())?;
        } else {
            write!(output, "{}", PROMPT)?;
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let rendered = render(line.trim_end_matches(['\n', '\r']), config);
        output.write_all(rendered.text.as_bytes())?;
    }
}
