//! Lexer (tokenizer) for Monkey source code
//!
//! Converts raw source text into a pull-based stream of [`Token`]s. The lexer
//! never fails: a character that matches no rule becomes a
//! [`TokenKind::Illegal`] token and is left for the parser to reject.

use super::ast::SourceLocation;
use std::fmt;

/// Token categories. The parser's dispatch tables are keyed by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Classify an identifier-shaped word as a keyword or a plain identifier.
    pub fn lookup_ident(word: &str) -> TokenKind {
        match word {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        }
    }

    /// Name used for this kind inside diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit.
///
/// `literal` is the exact source text of the token (empty for [`TokenKind::Eof`]).
/// Integer literals are kept as text; numeric conversion happens in the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    pub fn eof(location: SourceLocation) -> Self {
        Self::new(TokenKind::Eof, "", location)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{}", self.kind),
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{} '{}'", self.kind, self.literal)
            }
            _ => write!(f, "'{}'", self.literal),
        }
    }
}

/// Anything the parser can pull tokens from.
///
/// Implementations must keep returning an [`TokenKind::Eof`] token once the
/// input is exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Start tokenizing `source`. Tokens are produced lazily as the caller pulls.
pub fn tokenize(source: &str) -> Lexer {
    Lexer::new(source)
}

/// Lexer for Monkey source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    finished: bool,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Produce the next token. Returns `Eof` forever once the input is consumed.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Token::eof(loc),
        };

        let kind = match ch {
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    return Token::new(TokenKind::Eq, "==", loc);
                }
                TokenKind::Assign
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    return Token::new(TokenKind::NotEq, "!=", loc);
                }
                TokenKind::Bang
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            c if is_letter(c) => return self.identifier_or_keyword(c, loc),
            c if c.is_ascii_digit() => return self.number_literal(c, loc),
            _ => TokenKind::Illegal,
        };

        Token::new(kind, ch, loc)
    }

    /// Read the rest of an identifier and classify it
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if !is_letter(ch) {
                break;
            }
            ident.push(ch);
            self.advance();
        }

        Token::new(TokenKind::lookup_ident(&ident), ident, loc)
    }

    /// Read the rest of a digit run
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.advance();
        }

        Token::new(TokenKind::Int, digits, loc)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

/// Yields every token up to and including the first `Eof`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = Lexer::next_token(self);
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

/// Replays an already tokenized input.
impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next()
            .unwrap_or_else(|| Token::eof(SourceLocation::default()))
    }
}
