//! Lexical tokens produced by the scanner

use std::fmt;

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// No more input; returned indefinitely once reached
    Eof,
    /// Lexical error; the token text is the error message
    Error,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Quoted string, quotes included
    QuotedString,
    /// Identifier-like run of letters, digits and underscores
    Word,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Error => write!(f, "Error"),
            TokenKind::LeftParen => write!(f, "LeftParen"),
            TokenKind::RightParen => write!(f, "RightParen"),
            TokenKind::QuotedString => write!(f, "String"),
            TokenKind::Word => write!(f, "Word"),
        }
    }
}

/// A token and the raw text it matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line the token was produced on
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Error => write!(f, "error: {}", self.text),
            _ if self.text.chars().count() > 10 => {
                let head: String = self.text.chars().take(10).collect();
                write!(f, "{}: {:?}...", self.kind, head)
            }
            _ => write!(f, "{}: {:?}", self.kind, self.text),
        }
    }
}
