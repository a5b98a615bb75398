//! Streaming lexical scanner for Go source files
//!
//! The scanner only knows enough of the language to find package and import
//! declarations: words, quoted strings, parentheses and comments. Anything
//! else is reported as an error token. Input is pulled one line at a time
//! into an internal buffer, so a file is never read further than the
//! consumer asks for.

use super::token::{Token, TokenKind};
use std::io::{self, BufRead};

/// States of the scanner. Each state consumes some input and names the
/// next state, or `None` once a token has been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Any,
    Space,
    LineComment,
    BlockComment,
    Word,
    Quote,
}

/// Converts a byte stream into a sequence of [`Token`]s
pub struct Scanner<R> {
    reader: R,
    done: bool,
    io_error: Option<io::Error>,
    token: Token,
    line_buf: Vec<u8>,
    // Text still needed by the scanner; starts at the oldest unemitted byte.
    input: Vec<u8>,
    pos: usize,
    start: usize,
    // Most recent return from `next_char`, `None` meaning end of input.
    last: Option<char>,
    last_width: usize,
    line: usize,
}

impl<'a> Scanner<&'a [u8]> {
    /// Scan an in-memory source text
    pub fn from_source(src: &'a str) -> Self {
        Scanner::new(src.as_bytes())
    }
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
            io_error: None,
            token: Token::new(TokenKind::Eof, "EOF", 0),
            line_buf: Vec::new(),
            input: Vec::new(),
            pos: 0,
            start: 0,
            last: None,
            last_width: 0,
            line: 0,
        }
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.last = None;
        self.last_width = 0;
        self.token = Token::new(TokenKind::Eof, "EOF", self.line);

        let mut state = Some(State::Any);
        while let Some(current) = state {
            state = self.step(current);
        }

        std::mem::replace(&mut self.token, Token::new(TokenKind::Eof, "EOF", self.line))
    }

    /// Takes the read failure that ended the input early, if any.
    /// A failed read is reported as end of input by [`Scanner::next_token`].
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Any => self.lex_any(),
            State::Space => self.lex_space(),
            State::LineComment => self.lex_line_comment(),
            State::BlockComment => self.lex_block_comment(),
            State::Word => self.lex_word(),
            State::Quote => self.lex_quote(),
        }
    }

    fn lex_any(&mut self) -> Option<State> {
        match self.next_char() {
            None => None,
            Some(c) if c.is_whitespace() => Some(State::Space),
            Some('/') => match self.peek_char() {
                Some('/') => {
                    self.next_char();
                    Some(State::LineComment)
                }
                Some('*') => {
                    self.next_char();
                    Some(State::BlockComment)
                }
                other => self.error(format!(
                    "after '/' unrecognized character {}",
                    describe(other)
                )),
            },
            Some(c) if c.is_alphabetic() || c == '_' => Some(State::Word),
            Some('"') | Some('`') => {
                // Let the quote state read the opening quote itself.
                self.backup();
                Some(State::Quote)
            }
            Some('(') => self.emit(TokenKind::LeftParen),
            Some(')') => self.emit(TokenKind::RightParen),
            other => self.error(format!("unrecognized character {}", describe(other))),
        }
    }

    // One space has already been consumed.
    fn lex_space(&mut self) -> Option<State> {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.next_char();
        }
        self.start = self.pos;
        Some(State::Any)
    }

    // The `//` marker has been consumed.
    fn lex_line_comment(&mut self) -> Option<State> {
        loop {
            match self.next_char() {
                None => return None,
                Some('\n') => break,
                Some(_) => {}
            }
        }
        self.start = self.pos;
        Some(State::Any)
    }

    // The `/*` marker has been consumed. Running out of input inside the
    // comment ends the scan without an error.
    fn lex_block_comment(&mut self) -> Option<State> {
        loop {
            match self.next_char() {
                None => return None,
                Some('*') if self.peek_char() == Some('/') => {
                    self.next_char();
                    break;
                }
                Some(_) => {}
            }
        }
        self.start = self.pos;
        Some(State::Any)
    }

    // The first letter has been consumed.
    fn lex_word(&mut self) -> Option<State> {
        while self.peek_char().is_some_and(is_word_char) {
            self.next_char();
        }
        self.emit(TokenKind::Word)
    }

    // The next character is the opening quote.
    fn lex_quote(&mut self) -> Option<State> {
        let quote = self.next_char();
        loop {
            match self.next_char() {
                None | Some('\n') => return self.error("unterminated quoted string"),
                Some('\\') if quote == Some('"') => {
                    if matches!(self.next_char(), None | Some('\n')) {
                        return self.error("unterminated quoted string");
                    }
                }
                c if c == quote => return self.emit(TokenKind::QuotedString),
                Some(_) => {}
            }
        }
    }

    /// Reads the next line of input and appends it to the pending input,
    /// or replaces the input when nothing is pending. Carriage returns are
    /// dropped here so no later stage ever sees one.
    fn load_line(&mut self) {
        self.line_buf.clear();
        match self.reader.read_until(b'\n', &mut self.line_buf) {
            Ok(0) => self.done = true,
            Ok(_) => {
                if self.line_buf.last() != Some(&b'\n') {
                    self.done = true;
                }
                self.line += 1;
            }
            Err(err) => {
                self.line_buf.clear();
                self.io_error = Some(err);
                self.done = true;
            }
        }
        self.line_buf.retain(|&b| b != b'\r');

        if self.start == self.pos {
            std::mem::swap(&mut self.input, &mut self.line_buf);
            self.start = 0;
            self.pos = 0;
        } else {
            self.input.extend_from_slice(&self.line_buf);
        }
    }

    fn read_char(&mut self) -> (Option<char>, usize) {
        if !self.done && self.pos == self.input.len() {
            self.load_line();
        }
        if self.pos == self.input.len() {
            return (None, 0);
        }
        decode_char(&self.input[self.pos..])
    }

    fn next_char(&mut self) -> Option<char> {
        let (c, width) = self.read_char();
        self.last = c;
        self.last_width = width;
        self.pos += width;
        c
    }

    fn peek_char(&mut self) -> Option<char> {
        self.read_char().0
    }

    /// Steps back one character. Valid once per call of `next_char`.
    fn backup(&mut self) {
        if self.last.is_none() {
            return;
        }
        if self.pos == self.start {
            self.error("internal error: backup at start of input");
            return;
        }
        self.pos -= self.last_width;
    }

    fn emit(&mut self, kind: TokenKind) -> Option<State> {
        let text = String::from_utf8_lossy(&self.input[self.start..self.pos]).into_owned();
        self.token = Token::new(kind, text, self.line);
        self.start = self.pos;
        None
    }

    /// Produces an error token and throws away the buffered input.
    fn error(&mut self, message: impl Into<String>) -> Option<State> {
        self.token = Token::new(TokenKind::Error, message, self.line);
        self.start = 0;
        self.pos = 0;
        self.input.clear();
        None
    }
}

impl<R: BufRead> Iterator for Scanner<R> {
    type Item = Token;

    /// Yields tokens up to, not including, the end of input
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn describe(c: Option<char>) -> String {
    match c {
        Some(c) => format!("U+{:04X} '{}'", c as u32, c),
        None => "EOF".to_string(),
    }
}

/// Decodes one UTF-8 code point. Malformed bytes decode as U+FFFD with a
/// width of one so the cursor always advances.
fn decode_char(bytes: &[u8]) -> (Option<char>, usize) {
    let width = match bytes[0] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return (Some(char::REPLACEMENT_CHARACTER), 1),
    };
    if bytes.len() < width {
        return (Some(char::REPLACEMENT_CHARACTER), 1);
    }
    match std::str::from_utf8(&bytes[..width]) {
        Ok(s) => (s.chars().next(), width),
        Err(_) => (Some(char::REPLACEMENT_CHARACTER), 1),
    }
}
