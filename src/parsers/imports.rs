//! Import declaration extraction
//!
//! Reads the leading `package` and `import` declarations of a Go source file
//! and returns the imported paths. Scanning stops at the first `var`,
//! `const`, `func` or `type` declaration; nothing after the import block is
//! ever inspected.

use super::scanner::Scanner;
use super::token::{Token, TokenKind};
use crate::error::{GraphError, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Extracts import paths from one file's token stream
pub struct ImportExtractor<R> {
    scanner: Scanner<R>,
    file: PathBuf,
}

impl<R: BufRead> ImportExtractor<R> {
    /// `file` is only used to give errors a location
    pub fn new(reader: R, file: impl Into<PathBuf>) -> Self {
        Self {
            scanner: Scanner::new(reader),
            file: file.into(),
        }
    }

    /// Returns every import path in declaration order
    pub fn extract(mut self) -> Result<Vec<String>> {
        let mut result = Vec::new();
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::Eof => return Ok(result),
                TokenKind::Error => return Err(self.lex_error(&token)),
                TokenKind::Word => match token.text.as_str() {
                    "package" => {
                        let name = self.next_token()?;
                        if name.kind != TokenKind::Word {
                            return Err(self.parse_error(
                                &name,
                                format!("expected a word after 'package' got {}", name),
                            ));
                        }
                    }
                    "import" => result.extend(self.parse_import()?),
                    "var" | "const" | "func" | "type" => return Ok(result),
                    _ => {}
                },
                _ => {
                    return Err(self.parse_error(&token, format!("unexpected token {}", token)));
                }
            }
        }
    }

    /// Parses what follows an `import` keyword
    fn parse_import(&mut self) -> Result<Vec<String>> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Eof => Err(self.parse_error(&token, "unexpected EOF after 'import'")),
            TokenKind::Error => Err(self.lex_error(&token)),
            TokenKind::Word => Ok(vec![self.aliased_path(&token)?]),
            TokenKind::QuotedString => Ok(vec![unquote(&token.text)]),
            TokenKind::LeftParen => self.parse_import_block(),
            TokenKind::RightParen => Err(self.parse_error(
                &token,
                format!("unexpected token while scanning 'import' {}", token),
            )),
        }
    }

    /// Parses the entries of `import ( ... )`; the `(` has been consumed
    fn parse_import_block(&mut self) -> Result<Vec<String>> {
        let mut result = Vec::new();
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::Eof => {
                    return Err(self.parse_error(&token, "unexpected EOF after 'import ('"));
                }
                TokenKind::Error => return Err(self.lex_error(&token)),
                TokenKind::Word => result.push(self.aliased_path(&token)?),
                TokenKind::QuotedString => result.push(unquote(&token.text)),
                TokenKind::RightParen => return Ok(result),
                TokenKind::LeftParen => {
                    return Err(self.parse_error(
                        &token,
                        format!("unexpected token while scanning 'import (' {}", token),
                    ));
                }
            }
        }
    }

    /// The alias has been read; the path must follow
    fn aliased_path(&mut self, alias: &Token) -> Result<String> {
        let path = self.next_token()?;
        match path.kind {
            TokenKind::QuotedString => Ok(unquote(&path.text)),
            TokenKind::Error => Err(self.lex_error(&path)),
            _ => Err(self.parse_error(
                &path,
                format!(
                    "expected string after import alias {:?} got {}",
                    alias.text, path
                ),
            )),
        }
    }

    /// Next token, surfacing a failed read as an I/O error instead of EOF
    fn next_token(&mut self) -> Result<Token> {
        let token = self.scanner.next_token();
        if token.kind == TokenKind::Eof {
            if let Some(source) = self.scanner.take_io_error() {
                return Err(GraphError::FileRead {
                    path: self.file.clone(),
                    source,
                });
            }
        }
        Ok(token)
    }

    fn lex_error(&self, token: &Token) -> GraphError {
        GraphError::lex_error(&self.file, token.line, &token.text)
    }

    fn parse_error(&self, token: &Token, message: impl Into<String>) -> GraphError {
        GraphError::parse_error(&self.file, token.line, message)
    }
}

/// Extract the import paths of a source file read from `reader`
pub fn extract_imports<R: BufRead>(path: &Path, reader: R) -> Result<Vec<String>> {
    ImportExtractor::new(reader, path).extract()
}

/// Extract the import paths of an in-memory source text
pub fn extract_imports_from_str(src: &str) -> Result<Vec<String>> {
    ImportExtractor::new(src.as_bytes(), "<memory>").extract()
}

fn unquote(text: &str) -> String {
    text.trim_matches(|c| c == '"' || c == '`').to_string()
}
