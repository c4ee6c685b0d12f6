use crate::{Error, Result};
use std::{fs, path::Path};

use super::{Token, TokenKind};

/// Splits input into alternating runs of plain text and text enclosed in a
/// configured start/end delimiter pair.
///
/// Delimiters must be non-empty; this is enforced on construction and on every
/// reassignment. A single tokenizer can be reused across any number of
/// [`parse`](Tokenizer::parse) calls.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    start_delimiter: String,
    end_delimiter: String,
}

impl Tokenizer {
    pub fn new(start_delimiter: impl Into<String>, end_delimiter: impl Into<String>) -> Result<Self> {
        let start_delimiter = validate_start(start_delimiter.into())?;
        let end_delimiter = validate_end(end_delimiter.into())?;

        Ok(Self {
            start_delimiter,
            end_delimiter,
        })
    }

    pub fn start_delimiter(&self) -> &str {
        &self.start_delimiter
    }

    pub fn end_delimiter(&self) -> &str {
        &self.end_delimiter
    }

    pub fn set_start_delimiter(&mut self, delimiter: impl Into<String>) -> Result<()> {
        self.start_delimiter = validate_start(delimiter.into())?;
        Ok(())
    }

    pub fn set_end_delimiter(&mut self, delimiter: impl Into<String>) -> Result<()> {
        self.end_delimiter = validate_end(delimiter.into())?;
        Ok(())
    }

    /// Scans `input` left to right, yielding tokens lazily as the returned
    /// iterator is advanced. Scanning never fails: an unterminated start
    /// delimiter is swallowed into a final plain-text token, and the sequence
    /// always closes with a plain-text token (possibly empty).
    pub fn parse<'t, 's>(&'t self, input: &'s str) -> Tokens<'t, 's> {
        Tokens {
            tokenizer: self,
            input,
            pos: 0,
            pending: None,
            done: false,
        }
    }

    /// Reads a file to a string and tokenizes the whole of it.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Token>> {
        let input = fs::read_to_string(path)?;
        Ok(self.parse(&input).collect())
    }
}

fn validate_start(delimiter: String) -> Result<String> {
    if delimiter.is_empty() {
        Err(Error::EmptyStartDelimiter)
    } else {
        Ok(delimiter)
    }
}

fn validate_end(delimiter: String) -> Result<String> {
    if delimiter.is_empty() {
        Err(Error::EmptyEndDelimiter)
    } else {
        Ok(delimiter)
    }
}

/// Lazy token sequence over one input string. Holding this borrows the
/// tokenizer, so its delimiters cannot be reassigned mid-scan.
pub struct Tokens<'t, 's> {
    tokenizer: &'t Tokenizer,
    input: &'s str,
    pos: usize,
    pending: Option<Token>,
    done: bool,
}

impl Tokens<'_, '_> {
    fn remainder(&mut self) -> Token {
        self.done = true;
        Token::new(TokenKind::PlainText, &self.input[self.pos..], self.pos)
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }
        if self.done {
            return None;
        }

        let start_delimiter = self.tokenizer.start_delimiter.as_str();
        let end_delimiter = self.tokenizer.end_delimiter.as_str();

        let start = match self.input[self.pos..].find(start_delimiter) {
            Some(offset) => self.pos + offset,
            None => return Some(self.remainder()),
        };

        let content_start = start + start_delimiter.len();
        let content_end = match self.input[content_start..].find(end_delimiter) {
            Some(offset) => content_start + offset,
            // Unterminated start delimiter; it becomes part of the remainder.
            None => return Some(self.remainder()),
        };

        let delimited = Token::new(
            TokenKind::DelimitedText,
            &self.input[content_start..content_end],
            start,
        );

        let plain_start = self.pos;
        self.pos = content_end + end_delimiter.len();

        if start > plain_start {
            self.pending = Some(delimited);
            Some(Token::new(
                TokenKind::PlainText,
                &self.input[plain_start..start],
                plain_start,
            ))
        } else {
            Some(delimited)
        }
    }
}
