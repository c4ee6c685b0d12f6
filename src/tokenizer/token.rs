use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    PlainText,
    DelimitedText,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Self::PlainText => "plain",
            Self::DelimitedText => "delimited",
        })
    }
}

/// One scanned segment of the input. `text` is the exact matched substring
/// with delimiters excluded and whitespace preserved; `position` is the byte
/// offset of the segment, or of the opening delimiter for delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    position: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The token text with leading and trailing whitespace removed, computed
    /// on access. The stored text is never modified.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} @ {}: {:?}", self.kind, self.position, self.text)
    }
}
