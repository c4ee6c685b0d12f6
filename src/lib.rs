//! General-purpose utility library: a delimited-text tokenizer, a Luhn
//! checksum implementation, and small string helpers.

mod error;
pub mod luhn;
pub mod strings;
mod tokenizer;

pub use error::{Error, Result};
pub use tokenizer::{Token, TokenKind, Tokenizer, Tokens};
