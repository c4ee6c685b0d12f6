mod token;
mod tokenizer;

pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, Tokens};
