/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language.

*/

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;

pub mod token;
