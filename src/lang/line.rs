use super::lex::*;
use super::token::*;
use super::{Column, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// One numbered program line, lexed once when it is loaded.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    text: String,
    tokens: Vec<Token>,
    unmatched: Column,
}

impl Line {
    pub fn new(number: LineNumber, text: &str) -> Line {
        let (tokens, rest) = lex(text);
        Line {
            number,
            text: text.to_string(),
            tokens,
            unmatched: (text.len() - rest.len())..text.len(),
        }
    }

    /// Parses `<line number><space><statement>`. Only the first space
    /// separates; the statement keeps any spaces of its own.
    pub fn from_source(s: &str) -> Result<Line> {
        let s = s.strip_suffix('\r').unwrap_or(s);
        if s.trim().is_empty() {
            return Err(error!(SyntaxError; "BLANK LINE"));
        }
        let (number, text) = match s.find(' ') {
            Some(idx) => (&s[..idx], &s[idx + 1..]),
            None => (s, ""),
        };
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(error!(SyntaxError; "INVALID LINE NUMBER"));
        }
        // GOTO targets are i32 values, so larger numbers are unreachable.
        let number = match number.parse::<i32>() {
            Ok(n) => n as LineNumber,
            Err(_) => return Err(error!(Overflow; "INVALID LINE NUMBER")),
        };
        if text.trim().is_empty() {
            return Err(error!(SyntaxError, number; "MISSING STATEMENT"));
        }
        Ok(Line::new(number, text))
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    /// The tokens of this line, or a syntax error pointing at the
    /// first text that could not be tokenized.
    pub fn tokens(&self) -> Result<&[Token]> {
        if self.unmatched.is_empty() {
            Ok(&self.tokens)
        } else {
            Err(error!(SyntaxError, self.number, ..&self.unmatched; "UNRECOGNIZED INPUT"))
        }
    }

    /// Whatever the lexer recognized, even if it stopped early.
    pub fn recognized(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}
