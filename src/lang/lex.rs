use super::token::*;

/// Splits one statement into tokens.
///
/// Scanning stops at the first text no token kind recognizes; that
/// text is returned unconsumed and it is up to the caller to decide
/// whether a partial line is acceptable.
pub fn lex(s: &str) -> (Vec<Token>, &str) {
    let mut lexer = BasicLexer { rest: s };
    let tokens = lexer.by_ref().collect();
    (tokens, lexer.rest)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' '
}

struct BasicLexer<'a> {
    rest: &'a str,
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest = self.rest.trim_start_matches(is_basic_whitespace);
        if self.rest.is_empty() {
            return None;
        }
        for kind in TokenKind::PRIORITY.iter() {
            if let Some(len) = kind.rule(self.rest) {
                let token = Token::new(*kind, &self.rest[..len]);
                self.rest = &self.rest[len..];
                return Some(token);
            }
        }
        None
    }
}
