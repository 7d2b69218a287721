/// Token categories in the order the lexer tries them.
///
/// Order is part of the language: `RND(` must be seen as a
/// function before `RND` could be seen as a command.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Function,
    Command,
    Variable,
    Number,
    RelOp,
    BinOp,
}

impl TokenKind {
    pub const PRIORITY: [TokenKind; 8] = [
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Function,
        TokenKind::Command,
        TokenKind::Variable,
        TokenKind::Number,
        TokenKind::RelOp,
        TokenKind::BinOp,
    ];

    /// Length in bytes of the prefix of `s` this kind recognizes.
    pub fn rule(self, s: &str) -> Option<usize> {
        use TokenKind::*;
        let bytes = s.as_bytes();
        let upper = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
        match self {
            LParen => single(bytes, |b| b == b'('),
            RParen => single(bytes, |b| b == b')'),
            Function => {
                if upper >= 2 && bytes.get(upper) == Some(&b'(') {
                    Some(upper + 1)
                } else {
                    None
                }
            }
            Command => {
                if upper >= 2 {
                    Some(upper)
                } else {
                    None
                }
            }
            Variable => single(bytes, |b| b.is_ascii_uppercase()),
            Number => match bytes.iter().take_while(|b| b.is_ascii_digit()).count() {
                0 => None,
                n => Some(n),
            },
            RelOp => single(bytes, |b| b == b'<' || b == b'>' || b == b'='),
            BinOp => single(bytes, |b| b == b'+' || b == b'-' || b == b'*' || b == b'/'),
        }
    }
}

fn single(bytes: &[u8], pred: impl Fn(u8) -> bool) -> Option<usize> {
    match bytes.first() {
        Some(b) if pred(*b) => Some(1),
        _ => None,
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    LParen,
    RParen,
    Function(Function),
    Command(Word),
    Variable(char),
    Number(String),
    RelOp(RelOp),
    BinOp(Operator),
}

impl Token {
    /// Builds the token for text already matched by `kind`'s rule.
    pub fn new(kind: TokenKind, text: &str) -> Token {
        match kind {
            TokenKind::LParen => Token::LParen,
            TokenKind::RParen => Token::RParen,
            TokenKind::Function => Token::Function(Function::from(text.trim_end_matches('('))),
            TokenKind::Command => Token::Command(Word::from(text)),
            TokenKind::Variable => Token::Variable(text.chars().next().unwrap_or('?')),
            TokenKind::Number => Token::Number(text.to_string()),
            TokenKind::RelOp => Token::RelOp(match text {
                "<" => RelOp::Less,
                ">" => RelOp::Greater,
                _ => RelOp::Equal,
            }),
            TokenKind::BinOp => Token::BinOp(match text {
                "+" => Operator::Plus,
                "-" => Operator::Minus,
                "*" => Operator::Multiply,
                _ => Operator::Divide,
            }),
        }
    }

    pub fn kind(&self) -> TokenKind {
        use Token::*;
        match self {
            LParen => TokenKind::LParen,
            RParen => TokenKind::RParen,
            Function(_) => TokenKind::Function,
            Command(_) => TokenKind::Command,
            Variable(_) => TokenKind::Variable,
            Number(_) => TokenKind::Number,
            RelOp(_) => TokenKind::RelOp,
            BinOp(_) => TokenKind::BinOp,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Function(s) => write!(f, "{}(", s),
            Command(s) => write!(f, "{}", s),
            Variable(c) => write!(f, "{}", c),
            Number(s) => write!(f, "{}", s),
            RelOp(s) => write!(f, "{}", s),
            BinOp(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Goto,
    If,
    Let,
    Print,
    Other(String),
}

impl From<&str> for Word {
    fn from(s: &str) -> Word {
        use Word::*;
        match s {
            "GOTO" => Goto,
            "IF" => If,
            "LET" => Let,
            "PRINT" => Print,
            _ => Other(s.to_string()),
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Function {
    Rnd,
    Other(String),
}

impl From<&str> for Function {
    fn from(s: &str) -> Function {
        match s {
            "RND" => Function::Rnd,
            _ => Function::Other(s.to_string()),
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Function::Rnd => write!(f, "RND"),
            Function::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RelOp {
    Less,
    Greater,
    Equal,
}

impl RelOp {
    pub fn holds(self, lhs: i32, rhs: i32) -> bool {
        match self {
            RelOp::Less => lhs < rhs,
            RelOp::Greater => lhs > rhs,
            RelOp::Equal => lhs == rhs,
        }
    }
}

impl std::fmt::Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RelOp::Less => write!(f, "<"),
            RelOp::Greater => write!(f, ">"),
            RelOp::Equal => write!(f, "="),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn precedence(self) -> usize {
        use Operator::*;
        match self {
            Plus | Minus => 0,
            Multiply | Divide => 1,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_rule_includes_paren() {
        assert_eq!(TokenKind::Function.rule("RND(1)"), Some(4));
        assert_eq!(TokenKind::Function.rule("RND 1"), None);
        assert_eq!(TokenKind::Function.rule("R(1)"), None);
    }

    #[test]
    fn test_command_needs_two_letters() {
        assert_eq!(TokenKind::Command.rule("PRINT A"), Some(5));
        assert_eq!(TokenKind::Command.rule("A = 1"), None);
        assert_eq!(TokenKind::Variable.rule("A = 1"), Some(1));
    }

    #[test]
    fn test_lowercase_is_not_recognized() {
        for kind in TokenKind::PRIORITY.iter() {
            assert_eq!(kind.rule("print"), None);
        }
    }

    #[test]
    fn test_display_restores_text() {
        assert_eq!(Token::new(TokenKind::Function, "RND(").to_string(), "RND(");
        assert_eq!(Token::new(TokenKind::Command, "FOO").to_string(), "FOO");
        assert_eq!(Token::new(TokenKind::RelOp, ">").to_string(), ">");
        assert_eq!(Token::new(TokenKind::Number, "0042").to_string(), "0042");
    }

    #[test]
    fn test_word_from_str() {
        assert_eq!(Word::from("GOTO"), Word::Goto);
        assert_eq!(Word::from("PICKLES"), Word::Other("PICKLES".to_string()));
    }
}
