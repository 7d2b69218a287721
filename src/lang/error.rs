use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    column: Column,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            column: 0..0,
            message: "",
        }
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self.clone();
        }
        Error {
            code: self.code,
            line_number: Some(line),
            column: self.column.clone(),
            message: self.message,
        }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            line_number: self.line_number,
            column: column.clone(),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            column: self.column.clone(),
            message,
        }
    }
}

/// Classic BASIC error numbers. `UndefinedVariable` and
/// `OutputError` have no Microsoft equivalent and use spare codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 2,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    DivisionByZero = 11,
    UndefinedVariable = 24,
    OutputError = 57,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LINE",
            11 => "DIVISION BY ZERO",
            24 => "UNDEFINED VARIABLE",
            57 => "OUTPUT ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}", self.code, suffix)
            }
        } else if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}
