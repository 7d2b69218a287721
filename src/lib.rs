//! # Tiny BASIC
//!
//! A line-numbered BASIC with one data type: the signed integer.
//!
//! ```text
//! 10 LET A = 1
//! 20 PRINT A
//! 30 LET A = A+1
//! 40 IF A < 4 GOTO 20
//! ```
//!
//! There are four statements. `PRINT` writes the value of an
//! expression. `LET` assigns one of the variables `A` through `Z`.
//! `GOTO` continues at another line. `IF` compares two expressions
//! with `<`, `>` or `=` and, when the comparison holds, runs the rest
//! of the line as a statement of its own.
//!
//! Expressions use `+ - * /` with the usual precedence, parentheses,
//! and the function `RND(N)` which returns a random integer from 0
//! up to but not including N. Division truncates toward zero.
//!
//! Lines run in order of their numbers. The program ends after the
//! last line; there is no `END`.
//!
//! ```
//! use basic::mach::Runtime;
//!
//! let mut runtime = Runtime::load(vec!["10 LET A = 6", "20 PRINT A*7"]).unwrap();
//! let mut out = Vec::new();
//! runtime.run(&mut out).unwrap();
//! assert_eq!(out, b"42\n");
//! ```

pub mod lang;
pub mod mach;
