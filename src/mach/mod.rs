/*!
## Rust Machine Module

This Rust module runs a loaded BASIC program one line at a time.

*/

pub type Tokens<'a> = std::iter::Peekable<std::slice::Iter<'a, crate::lang::token::Token>>;

mod exec;
mod expr;
mod function;
mod program;
mod runtime;
mod var;

pub use exec::Executor;
pub use exec::Flow;
pub use expr::Evaluator;
pub use expr::MAX_NESTING;
pub use function::Function;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;
