use super::{Evaluator, Program, Tokens, Var, MAX_NESTING};
use crate::error;
use crate::lang::token::*;
use crate::lang::{Error, LineNumber};
use rand::RngCore;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Where the program counter goes after a statement.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Flow {
    Next,
    Jump(usize),
}

/// ## Statement execution
///
/// Borrows the parts of the runtime one statement may touch.

pub struct Executor<'a> {
    pub program: &'a Program,
    pub vars: &'a mut Var,
    pub rng: &'a mut dyn RngCore,
    pub print: &'a mut String,
}

impl<'a> Executor<'a> {
    pub fn statement(&mut self, tokens: &mut Tokens) -> Result<Flow> {
        self.nested_statement(tokens, 0)
    }

    fn nested_statement(&mut self, tokens: &mut Tokens, depth: usize) -> Result<Flow> {
        if depth > MAX_NESTING {
            return Err(error!(OutOfMemory; "EXPRESSION TOO COMPLEX"));
        }
        match tokens.next() {
            Some(Token::Command(Word::Print)) => self.r#print(tokens),
            Some(Token::Command(Word::If)) => self.r#if(tokens, depth),
            Some(Token::Command(Word::Goto)) => self.r#goto(tokens),
            Some(Token::Command(Word::Let)) => self.r#let(tokens),
            Some(token) => {
                log::debug!("no statement starts with {}; ignored", token);
                Ok(Flow::Next)
            }
            None => Ok(Flow::Next),
        }
    }

    fn expression(&mut self, tokens: &mut Tokens) -> Result<i32> {
        Evaluator::new(&*self.vars, &mut *self.rng).expression(tokens)
    }

    fn r#print(&mut self, tokens: &mut Tokens) -> Result<Flow> {
        let val = self.expression(tokens)?;
        self.print.push_str(&format!("{}\n", val));
        Ok(Flow::Next)
    }

    fn r#if(&mut self, tokens: &mut Tokens, depth: usize) -> Result<Flow> {
        let lhs = self.expression(tokens)?;
        let relop = match tokens.next() {
            Some(Token::RelOp(op)) => *op,
            _ => return Err(error!(SyntaxError; "EXPECTED RELATIONAL OPERATOR")),
        };
        let rhs = self.expression(tokens)?;
        if relop.holds(lhs, rhs) {
            self.nested_statement(tokens, depth + 1)
        } else {
            Ok(Flow::Next)
        }
    }

    fn r#goto(&mut self, tokens: &mut Tokens) -> Result<Flow> {
        let target = self.expression(tokens)?;
        let position = LineNumber::try_from(target)
            .ok()
            .and_then(|line_number| self.program.position(line_number));
        match position {
            Some(pc) => {
                log::trace!("jump to {} at position {}", target, pc);
                Ok(Flow::Jump(pc))
            }
            None => Err(error!(UndefinedLine)),
        }
    }

    fn r#let(&mut self, tokens: &mut Tokens) -> Result<Flow> {
        let var_name = match tokens.next() {
            Some(Token::Variable(name)) => *name,
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        match tokens.next() {
            Some(Token::RelOp(RelOp::Equal)) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED EQUALS SIGN")),
        }
        let val = self.expression(tokens)?;
        self.vars.store(var_name, val);
        Ok(Flow::Next)
    }
}
