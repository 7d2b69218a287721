use super::{Function, Tokens, Var};
use crate::error;
use crate::lang::token::*;
use crate::lang::Error;
use rand::RngCore;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluation
///
/// Evaluates straight off the token queue by precedence climbing.
/// Nothing is built; the queue is left just past the expression.

pub struct Evaluator<'a> {
    vars: &'a Var,
    rng: &'a mut dyn RngCore,
    depth: usize,
}

/// Deepest nesting of parentheses, function calls, unary minus
/// and `IF` allowed on one line.
pub const MAX_NESTING: usize = 256;

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a Var, rng: &'a mut dyn RngCore) -> Evaluator<'a> {
        Evaluator {
            vars,
            rng,
            depth: 0,
        }
    }

    pub fn expression(&mut self, tokens: &mut Tokens) -> Result<i32> {
        let lhs = self.primary(tokens)?;
        self.climb(tokens, lhs, 0)
    }

    fn climb(&mut self, tokens: &mut Tokens, mut lhs: i32, min_precedence: usize) -> Result<i32> {
        while let Some(op) = peek_operator(tokens) {
            if op.precedence() < min_precedence {
                break;
            }
            tokens.next();
            let mut rhs = self.primary(tokens)?;
            while let Some(lookahead) = peek_operator(tokens) {
                if lookahead.precedence() <= op.precedence() {
                    break;
                }
                rhs = self.climb(tokens, rhs, min_precedence + 1)?;
            }
            lhs = apply(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn primary(&mut self, tokens: &mut Tokens) -> Result<i32> {
        match tokens.next() {
            Some(Token::Function(name)) => {
                let arg = self.nested(|this| this.expression(tokens))?;
                expect_rparen(tokens)?;
                Function::call(name, arg, &mut *self.rng)
            }
            Some(Token::LParen) => {
                let val = self.nested(|this| this.expression(tokens))?;
                expect_rparen(tokens)?;
                Ok(val)
            }
            Some(Token::Number(s)) => match s.parse::<i32>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(Overflow; "LITERAL TOO LARGE")),
            },
            Some(Token::Variable(name)) => self.vars.fetch(*name),
            Some(Token::BinOp(Operator::Minus)) => match self
                .nested(|this| this.primary(tokens))?
                .checked_neg()
            {
                Some(n) => Ok(n),
                None => Err(error!(Overflow)),
            },
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn nested<F>(&mut self, f: F) -> Result<i32>
    where
        F: FnOnce(&mut Self) -> Result<i32>,
    {
        if self.depth >= MAX_NESTING {
            return Err(error!(OutOfMemory; "EXPRESSION TOO COMPLEX"));
        }
        self.depth += 1;
        let val = f(self);
        self.depth -= 1;
        val
    }
}

fn peek_operator(tokens: &mut Tokens) -> Option<Operator> {
    match tokens.peek() {
        Some(Token::BinOp(op)) => Some(*op),
        _ => None,
    }
}

fn expect_rparen(tokens: &mut Tokens) -> Result<()> {
    match tokens.next() {
        Some(Token::RParen) => Ok(()),
        _ => Err(error!(SyntaxError; "EXPECTED RIGHT PARENTHESIS")),
    }
}

fn apply(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
    use Operator::*;
    let val = match op {
        Plus => lhs.checked_add(rhs),
        Minus => lhs.checked_sub(rhs),
        Multiply => lhs.checked_mul(rhs),
        Divide => {
            if rhs == 0 {
                return Err(error!(DivisionByZero));
            }
            lhs.checked_div(rhs)
        }
    };
    match val {
        Some(n) => Ok(n),
        None => Err(error!(Overflow)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{lex, ErrorCode};
    use rand::rngs::mock::StepRng;

    fn eval_with(s: &str, vars: &Var) -> Result<i32> {
        let (tokens, rest) = lex(s);
        assert_eq!(rest, "");
        let mut rng = StepRng::new(0, 1);
        Evaluator::new(vars, &mut rng).expression(&mut tokens.iter().peekable())
    }

    fn eval(s: &str) -> Result<i32> {
        eval_with(s, &Var::new())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1+2*3").unwrap(), 7);
        assert_eq!(eval("(1+2)*3").unwrap(), 9);
        assert_eq!(eval("1-2*3+4").unwrap(), -1);
        assert_eq!(eval("2*3+4*5").unwrap(), 26);
        assert_eq!(eval("1+2*3*4-5").unwrap(), 20);
    }

    #[test]
    fn test_left_assoc() {
        assert_eq!(eval("10-4-3").unwrap(), 3);
        assert_eq!(eval("100/10/5").unwrap(), 2);
        assert_eq!(eval("7/2*2").unwrap(), 6);
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(eval("7/2").unwrap(), 3);
        assert_eq!(eval("-7/2").unwrap(), -3);
        assert_eq!(eval("7/-2").unwrap(), -3);
    }

    #[test]
    fn test_division_by_zero() {
        assert!(eval("1/0").unwrap_err().is(ErrorCode::DivisionByZero));
        assert!(eval("1/(2-2)").unwrap_err().is(ErrorCode::DivisionByZero));
    }

    #[test]
    fn test_overflow() {
        assert!(eval("2147483647+1").unwrap_err().is(ErrorCode::Overflow));
        assert!(eval("99999999999").unwrap_err().is(ErrorCode::Overflow));
        assert_eq!(eval("-2147483647-1").unwrap(), i32::min_value());
    }

    #[test]
    fn test_variables() {
        let mut vars = Var::new();
        vars.store('A', 6);
        assert_eq!(eval_with("A*A-A", &vars).unwrap(), 30);
        assert!(eval_with("A+B", &vars)
            .unwrap_err()
            .is(ErrorCode::UndefinedVariable));
    }

    #[test]
    fn test_rnd_one_is_zero() {
        assert_eq!(eval("RND(1)").unwrap(), 0);
        assert_eq!(eval("RND(1)+RND(1)*5").unwrap(), 0);
    }

    #[test]
    fn test_unknown_function_still_needs_paren() {
        assert_eq!(eval("FOO(3)+1").unwrap(), 1);
        assert!(eval("FOO(3").unwrap_err().is(ErrorCode::SyntaxError));
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            eval("1+").unwrap_err().to_string(),
            "SYNTAX ERROR; EXPECTED EXPRESSION"
        );
        assert_eq!(
            eval("(1+2").unwrap_err().to_string(),
            "SYNTAX ERROR; EXPECTED RIGHT PARENTHESIS"
        );
    }

    #[test]
    fn test_nesting_limit() {
        let deep = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(eval(&deep(MAX_NESTING)).unwrap(), 1);
        assert!(eval(&deep(MAX_NESTING + 1))
            .unwrap_err()
            .is(ErrorCode::OutOfMemory));
        assert_eq!(
            eval(&"-".repeat(MAX_NESTING)).unwrap_err().to_string(),
            "SYNTAX ERROR; EXPECTED EXPRESSION"
        );
        assert!(eval(&format!("{}1", "-".repeat(10_000)))
            .unwrap_err()
            .is(ErrorCode::OutOfMemory));
        assert!(eval(&format!("{}1)", "RND(".repeat(10_000)))
            .unwrap_err()
            .is(ErrorCode::OutOfMemory));
    }

    #[test]
    fn test_stops_at_non_operator() {
        let (tokens, _) = lex("1+2 < 4");
        let mut tokens = tokens.iter().peekable();
        let mut rng = StepRng::new(0, 1);
        let vars = Var::new();
        let val = Evaluator::new(&vars, &mut rng).expression(&mut tokens).unwrap();
        assert_eq!(val, 3);
        assert_eq!(tokens.next(), Some(&Token::RelOp(RelOp::Less)));
    }
}
