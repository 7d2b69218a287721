use crate::error;
use crate::lang::token::Function as Name;
use crate::lang::Error;
use rand::{Rng, RngCore};

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    pub fn call(name: &Name, arg: i32, rng: &mut dyn RngCore) -> Result<i32> {
        match name {
            Name::Rnd => Function::rnd(arg, rng),
            Name::Other(name) => {
                log::debug!("unknown function {}({}) is 0", name, arg);
                Ok(0)
            }
        }
    }

    /// A draw from `0..n`. `RND(0)` is always 0.
    pub fn rnd(n: i32, rng: &mut dyn RngCore) -> Result<i32> {
        match n {
            n if n < 0 => Err(error!(IllegalFunctionCall; "RND OF NEGATIVE NUMBER")),
            0 => Ok(0),
            n => Ok(rng.gen_range(0..n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rnd_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = Function::rnd(6, &mut rng).unwrap();
            assert!((0..6).contains(&r));
        }
        assert_eq!(Function::rnd(1, &mut rng).unwrap(), 0);
        assert_eq!(Function::rnd(0, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_rnd_negative() {
        let mut rng = StdRng::seed_from_u64(7);
        let e = Function::rnd(-1, &mut rng).unwrap_err();
        assert!(e.is(ErrorCode::IllegalFunctionCall));
    }

    #[test]
    fn test_unknown_function_is_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = Name::Other("ABS".to_string());
        assert_eq!(Function::call(&name, 42, &mut rng).unwrap(), 0);
    }
}
