use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Single letter names. A variable exists once it has been assigned;
/// there is no implicit zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<char, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: char) -> Result<i32> {
        match self.vars.get(&var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable)),
        }
    }

    pub fn get(&self, var_name: char) -> Option<i32> {
        self.vars.get(&var_name).copied()
    }

    pub fn store(&mut self, var_name: char, value: i32) {
        self.vars.insert(var_name, value);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_unassigned_is_an_error() {
        let var = Var::new();
        assert!(var.fetch('B').unwrap_err().is(ErrorCode::UndefinedVariable));
        assert_eq!(var.get('B'), None);
    }

    #[test]
    fn test_store_overwrites() {
        let mut var = Var::new();
        var.store('A', 5);
        var.store('A', -3);
        assert_eq!(var.fetch('A').unwrap(), -3);
        assert_eq!(var.len(), 1);
        assert!(!var.is_empty());
    }
}
