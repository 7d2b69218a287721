use super::{Executor, Flow, Program, Var};
use crate::error;
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution context
///
/// One loaded program together with everything a run mutates.
/// A fresh runtime is used for every run.

pub struct Runtime {
    program: Program,
    vars: Var,
    pc: usize,
    rng: Box<dyn RngCore>,
    print_buffer: String,
}

/// What happened during a call to `execute`.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Error(Error),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Program::default())
    }
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            vars: Var::new(),
            pc: 0,
            rng: Box::new(StdRng::from_entropy()),
            print_buffer: String::new(),
        }
    }

    pub fn load<'a, T: IntoIterator<Item = &'a str>>(source: T) -> Result<Runtime> {
        Ok(Runtime::new(Program::load(source)?))
    }

    pub fn with_rng<R: RngCore + 'static>(mut self, rng: R) -> Runtime {
        self.rng = Box::new(rng);
        self
    }

    pub fn seeded(self, seed: u64) -> Runtime {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn variables(&self) -> &Var {
        &self.vars
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn is_stopped(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Runs at most `cycles` lines. Returns early with any printed
    /// output so a host can interleave it with its own work.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if !self.print_buffer.is_empty() {
            return Event::Print(std::mem::take(&mut self.print_buffer));
        }
        for _ in 0..cycles {
            if self.is_stopped() {
                return Event::Stopped;
            }
            if let Err(error) = self.step() {
                self.pc = self.program.len();
                return Event::Error(error);
            }
            if !self.print_buffer.is_empty() {
                return Event::Print(std::mem::take(&mut self.print_buffer));
            }
        }
        if self.is_stopped() {
            Event::Stopped
        } else {
            Event::Running
        }
    }

    /// Runs to the end of the program, writing output to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        loop {
            match self.execute(usize::max_value()) {
                Event::Stopped => break,
                Event::Running => continue,
                Event::Print(s) => {
                    if let Err(e) = out.write_all(s.as_bytes()) {
                        log::error!("{}", e);
                        self.pc = self.program.len();
                        return Err(error!(OutputError));
                    }
                }
                Event::Error(error) => return Err(error),
            }
        }
        out.flush().map_err(|e| {
            log::error!("{}", e);
            error!(OutputError)
        })
    }

    fn step(&mut self) -> Result<()> {
        let line = match self.program.line(self.pc) {
            Some(line) => line,
            None => return Ok(()),
        };
        log::debug!("{}", line);
        let number = line.number();
        let tokens = line.tokens()?;
        let mut executor = Executor {
            program: &self.program,
            vars: &mut self.vars,
            rng: self.rng.as_mut(),
            print: &mut self.print_buffer,
        };
        let flow = executor
            .statement(&mut tokens.iter().peekable())
            .map_err(|e| e.in_line_number(number))?;
        self.pc = match flow {
            Flow::Next => self.pc + 1,
            Flow::Jump(pc) => pc,
        };
        Ok(())
    }
}
