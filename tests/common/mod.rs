#![allow(dead_code)]

use basic::mach::{Event, Runtime};
use rand::rngs::mock::StepRng;

pub fn runtime(source: &[&str]) -> Runtime {
    match Runtime::load(source.iter().copied()) {
        Ok(r) => r.with_rng(StepRng::new(0, 1)),
        Err(e) => panic!("{}", e),
    }
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
