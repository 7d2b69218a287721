use crate::lang::{Error, Line, LineNumber};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Line table
///
/// Lines sorted by number. The program counter addresses
/// positions in this order, not line numbers.

#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn load<'a, T: IntoIterator<Item = &'a str>>(source: T) -> Result<Program> {
        let mut table: BTreeMap<LineNumber, Line> = BTreeMap::new();
        for (row, s) in source.into_iter().enumerate() {
            let line = match Line::from_source(s) {
                Ok(line) => line,
                Err(e) => {
                    log::error!("source row {}: {}", row + 1, e);
                    return Err(e);
                }
            };
            if let Some(old) = table.insert(line.number(), line) {
                log::warn!("line {} defined again; replacing \"{}\"", old.number(), old);
            }
        }
        let lines: Vec<Line> = table.into_iter().map(|(_, line)| line).collect();
        log::info!("loaded {} lines", lines.len());
        Ok(Program { lines })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, pc: usize) -> Option<&Line> {
        self.lines.get(pc)
    }

    pub fn position(&self, line_number: LineNumber) -> Option<usize> {
        self.lines
            .binary_search_by_key(&line_number, |line| line.number())
            .ok()
    }

    pub fn listing(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }
}
