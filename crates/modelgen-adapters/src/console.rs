//! Console adapters for echoed artifacts.

use std::io::{self, Write};
use std::sync::{Arc, RwLock};

use modelgen_core::{
    application::{ApplicationError, ports::Console},
    error::ModelgenResult,
};

/// Writes blocks to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_block(&self, text: &str) -> ModelgenResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")
            .and_then(|()| out.flush())
            .map_err(|e| {
                ApplicationError::OutputFailed {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

/// Collects blocks in memory (testing).
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    blocks: Arc<RwLock<Vec<String>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> Vec<String> {
        self.blocks.read().map(|b| b.clone()).unwrap_or_default()
    }

    /// Everything written so far, one block per line group.
    pub fn contents(&self) -> String {
        self.blocks().join("\n")
    }
}

impl Console for MemoryConsole {
    fn write_block(&self, text: &str) -> ModelgenResult<()> {
        self.blocks
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?
            .push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_console_keeps_order() {
        let console = MemoryConsole::new();
        console.write_block("first").unwrap();
        console.write_block("second").unwrap();
        assert_eq!(console.blocks(), vec!["first", "second"]);
        assert_eq!(console.contents(), "first\nsecond");
    }
}
