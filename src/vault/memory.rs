// src/vault/memory.rs
//! Ephemeral vault held in process memory

use parking_lot::RwLock;

use super::{Result, Vault};

/// Vault whose content is lost on process exit. Readers share the lock,
/// writers take it exclusively.
#[derive(Debug, Default)]
pub struct MemoryVault {
    pads: RwLock<Vec<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pads(pads: Vec<String>) -> Self {
        Self {
            pads: RwLock::new(pads),
        }
    }
}

impl Vault for MemoryVault {
    fn read(&self) -> Result<Vec<String>> {
        Ok(self.pads.read().clone())
    }

    fn write(&self, pads: &[String]) -> Result<()> {
        *self.pads.write() = pads.to_vec();
        Ok(())
    }

    fn close(&self) {}
}
