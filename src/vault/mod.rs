// src/vault/mod.rs
//! Vault store — the ordered, persisted sequence of pads (oldest first)
//!
//! Backends only know how to read and overwrite the whole sequence.
//! Appending and consuming are read-modify-write sequences built on top in
//! this module; they are not atomic against other writers of the same
//! vault.

mod file;
mod memory;

pub use file::FileVault;
pub use memory::MemoryVault;

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::VaultConfig;
use crate::crypto::pad_fingerprint;
use crate::enums::VaultBackend;
use crate::error::{CoreError, StoreError};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage for the pad sequence. Implementations must be safe to share
/// between threads; `write` replaces the sequence atomically with respect
/// to concurrent `read`/`write` calls on the same vault.
pub trait Vault: Send + Sync {
    /// The full current sequence; empty if never written
    fn read(&self) -> Result<Vec<String>>;

    /// Replace the entire sequence
    fn write(&self, pads: &[String]) -> Result<()>;

    /// Release underlying resources
    fn close(&self);
}

/// Open the backend selected by the configuration
pub fn open_vault(config: &VaultConfig) -> std::result::Result<Arc<dyn Vault>, CoreError> {
    match config.backend {
        VaultBackend::File => {
            let data_dir = config.resolve_data_dir()?;
            std::fs::create_dir_all(&data_dir).map_err(StoreError::Io)?;
            let vault = FileVault::open(data_dir.join(&config.file_name))?;
            info!(path = %vault.path().display(), "opened file vault");
            Ok(Arc::new(vault))
        }
        VaultBackend::Memory => {
            info!("opened in-memory vault");
            Ok(Arc::new(MemoryVault::new()))
        }
    }
}

/// Append pads to the end of the sequence; returns the new length
pub fn append_pads(vault: &dyn Vault, new_pads: &[String]) -> Result<usize> {
    let mut pads = vault.read()?;
    pads.extend_from_slice(new_pads);
    vault.write(&pads)?;
    debug!(added = new_pads.len(), total = pads.len(), "appended pads");
    Ok(pads.len())
}

/// Remove the head pad, returning it; `None` when the vault was empty
pub fn discard_head(vault: &dyn Vault) -> Result<Option<String>> {
    let mut pads = vault.read()?;
    if pads.is_empty() {
        return Ok(None);
    }
    let head = pads.remove(0);
    vault.write(&pads)?;
    debug!(pad = %pad_fingerprint(&head), remaining = pads.len(), "discarded head pad");
    Ok(Some(head))
}
