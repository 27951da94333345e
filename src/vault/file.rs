// src/vault/file.rs
//! File-backed vault: the sequence as a JSON array in one file

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use super::{Result, Vault};
use crate::consts::DEFAULT_VAULT_FILE_NAME;
use crate::error::StoreError;

/// Durable vault in a single JSON file.
///
/// `write` truncates and rewrites the file, then syncs it to disk before
/// returning. Truncate-then-rewrite is not atomic: a crash in between
/// leaves an empty vault, which fails closed ("no pads in the vault").
/// Reads and writes both go through the handle opened here, under one lock,
/// so a vault keeps working on the same file even if its path is replaced.
#[derive(Debug)]
pub struct FileVault {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileVault {
    /// Open or create the vault file; existing content is kept
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o660);
        }
        let file = options.open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    /// Open `vault.db` inside the given data directory
    pub fn open_in_dir<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        Self::open(data_dir.as_ref().join(DEFAULT_VAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Vault for FileVault {
    fn read(&self) -> Result<Vec<String>> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or(StoreError::Closed)?;
        file.seek(SeekFrom::Start(0))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        if data.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&data)?)
    }

    fn write(&self, pads: &[String]) -> Result<()> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or(StoreError::Closed)?;
        let data = serde_json::to_vec(pads)?;
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(&data)?;
        file.sync_all()?;
        debug!(count = pads.len(), path = %self.path.display(), "vault file rewritten");
        Ok(())
    }

    fn close(&self) {
        if self.file.lock().take().is_some() {
            debug!(path = %self.path.display(), "vault file closed");
        }
    }
}
