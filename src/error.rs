// src/error.rs
//! Public error types for the entire crate

use std::path::PathBuf;

use thiserror::Error;

use crate::consts::{BLOCK_SIZE, KEY_PHRASE_LEN, SECRET_FILE_SIZE};
use crate::enums::{ErrorCategory, SecretKind};

/// Failures of the cipher scheme
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("key phrase must be exactly {len} characters", len = KEY_PHRASE_LEN)]
    InvalidFormat,

    #[error("key phrase is not valid base64: {0}")]
    InvalidEncoding(String),

    #[error("vault entry is corrupted (not a multiple of {block} bytes)", block = BLOCK_SIZE)]
    CorruptEntry,

    // Wrong key and corrupted ciphertext are deliberately indistinguishable
    #[error("vault entry could not be decrypted")]
    DecryptionFailed,

    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("cipher construction failed")]
    Cipher,

    #[error("pad count must be at least 1")]
    InvalidPadCount,

    #[error("secret data could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CipherError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CipherError::InvalidFormat
            | CipherError::InvalidEncoding(_)
            | CipherError::InvalidPadCount
            | CipherError::Serialize(_) => ErrorCategory::Format,
            CipherError::CorruptEntry | CipherError::DecryptionFailed => {
                ErrorCategory::DecryptionFailed
            }
            CipherError::RandomSource(_) | CipherError::Cipher => ErrorCategory::Crypto,
        }
    }
}

/// Failures of a vault backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored pad sequence is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("vault has been closed")]
    Closed,
}

impl StoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::Json(_) => ErrorCategory::Format,
            StoreError::Io(_) | StoreError::Closed => ErrorCategory::Store,
        }
    }
}

/// Failures of the access guard
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("the given key phrase must not be empty")]
    EmptyKey,

    #[error("the format of the key phrase is invalid")]
    InvalidFormat,

    #[error("same key phrase has already been set")]
    DuplicateKey,

    #[error("key phrase has not been set")]
    NoKeySet,

    #[error("{0} has already been accessed")]
    AlreadyAccessed(SecretKind),

    #[error("no pads in the vault")]
    EmptyVault,

    #[error("{kind} record is {len} bytes, over {max}", max = SECRET_FILE_SIZE)]
    OversizedRecord { kind: SecretKind, len: usize },

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("secret record could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GuardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GuardError::EmptyKey
            | GuardError::DuplicateKey
            | GuardError::NoKeySet
            | GuardError::AlreadyAccessed(_) => ErrorCategory::State,
            GuardError::InvalidFormat
            | GuardError::OversizedRecord { .. }
            | GuardError::Serialize(_) => ErrorCategory::Format,
            GuardError::EmptyVault => ErrorCategory::Store,
            GuardError::Cipher(e) => e.category(),
            GuardError::Store(e) => e.category(),
        }
    }
}

/// Failures loading a secret bundle from key files
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not a valid key file: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failures loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("no data directory configured and none could be derived")]
    NoDataDir,
}

/// Crate-level error for workflows spanning several components
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Guard(#[from] GuardError),

    #[error(transparent)]
    Bundle(#[from] BundleError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
