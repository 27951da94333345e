// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed sets the vault works with: the three
//! secret kinds, the storage backends and the error categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three records protected by a pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretKind {
    /// KES signing key
    Kes,
    /// VRF key
    Vrf,
    /// Node operational certificate
    Cert,
}

impl SecretKind {
    pub const ALL: [SecretKind; 3] = [SecretKind::Kes, SecretKind::Vrf, SecretKind::Cert];

    pub fn as_str(self) -> &'static str {
        match self {
            SecretKind::Kes => "kes",
            SecretKind::Vrf => "vrf",
            SecretKind::Cert => "cert",
        }
    }

    /// Name of the read-only file exposing this record
    pub fn file_name(self) -> &'static str {
        match self {
            SecretKind::Kes => "kes.skey",
            SecretKind::Vrf => "vrf.skey",
            SecretKind::Cert => "node.cert",
        }
    }

    pub fn from_file_name(name: &str) -> Option<SecretKind> {
        SecretKind::ALL
            .into_iter()
            .find(|kind| kind.file_name() == name)
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backend of the vault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VaultBackend {
    /// JSON array in a single file, survives restarts
    #[default]
    File,
    /// Process memory only, lost on exit
    Memory,
}

impl FromStr for VaultBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(VaultBackend::File),
            "memory" => Ok(VaultBackend::Memory),
            other => Err(format!("unknown vault backend '{other}'")),
        }
    }
}

/// Coarse error taxonomy collaborators translate into their own surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed key phrase or malformed stored JSON
    Format,
    /// Random source or cipher construction failure
    Crypto,
    /// Ciphertext did not decrypt to a bundle (wrong key or corrupt entry)
    DecryptionFailed,
    /// Guard state rejected the call
    State,
    /// Reading or writing the persisted sequence failed, or it is empty
    Store,
}
