// src/lib.rs
//! sesame-vault — one-time-pad protected secrets for a block producer
//!
//! Features:
//! - KES key, VRF key and node certificate sealed as AES-256-CBC pads
//! - 72-character single-use key phrases
//! - File-backed or in-memory pad vault
//! - Access guard disclosing each record once per key phrase
//! - Full secure-gate / zeroize integration for key material

pub mod aliases;
pub mod bundle;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod files;
pub mod guard;
pub mod producer;
pub mod vault;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{KeyPhrase, SecretBytes};
pub use bundle::{SecretBundle, SecretRecord};
pub use config::{load as load_config, Config};
pub use crypto::{generate_pads, parse_key_phrase, PadKey};
pub use enums::{ErrorCategory, SecretKind, VaultBackend};
pub use error::{CipherError, CoreError, GuardError, StoreError};
pub use guard::{AccessFlags, Guard};
pub use producer::{seal_bundle, submit_pads};
pub use vault::{open_vault, FileVault, MemoryVault, Vault};
