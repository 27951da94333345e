// src/bundle.rs
//! The protected payload: three secret records sealed together into every pad
//!
//! Records use the human-friendly JSON layout the node tooling writes for
//! keys and certificates (`type`, `description`, `cborHex`). All string
//! contents are zeroized when a record is dropped.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aliases::PlainText;
use crate::enums::SecretKind;
use crate::error::{BundleError, CipherError};

/// One key or certificate in its text envelope
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(rename = "cborHex")]
    pub payload: String,
}

impl SecretRecord {
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            payload: payload.into(),
        }
    }

    fn from_file(path: &Path) -> Result<Self, BundleError> {
        let data = PlainText::new(std::fs::read(path).map_err(|source| BundleError::Io {
            path: path.to_path_buf(),
            source,
        })?);
        serde_json::from_slice(data.expose_secret()).map_err(|source| BundleError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretRecord")
            .field("kind", &self.kind)
            .field("description", &self.description)
            .field("payload", &"[REDACTED]")
            .finish()
    }
}

/// KES key, VRF key and node certificate of one block producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretBundle {
    pub kes: SecretRecord,
    pub vrf: SecretRecord,
    pub cert: SecretRecord,
}

impl SecretBundle {
    pub fn new(kes: SecretRecord, vrf: SecretRecord, cert: SecretRecord) -> Self {
        Self { kes, vrf, cert }
    }

    /// Read the three key files the node tooling produces
    pub fn from_files<P: AsRef<Path>>(
        kes_path: P,
        vrf_path: P,
        cert_path: P,
    ) -> Result<Self, BundleError> {
        Ok(Self {
            kes: SecretRecord::from_file(kes_path.as_ref())?,
            vrf: SecretRecord::from_file(vrf_path.as_ref())?,
            cert: SecretRecord::from_file(cert_path.as_ref())?,
        })
    }

    pub fn record(&self, kind: SecretKind) -> &SecretRecord {
        match kind {
            SecretKind::Kes => &self.kes,
            SecretKind::Vrf => &self.vrf,
            SecretKind::Cert => &self.cert,
        }
    }

    /// Canonical JSON serialization sealed into each pad
    pub fn to_json_bytes(&self) -> Result<PlainText, CipherError> {
        Ok(PlainText::new(serde_json::to_vec(self)?))
    }

    /// Parse a decrypted pad. Trailing fill bytes after the closing brace
    /// are whitespace and are skipped by the JSON parser.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}
