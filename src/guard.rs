// src/guard.rs
//! Access guard — exactly-once disclosure of each secret per key phrase
//!
//! The guard holds at most one access session: the active key phrase and
//! which of the three records it has already disclosed. A consumer sets a
//! key phrase, then reads `kes`, `vrf` and `cert` once each. Every read
//! decrypts the head pad of the vault afresh; the decrypted bundle never
//! outlives a single `access` call. When the third record has been served
//! the session ends and the head pad is discarded for good.
//!
//! All guard operations run under one lock that spans the decryption and
//! the flag update, so no two callers ever observe the same session state.
//! The lock does not cover other writers of the vault.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::aliases::{KeyPhrase, SecretBytes};
use crate::consts::{KEY_PHRASE_LEN, KEY_PHRASE_VERSION};
use crate::crypto::{pad_fingerprint, parse_key_phrase};
use crate::enums::SecretKind;
use crate::error::GuardError;
use crate::vault::{discard_head, Vault};

pub type Result<T> = std::result::Result<T, GuardError>;

/// Which records the active key phrase has already disclosed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessFlags {
    pub kes: bool,
    pub vrf: bool,
    pub cert: bool,
}

impl AccessFlags {
    pub fn is_set(&self, kind: SecretKind) -> bool {
        match kind {
            SecretKind::Kes => self.kes,
            SecretKind::Vrf => self.vrf,
            SecretKind::Cert => self.cert,
        }
    }

    pub fn set(&mut self, kind: SecretKind) {
        match kind {
            SecretKind::Kes => self.kes = true,
            SecretKind::Vrf => self.vrf = true,
            SecretKind::Cert => self.cert = true,
        }
    }

    pub fn all(&self) -> bool {
        self.kes && self.vrf && self.cert
    }

    pub fn any(&self) -> bool {
        self.kes || self.vrf || self.cert
    }

    /// At least one record disclosed, but not all three
    pub fn partial(&self) -> bool {
        self.any() && !self.all()
    }
}

struct AccessSession {
    phrase: KeyPhrase,
    flags: AccessFlags,
}

/// Stateful controller in front of a vault
pub struct Guard {
    vault: Arc<dyn Vault>,
    session: Mutex<Option<AccessSession>>,
}

impl Guard {
    pub fn new(vault: Arc<dyn Vault>) -> Self {
        Self {
            vault,
            session: Mutex::new(None),
        }
    }

    /// Bind `phrase` as the active key phrase with nothing disclosed yet.
    ///
    /// Replacing a session that disclosed some but not all records discards
    /// the head pad first, so an abandoned disclosure can never be resumed
    /// and later phrases stay aligned with their pads. If that discard fails
    /// the active session is kept and the store error is returned.
    pub fn set_key(&self, phrase: &str) -> Result<()> {
        let mut session = self.session.lock();
        if phrase.is_empty() {
            return Err(GuardError::EmptyKey);
        }
        if phrase.len() != KEY_PHRASE_LEN || !phrase.starts_with(KEY_PHRASE_VERSION) {
            return Err(GuardError::InvalidFormat);
        }
        if let Some(active) = session.as_ref() {
            if active.phrase.expose_secret().as_str() == phrase {
                return Err(GuardError::DuplicateKey);
            }
            if active.flags.partial() {
                warn!("replacing a partially disclosed session, discarding its pad");
                discard_head(self.vault.as_ref()).inspect_err(|e| {
                    error!("could not delete the first entry in vault: {e}");
                })?;
            }
        }
        *session = Some(AccessSession {
            phrase: KeyPhrase::new(phrase.to_owned()),
            flags: AccessFlags::default(),
        });
        info!("key phrase set");
        Ok(())
    }

    /// Disclose one record of the head pad under the active key phrase.
    ///
    /// Each kind can be disclosed once per key phrase. After the third
    /// record the session is cleared and the head pad removed; a failure to
    /// remove it is logged and does not affect the returned record.
    pub fn access(&self, kind: SecretKind) -> Result<SecretBytes> {
        let mut slot = self.session.lock();
        let session = slot.as_mut().ok_or(GuardError::NoKeySet)?;
        if session.flags.is_set(kind) {
            return Err(GuardError::AlreadyAccessed(kind));
        }

        let pads = self.vault.read()?;
        let head = pads.first().ok_or(GuardError::EmptyVault)?;
        let pad_key = parse_key_phrase(session.phrase.expose_secret())?;
        let bundle = pad_key.decrypt(head)?;
        let record = SecretBytes::new(serde_json::to_vec(bundle.record(kind))?);
        drop(bundle);

        session.flags.set(kind);
        info!(%kind, pad = %pad_fingerprint(head), "secret record disclosed");

        if session.flags.all() {
            *slot = None;
            match discard_head(self.vault.as_ref()) {
                Ok(_) => info!("all records disclosed, pad consumed"),
                Err(e) => error!("couldn't delete the vault entry: {e}"),
            }
        }
        Ok(record)
    }

    /// Disclosure flags of the active session, `None` when no key is set
    pub fn disclosed(&self) -> Option<AccessFlags> {
        self.session.lock().as_ref().map(|session| session.flags)
    }
}
