// src/crypto/pad_key.rs
//! One-time pad keys and their 72-character key phrase encoding
//!
//! A key phrase is `"100X"` followed by base64(IV) (24 chars) and
//! base64(key) (44 chars). Pads are AES-256-CBC ciphertexts without an
//! authentication tag, so a wrong key only shows up as a bundle that fails
//! to deserialize.

use std::fmt;

use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroize;

use crate::aliases::{KeyPhrase, PadIv, PadKeyBytes, PlainText};
use crate::bundle::SecretBundle;
use crate::consts::{BLOCK_SIZE, IV_B64_LEN, KEY_LEN, KEY_PHRASE_LEN, KEY_PHRASE_VERSION};
use crate::crypto::generate::fill_to_block;
use crate::error::CipherError;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

pub type Result<T> = std::result::Result<T, CipherError>;

/// Symmetric key + IV of exactly one pad — zeroized on drop
pub struct PadKey {
    key: PadKeyBytes,
    iv: PadIv,
}

impl PadKey {
    pub fn from_parts(key: [u8; KEY_LEN], iv: [u8; BLOCK_SIZE]) -> Self {
        Self {
            key: PadKeyBytes::new(key),
            iv: PadIv::new(iv),
        }
    }

    /// Fresh key and IV from the operating system's CSPRNG
    pub fn random() -> Result<Self> {
        let mut key = [0u8; KEY_LEN];
        let mut iv = [0u8; BLOCK_SIZE];
        OsRng
            .try_fill_bytes(&mut key)
            .and_then(|()| OsRng.try_fill_bytes(&mut iv))
            .map_err(|e| CipherError::RandomSource(e.to_string()))?;
        let pad_key = Self::from_parts(key, iv);
        key.zeroize();
        iv.zeroize();
        Ok(pad_key)
    }

    /// The 72-character key phrase handed to a consumer out of band
    pub fn encode(&self) -> KeyPhrase {
        let mut phrase = String::with_capacity(KEY_PHRASE_LEN);
        phrase.push_str(KEY_PHRASE_VERSION);
        STANDARD.encode_string(self.iv.expose_secret(), &mut phrase);
        STANDARD.encode_string(self.key.expose_secret(), &mut phrase);
        KeyPhrase::new(phrase)
    }

    /// Encrypt a serialized bundle, filling it to the block size first
    pub fn encrypt(&self, bundle_bytes: &[u8]) -> Result<String> {
        let filled = fill_to_block(bundle_bytes);
        self.encrypt_filled(filled.expose_secret())
    }

    /// Encrypt data that is already a multiple of the block size
    pub(crate) fn encrypt_filled(&self, filled: &[u8]) -> Result<String> {
        let encryptor =
            Aes256CbcEnc::new_from_slices(self.key.expose_secret(), self.iv.expose_secret())
                .map_err(|_| CipherError::Cipher)?;
        let mut buf = filled.to_vec();
        let len = buf.len();
        let ct_len = encryptor
            .encrypt_padded_mut::<NoPadding>(&mut buf, len)
            .map_err(|_| CipherError::Cipher)?
            .len();
        buf.truncate(ct_len);
        Ok(STANDARD.encode(&buf))
    }

    /// Decrypt one pad into the bundle it carries.
    ///
    /// Invalid base64 and ciphertexts that are not whole blocks are
    /// `CorruptEntry`; everything that decrypts to bytes which do not parse
    /// as a bundle is `DecryptionFailed`, whether the key was wrong or the
    /// entry was damaged.
    pub fn decrypt(&self, pad: &str) -> Result<SecretBundle> {
        let ciphertext = STANDARD
            .decode(pad)
            .map_err(|_| CipherError::CorruptEntry)?;
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::CorruptEntry);
        }
        let decryptor =
            Aes256CbcDec::new_from_slices(self.key.expose_secret(), self.iv.expose_secret())
                .map_err(|_| CipherError::Cipher)?;
        let mut buf = ciphertext;
        let plain_len = decryptor
            .decrypt_padded_mut::<NoPadding>(&mut buf)
            .map_err(|_| CipherError::CorruptEntry)?
            .len();
        buf.truncate(plain_len);
        let plain = PlainText::new(buf);
        SecretBundle::from_json_slice(plain.expose_secret())
            .map_err(|_| CipherError::DecryptionFailed)
    }
}

impl fmt::Debug for PadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PadKey([REDACTED])")
    }
}

/// Parse a key phrase back into its PadKey.
///
/// Only the length is checked here; the version tag is skipped without
/// inspection. Callers wanting the tag enforced check it themselves.
pub fn parse_key_phrase(phrase: &str) -> Result<PadKey> {
    if phrase.len() != KEY_PHRASE_LEN {
        return Err(CipherError::InvalidFormat);
    }
    let not_ascii = || CipherError::InvalidEncoding("key phrase is not ASCII".into());
    let version_len = KEY_PHRASE_VERSION.len();
    let body = phrase.get(version_len..).ok_or_else(not_ascii)?;
    let iv_b64 = body.get(..IV_B64_LEN).ok_or_else(not_ascii)?;
    let key_b64 = body.get(IV_B64_LEN..).ok_or_else(not_ascii)?;
    let mut iv = decode_exact::<BLOCK_SIZE>(iv_b64, "IV")?;
    let mut key = decode_exact::<KEY_LEN>(key_b64, "key")?;
    let pad_key = PadKey::from_parts(key, iv);
    key.zeroize();
    iv.zeroize();
    Ok(pad_key)
}

fn decode_exact<const N: usize>(b64: &str, what: &str) -> Result<[u8; N]> {
    let mut decoded = STANDARD
        .decode(b64)
        .map_err(|e| CipherError::InvalidEncoding(format!("{what}: {e}")))?;
    let exact = <[u8; N]>::try_from(decoded.as_slice()).map_err(|_| {
        CipherError::InvalidEncoding(format!(
            "{what} decodes to {} bytes, expected {N}",
            decoded.len()
        ))
    });
    decoded.zeroize();
    exact
}
