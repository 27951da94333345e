// src/crypto/mod.rs
//! Cipher scheme — pad keys, key phrases and pad generation
//!
//! Pure cryptography: no storage, no guard state.

pub mod generate;
pub mod pad_key;

pub use generate::{fill_to_block, generate_pads};
pub use pad_key::{parse_key_phrase, PadKey};

use crate::consts::PAD_FINGERPRINT_LEN_HEX;

/// Short BLAKE3 fingerprint naming a pad in logs without revealing it
pub fn pad_fingerprint(pad: &str) -> String {
    let hash = blake3::hash(pad.as_bytes());
    hex::encode(&hash.as_bytes()[..PAD_FINGERPRINT_LEN_HEX / 2])
}
