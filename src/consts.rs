// src/consts.rs
//! Shared constants — pad format and presentation defaults

/// Version tag every key phrase starts with
pub const KEY_PHRASE_VERSION: &str = "100X";

/// Exact length of a key phrase: tag + base64(IV) + base64(key)
pub const KEY_PHRASE_LEN: usize = 72;

/// Base64 characters used for the 16-byte IV
pub const IV_B64_LEN: usize = 24;

/// Base64 characters used for the 32-byte key
pub const KEY_B64_LEN: usize = 44;

/// AES block size; pads are always a multiple of this
pub const BLOCK_SIZE: usize = 16;

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// Fill byte appended to a bundle before encryption.
// Not an unambiguous padding: decoding relies on the JSON parser
// skipping trailing whitespace after the closing brace.
pub const FILL_BYTE: u8 = b' ';

/// File name of the persisted vault inside the data directory
pub const DEFAULT_VAULT_FILE_NAME: &str = "vault.db";

/// Size every rendered secret file is filled up to
pub const SECRET_FILE_SIZE: usize = 2048;

/// Default config file looked up when `SESAME_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "sesame.toml";

/// Default number of pads sealed by the companion tool
pub const DEFAULT_PAD_COUNT: usize = 1;

/// Hex characters of the BLAKE3 fingerprint used to name pads in logs
pub const PAD_FINGERPRINT_LEN_HEX: usize = 16;
