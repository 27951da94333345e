// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout sesame-vault. Everything
//! wrapped here is zeroized when dropped.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(PadKeyBytes, 32); // 256-bit AES key of one pad
fixed_alias!(PadIv, 16); // 128-bit CBC initialization vector

// Dynamic secrets
dynamic_alias!(KeyPhrase, String); // 72-char textual PadKey held by the guard
dynamic_alias!(PlainText, Vec<u8>); // serialized SecretBundle, padded or decrypted
dynamic_alias!(SecretBytes, Vec<u8>); // one disclosed SecretRecord
