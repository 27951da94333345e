// src/crypto/generate.rs
//! Pad generation — one bundle sealed under N independent pad keys

use tracing::debug;

use crate::aliases::PlainText;
use crate::consts::{BLOCK_SIZE, FILL_BYTE};
use crate::crypto::pad_key::PadKey;
use crate::error::CipherError;

/// Append fill bytes until the length is a multiple of the block size.
///
/// This is not a reversible padding in general. It only works for pads
/// because the sealed content is a JSON object and the trailing spaces are
/// whitespace the parser skips after the closing brace.
pub fn fill_to_block(data: &[u8]) -> PlainText {
    let fill = (BLOCK_SIZE - data.len() % BLOCK_SIZE) % BLOCK_SIZE;
    let mut filled = Vec::with_capacity(data.len() + fill);
    filled.extend_from_slice(data);
    filled.resize(data.len() + fill, FILL_BYTE);
    PlainText::new(filled)
}

/// Generate `count` fresh pad keys and encrypt `bundle_bytes` under each.
///
/// Returns the keys (for out-of-band distribution) and the base64 pads in
/// matching order (for upload).
pub fn generate_pads(
    count: usize,
    bundle_bytes: &[u8],
) -> Result<(Vec<PadKey>, Vec<String>), CipherError> {
    if count == 0 {
        return Err(CipherError::InvalidPadCount);
    }
    let filled = fill_to_block(bundle_bytes);

    let keys = (0..count)
        .map(|_| PadKey::random())
        .collect::<Result<Vec<_>, _>>()?;
    let pads = keys
        .iter()
        .map(|key| key.encrypt_filled(filled.expose_secret()))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count, "generated pads");
    Ok((keys, pads))
}
