// src/producer.rs
//! Producer path — sealing bundles into pads and uploading pad arrays

use tracing::info;

use crate::bundle::SecretBundle;
use crate::crypto::{generate_pads, PadKey};
use crate::error::CoreError;
use crate::vault::{append_pads, Vault};

/// Seal `bundle` under `count` fresh pad keys and append the pads.
///
/// The returned keys are in the same order as the appended pads; hand them
/// out in that order, since the guard always decrypts the head pad.
pub fn seal_bundle(
    vault: &dyn Vault,
    bundle: &SecretBundle,
    count: usize,
) -> Result<Vec<PadKey>, CoreError> {
    let plain = bundle.to_json_bytes()?;
    let (keys, pads) = generate_pads(count, plain.expose_secret())?;
    let total = append_pads(vault, &pads)?;
    info!(sealed = pads.len(), total, "sealed secret bundle into pads");
    Ok(keys)
}

/// Replace the whole vault with an uploaded pad array
pub fn submit_pads(vault: &dyn Vault, pads: &[String]) -> Result<(), CoreError> {
    vault.write(pads)?;
    info!(count = pads.len(), "pad array submitted");
    Ok(())
}
