// src/bin/seal_pads.rs
//! Seal the local KES key, VRF key and node certificate into one-time pads
//!
//! Reads the configured key files, appends `pad_count` pads to the
//! configured vault and prints the numbered key phrases. Hand the phrases
//! out in the printed order.

use anyhow::{Context, Result};
use sesame_vault::{load_config, open_vault, seal_bundle, SecretBundle};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config().context("Failed to load configuration")?;
    let generator = &config.generator;

    let bundle = SecretBundle::from_files(
        &generator.kes_file,
        &generator.vrf_file,
        &generator.cert_file,
    )
    .context("Failed to read key files")?;

    let vault = open_vault(&config.vault).context("Failed to open vault")?;
    let sealed = seal_bundle(vault.as_ref(), &bundle, generator.pad_count);
    let keys = sealed.context("Failed to seal pads")?;
    vault.close();

    info!("sealed {} pad(s)", keys.len());
    for (i, key) in keys.iter().enumerate() {
        println!("#{}: {}", i + 1, key.encode().expose_secret());
    }

    Ok(())
}
