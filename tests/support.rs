// tests/support.rs
//! Test fixtures — secret bundles, fixed pad keys and prepared vaults

use std::sync::Arc;

use sesame_vault::crypto::generate_pads;
use sesame_vault::{MemoryVault, PadKey, SecretBundle, SecretRecord, Vault};

#[allow(dead_code)]
pub fn sample_bundle() -> SecretBundle {
    SecretBundle::new(
        SecretRecord::new(
            "KesSigningKey_ed25519_kes_2^6",
            "KES Signing Key",
            "590260e2a7f0c1d4b5a6978877665544332211",
        ),
        SecretRecord::new(
            "VrfSigningKey_PraosVRF",
            "VRF Signing Key",
            "5840f1e2d3c4b5a6978877665544332211aabb",
        ),
        SecretRecord::new(
            "NodeOperationalCertificate",
            "",
            "82845820aabbccddeeff00112233445566778899",
        ),
    )
}

#[allow(dead_code)]
pub fn other_bundle() -> SecretBundle {
    SecretBundle::new(
        SecretRecord::new("KesSigningKey_ed25519_kes_2^6", "KES Signing Key", "5902600000"),
        SecretRecord::new("VrfSigningKey_PraosVRF", "VRF Signing Key", "5840ffff"),
        SecretRecord::new("NodeOperationalCertificate", "", "8284582011"),
    )
}

/// Deterministic pad key — never use outside tests
#[allow(dead_code)]
pub fn fixed_key(key_byte: u8, iv_byte: u8) -> PadKey {
    PadKey::from_parts([key_byte; 32], [iv_byte; 16])
}

/// Seal `bundle` into `count` pads
#[allow(dead_code)]
pub fn seal(bundle: &SecretBundle, count: usize) -> (Vec<PadKey>, Vec<String>) {
    let plain = bundle.to_json_bytes().unwrap();
    generate_pads(count, plain.expose_secret()).unwrap()
}

/// Key phrase of a pad key as a plain String
#[allow(dead_code)]
pub fn phrase(key: &PadKey) -> String {
    key.encode().expose_secret().clone()
}

/// In-memory vault holding one pad per bundle, in the given order
#[allow(dead_code)]
pub fn vault_with(bundles: &[SecretBundle]) -> (Arc<dyn Vault>, Vec<String>) {
    let mut phrases = Vec::new();
    let mut pads = Vec::new();
    for bundle in bundles {
        let (keys, mut sealed) = seal(bundle, 1);
        phrases.push(phrase(&keys[0]));
        pads.append(&mut sealed);
    }
    (Arc::new(MemoryVault::with_pads(pads)), phrases)
}

/// JSON bytes the guard discloses for one record
#[allow(dead_code)]
pub fn record_json(record: &SecretRecord) -> Vec<u8> {
    serde_json::to_vec(record).unwrap()
}
