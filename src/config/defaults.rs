// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{GeneratorConfig, VaultConfig};
use crate::consts::{DEFAULT_PAD_COUNT, DEFAULT_VAULT_FILE_NAME};
use crate::enums::VaultBackend;

pub const DEFAULT_DATA_DIR_NAME: &str = "sesame-vault";

pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(DEFAULT_DATA_DIR_NAME))
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            backend: VaultBackend::File,
            data_dir: None,
            file_name: DEFAULT_VAULT_FILE_NAME.into(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kes_file: "kes.skey".into(),
            vrf_file: "vrf.skey".into(),
            cert_file: "node.cert".into(),
            pad_count: DEFAULT_PAD_COUNT,
        }
    }
}
