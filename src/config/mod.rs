// src/config/mod.rs
//! Configuration system for sesame-vault
//!
//! TOML file + env overrides, falling back to built-in defaults.

pub use app::{
    load, Config, GeneratorConfig, VaultConfig, BACKEND_ENV, CONFIG_ENV, DATA_DIR_ENV,
};

mod app;
mod defaults;
