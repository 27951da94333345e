// tests/vault_tests.rs
use std::fs;
use std::sync::Arc;
use std::thread;

use sesame_vault::config::VaultConfig;
use sesame_vault::vault::{append_pads, discard_head};
use sesame_vault::{open_vault, FileVault, MemoryVault, StoreError, Vault, VaultBackend};
use tempfile::tempdir;

fn pads(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_memory_vault_starts_empty() {
    let vault = MemoryVault::new();
    assert!(vault.read().unwrap().is_empty());
}

#[test]
fn test_memory_vault_write_replaces_sequence() {
    let vault = MemoryVault::new();
    vault.write(&pads(&["a", "b", "c"])).unwrap();
    assert_eq!(vault.read().unwrap(), pads(&["a", "b", "c"]));

    vault.write(&pads(&["z"])).unwrap();
    assert_eq!(vault.read().unwrap(), pads(&["z"]));

    vault.close();
    assert_eq!(vault.read().unwrap(), pads(&["z"]));
}

#[test]
fn test_file_vault_new_file_reads_empty() {
    let dir = tempdir().unwrap();
    let vault = FileVault::open_in_dir(dir.path()).unwrap();
    assert!(vault.read().unwrap().is_empty());
    assert!(dir.path().join("vault.db").exists());
}

#[test]
fn test_file_vault_persists_json_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pads.json");

    let vault = FileVault::open(&path).unwrap();
    vault.write(&pads(&["first", "second"])).unwrap();
    vault.close();

    let on_disk = fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, r#"["first","second"]"#);

    let reopened = FileVault::open(&path).unwrap();
    assert_eq!(reopened.read().unwrap(), pads(&["first", "second"]));
}

#[test]
fn test_file_vault_shorter_write_truncates() {
    let dir = tempdir().unwrap();
    let vault = FileVault::open_in_dir(dir.path()).unwrap();

    vault
        .write(&pads(&["a-long-pad-entry", "another-long-pad-entry"]))
        .unwrap();
    vault.write(&pads(&["x"])).unwrap();
    assert_eq!(vault.read().unwrap(), pads(&["x"]));

    vault.write(&[]).unwrap();
    assert!(vault.read().unwrap().is_empty());
}

#[test]
fn test_file_vault_rejects_malformed_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vault.db");
    fs::write(&path, b"{not an array").unwrap();

    let vault = FileVault::open(&path).unwrap();
    let err = vault.read().unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}

#[test]
fn test_file_vault_closed_fails() {
    let dir = tempdir().unwrap();
    let vault = FileVault::open_in_dir(dir.path()).unwrap();
    vault.close();
    vault.close();

    assert!(matches!(vault.read(), Err(StoreError::Closed)));
    assert!(matches!(vault.write(&pads(&["a"])), Err(StoreError::Closed)));
}

#[test]
fn test_append_and_discard_head_keep_order() {
    let vault = MemoryVault::new();
    assert_eq!(append_pads(&vault, &pads(&["1", "2"])).unwrap(), 2);
    assert_eq!(append_pads(&vault, &pads(&["3"])).unwrap(), 3);
    assert_eq!(vault.read().unwrap(), pads(&["1", "2", "3"]));

    assert_eq!(discard_head(&vault).unwrap().as_deref(), Some("1"));
    assert_eq!(vault.read().unwrap(), pads(&["2", "3"]));
    assert_eq!(discard_head(&vault).unwrap().as_deref(), Some("2"));
    assert_eq!(discard_head(&vault).unwrap().as_deref(), Some("3"));
    assert_eq!(discard_head(&vault).unwrap(), None);
}

#[test]
fn test_discard_head_on_file_vault() {
    let dir = tempdir().unwrap();
    let vault = FileVault::open_in_dir(dir.path()).unwrap();
    append_pads(&vault, &pads(&["1", "2"])).unwrap();

    discard_head(&vault).unwrap();

    let reopened = FileVault::open_in_dir(dir.path()).unwrap();
    assert_eq!(reopened.read().unwrap(), pads(&["2"]));
}

#[test]
fn test_open_vault_selects_backend() {
    let dir = tempdir().unwrap();
    let file_config = VaultConfig {
        backend: VaultBackend::File,
        data_dir: Some(dir.path().join("nested").join("data")),
        file_name: "vault.db".into(),
    };
    let vault = open_vault(&file_config).unwrap();
    vault.write(&pads(&["p"])).unwrap();
    assert!(dir.path().join("nested/data/vault.db").exists());

    let memory_config = VaultConfig {
        backend: VaultBackend::Memory,
        ..file_config
    };
    let memory = open_vault(&memory_config).unwrap();
    assert!(memory.read().unwrap().is_empty());
}

fn assert_writes_never_interleave(vault: Arc<dyn Vault>) {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let vault = Arc::clone(&vault);
            thread::spawn(move || {
                let batch: Vec<String> = (0..50).map(|j| format!("{i}-{j}")).collect();
                for _ in 0..20 {
                    vault.write(&batch).unwrap();
                    let seen = vault.read().unwrap();
                    let prefix = seen[0].split('-').next().unwrap().to_string();
                    assert_eq!(seen.len(), 50);
                    assert!(seen.iter().all(|p| p.starts_with(&format!("{prefix}-"))));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_memory_vault_concurrent_writes_never_interleave() {
    assert_writes_never_interleave(Arc::new(MemoryVault::new()));
}

#[test]
fn test_file_vault_concurrent_writes_never_interleave() {
    let dir = tempdir().unwrap();
    let vault = Arc::new(FileVault::open_in_dir(dir.path()).unwrap());
    assert_writes_never_interleave(vault.clone());

    let raw = fs::read(vault.path()).unwrap();
    let on_disk: Vec<String> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(on_disk.len(), 50);
}

#[cfg(unix)]
#[test]
fn test_file_vault_keeps_its_handle_when_path_is_replaced() {
    let dir = tempdir().unwrap();
    let vault = FileVault::open_in_dir(dir.path()).unwrap();
    vault.write(&pads(&["a", "b"])).unwrap();

    fs::remove_file(vault.path()).unwrap();
    fs::write(vault.path(), b"[\"intruder\"]").unwrap();

    assert_eq!(vault.read().unwrap(), pads(&["a", "b"]));
    vault.write(&pads(&["b"])).unwrap();
    assert_eq!(vault.read().unwrap(), pads(&["b"]));
    assert_eq!(fs::read(vault.path()).unwrap(), b"[\"intruder\"]");
}
