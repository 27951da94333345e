// src/files.rs
//! Fixed-size secret files for a read-only presentation layer
//!
//! Each record is exposed as a file of exactly `SECRET_FILE_SIZE` bytes:
//! the record's JSON followed by spaces and a final newline.

use tracing::warn;

use crate::aliases::SecretBytes;
use crate::consts::SECRET_FILE_SIZE;
use crate::enums::SecretKind;
use crate::error::GuardError;
use crate::guard::Guard;

/// Disclose `kind` through the guard and render it as file content
pub fn read_secret_file(guard: &Guard, kind: SecretKind) -> Result<SecretBytes, GuardError> {
    let record = guard.access(kind).inspect_err(|e| {
        warn!("could not read '{}': {e}", kind.file_name());
    })?;
    fill_to_file_size(kind, record)
}

/// Fill a disclosed record to the fixed file size
pub fn fill_to_file_size(kind: SecretKind, record: SecretBytes) -> Result<SecretBytes, GuardError> {
    let len = record.expose_secret().len();
    if len > SECRET_FILE_SIZE {
        return Err(GuardError::OversizedRecord { kind, len });
    }
    let mut content = Vec::with_capacity(SECRET_FILE_SIZE);
    content.extend_from_slice(record.expose_secret());
    if len < SECRET_FILE_SIZE {
        content.resize(SECRET_FILE_SIZE - 1, b' ');
        content.push(b'\n');
    }
    Ok(SecretBytes::new(content))
}

/// Kind served by a file name, if it is one of the three secret files
pub fn kind_for_file(name: &str) -> Option<SecretKind> {
    SecretKind::from_file_name(name)
}
