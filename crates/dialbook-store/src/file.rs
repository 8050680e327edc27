use crate::error::{Result, StoreError};
use crate::paths;
use dialbook_core::{Contact, ContactRecord};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

pub(crate) struct Loaded {
    pub contacts: Vec<Contact>,
    pub skipped: usize,
}

/// Reads the contacts file. `None` when the file does not exist yet.
pub(crate) fn read_contacts(path: &Path) -> Result<Option<Loaded>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            return Err(StoreError::corrupt(path, "path is a directory"));
        }
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StoreError::corrupt(path, format!("stat failed: {err}"))),
    }

    let content = fs::read_to_string(path)
        .map_err(|err| StoreError::corrupt(path, format!("read failed: {err}")))?;
    let parsed: Value = serde_json::from_str(&content)
        .map_err(|err| StoreError::corrupt(path, format!("invalid JSON: {err}")))?;
    let Value::Array(items) = parsed else {
        return Err(StoreError::corrupt(path, "expected a list of contacts"));
    };

    let mut contacts = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for (position, item) in items.into_iter().enumerate() {
        match parse_record(item) {
            Ok(contact) => contacts.push(contact),
            Err(reason) => {
                warn!(position, %reason, "skipping invalid contact record");
                skipped += 1;
            }
        }
    }

    Ok(Some(Loaded { contacts, skipped }))
}

fn parse_record(item: Value) -> std::result::Result<Contact, String> {
    let record: ContactRecord = serde_json::from_value(item).map_err(|err| err.to_string())?;
    Contact::from_record(&record).map_err(|err| err.to_string())
}

/// Serializes `contacts` and replaces `path` through a sibling temp file, so
/// readers see either the old or the new file, never a partial one.
pub(crate) fn write_contacts(path: &Path, contacts: &[Contact]) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let records: Vec<ContactRecord> = contacts.iter().map(Contact::to_record).collect();
    let mut content = serde_json::to_string_pretty(&records)?;
    content.push('\n');

    let tmp_path = temp_sibling(path)?;
    if let Err(err) = write_and_rename(&tmp_path, path, content.as_bytes()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

fn write_and_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    restrict_file_permissions(tmp_path)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidDataPath(path.to_path_buf()))?;
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(parent.join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4()
    )))
}

#[cfg(unix)]
fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
