pub mod error;
pub mod excel;
mod fields;
pub mod import;
pub mod json;
pub mod markdown;
pub mod text;

pub use error::{ExchangeError, Result};
pub use import::{apply, ImportReport};

use dialbook_core::{Contact, ContactRecord, FileFormat};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Records read from an import file before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContacts {
    pub records: Vec<ContactRecord>,
    pub warnings: Vec<String>,
    pub skipped: usize,
}

impl ParsedContacts {
    pub(crate) fn skip(&mut self, warning: String) {
        self.warnings.push(warning);
        self.skipped += 1;
    }
}

pub fn encode(format: FileFormat, contacts: &[Contact]) -> Result<Vec<u8>> {
    match format {
        FileFormat::Excel => excel::encode(contacts),
        FileFormat::Text => Ok(text::encode(contacts).into_bytes()),
        FileFormat::Markdown => Ok(markdown::encode(contacts).into_bytes()),
        FileFormat::Json => json::encode(contacts),
    }
}

pub fn decode(format: FileFormat, data: &[u8]) -> Result<ParsedContacts> {
    match format {
        FileFormat::Excel => excel::decode(data),
        FileFormat::Text => text::decode(utf8(data)?),
        FileFormat::Markdown => markdown::decode(utf8(data)?),
        FileFormat::Json => json::decode(data),
    }
}

/// Reads and decodes `path`, picking the format from its extension.
pub fn read_file(path: &Path) -> Result<ParsedContacts> {
    let format = FileFormat::from_path(path)?;
    let data = fs::read(path)?;
    let parsed = decode(format, &data)?;
    debug!(
        path = %path.display(),
        %format,
        records = parsed.records.len(),
        skipped = parsed.skipped,
        "import file decoded"
    );
    Ok(parsed)
}

/// Encodes `contacts` and writes them to `path`, creating parent directories.
pub fn write_file(path: &Path, format: FileFormat, contacts: &[Contact]) -> Result<()> {
    let data = encode(format, contacts)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, data)?;
    info!(path = %path.display(), %format, contacts = contacts.len(), "contacts exported");
    Ok(())
}

fn utf8(data: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(data)
        .map_err(|err| ExchangeError::Parse(format!("file is not valid UTF-8: {err}")))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}
