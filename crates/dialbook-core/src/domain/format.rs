use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// File formats contacts can be exported to and imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Excel,
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported file format: {0}")]
pub struct UnsupportedFormat(pub String);

impl FileFormat {
    pub const ALL: [FileFormat; 4] = [
        FileFormat::Excel,
        FileFormat::Text,
        FileFormat::Markdown,
        FileFormat::Json,
    ];

    /// Picks the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormat> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| UnsupportedFormat(path.display().to_string()))?;
        match ext.as_str() {
            "xlsx" => Ok(FileFormat::Excel),
            "txt" => Ok(FileFormat::Text),
            "md" => Ok(FileFormat::Markdown),
            "json" => Ok(FileFormat::Json),
            _ => Err(UnsupportedFormat(format!(".{ext}"))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Excel => "xlsx",
            FileFormat::Text => "txt",
            FileFormat::Markdown => "md",
            FileFormat::Json => "json",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileFormat::Excel => "excel",
            FileFormat::Text => "text",
            FileFormat::Markdown => "markdown",
            FileFormat::Json => "json",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormat {
    type Err = UnsupportedFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "excel" | "xlsx" => Ok(FileFormat::Excel),
            "text" | "txt" => Ok(FileFormat::Text),
            "markdown" | "md" => Ok(FileFormat::Markdown),
            "json" => Ok(FileFormat::Json),
            _ => Err(UnsupportedFormat(raw.to_string())),
        }
    }
}
