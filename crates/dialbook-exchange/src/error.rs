use dialbook_core::{CoreError, FileFormat, UnsupportedFormat};
use dialbook_store::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),
    #[error("{0} support is not compiled in")]
    Unavailable(FileFormat),
    #[cfg(feature = "excel")]
    #[error("excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),
    #[cfg(feature = "excel")]
    #[error("excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),
}

pub type Result<T> = std::result::Result<T, ExchangeError>;
