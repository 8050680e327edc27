//! Excel workbook export: one worksheet, a header row, one row per contact.
//!
//! Compiled only with the `excel` feature; without it both directions
//! return [`ExchangeError::Unavailable`].

use crate::error::{ExchangeError, Result};
use crate::ParsedContacts;
use dialbook_core::Contact;
#[cfg(not(feature = "excel"))]
use dialbook_core::FileFormat;

#[cfg(feature = "excel")]
const SHEET_NAME: &str = "Contacts";

#[cfg(feature = "excel")]
pub fn encode(contacts: &[Contact]) -> Result<Vec<u8>> {
    use crate::fields::{self, HEADERS};
    use rust_xlsxwriter::{Format, Workbook};

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;
        for (col, label) in HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *label, &bold)?;
        }
        for (row, contact) in contacts.iter().enumerate() {
            let row = row as u32 + 1;
            let cells = [
                contact.name(),
                contact.phone(),
                contact.email(),
                contact.country(),
                contact.remark(),
                fields::frequent_label(contact.is_frequent()),
            ];
            for (col, value) in cells.into_iter().enumerate() {
                sheet.write_string(row, col as u16, value)?;
            }
        }
    }
    Ok(workbook.save_to_buffer()?)
}

/// Reads the first worksheet. The first row must label at least the Name and
/// Phone columns; blank rows are ignored.
#[cfg(feature = "excel")]
pub fn decode(data: &[u8]) -> Result<ParsedContacts> {
    use crate::fields::Columns;
    use calamine::{Reader, Xlsx};
    use std::io::Cursor;

    let mut workbook = Xlsx::new(Cursor::new(data))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExchangeError::Parse("workbook has no worksheets".to_string()))??;

    let mut parsed = ParsedContacts::default();
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(parsed);
    };
    let labels: Vec<String> = header.iter().map(cell_text).collect();
    let columns = Columns::from_header(&labels).ok_or_else(|| {
        ExchangeError::Parse("header row must contain Name and Phone columns".to_string())
    })?;

    for (offset, row) in rows.enumerate() {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        if cells.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match columns.record(&cells) {
            Some(record) => parsed.records.push(record),
            None => parsed.skip(format!(
                "row {}: missing name or phone; skipping",
                offset + 2
            )),
        }
    }
    Ok(parsed)
}

/// Spreadsheet apps store digit-only phones as numbers; whole floats come
/// back without a decimal part.
#[cfg(feature = "excel")]
fn cell_text(cell: &calamine::Data) -> String {
    use calamine::Data;

    match cell {
        Data::String(value) => value.clone(),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            (*value as i64).to_string()
        }
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        _ => String::new(),
    }
}

#[cfg(not(feature = "excel"))]
pub fn encode(_contacts: &[Contact]) -> Result<Vec<u8>> {
    Err(ExchangeError::Unavailable(FileFormat::Excel))
}

#[cfg(not(feature = "excel"))]
pub fn decode(_data: &[u8]) -> Result<ParsedContacts> {
    Err(ExchangeError::Unavailable(FileFormat::Excel))
}
