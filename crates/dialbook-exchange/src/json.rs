//! JSON export in the same shape as the contacts file.

use crate::error::{ExchangeError, Result};
use crate::ParsedContacts;
use dialbook_core::{Contact, ContactRecord};
use serde_json::Value;

pub fn encode(contacts: &[Contact]) -> Result<Vec<u8>> {
    let records: Vec<ContactRecord> = contacts.iter().map(Contact::to_record).collect();
    let mut out = serde_json::to_vec_pretty(&records)?;
    out.push(b'\n');
    Ok(out)
}

/// Decodes a record array. A non-array document is an error; elements that
/// are not records are skipped with a warning.
pub fn decode(data: &[u8]) -> Result<ParsedContacts> {
    let value: Value = serde_json::from_slice(data)?;
    let Value::Array(items) = value else {
        return Err(ExchangeError::Parse(
            "expected a JSON array of contacts".to_string(),
        ));
    };

    let mut parsed = ParsedContacts::default();
    for (position, mut item) in items.into_iter().enumerate() {
        stringify_numbers(&mut item);
        match serde_json::from_value::<ContactRecord>(item) {
            Ok(record) => parsed.records.push(record),
            Err(err) => parsed.skip(format!("entry {}: {err}; skipping", position + 1)),
        }
    }
    Ok(parsed)
}

const TEXT_FIELDS: [&str; 4] = ["name", "phone", "email", "remark"];

/// Spreadsheet-made JSON often carries phones as numbers.
fn stringify_numbers(item: &mut Value) {
    let Value::Object(fields) = item else {
        return;
    };
    for key in TEXT_FIELDS {
        if let Some(value @ Value::Number(_)) = fields.get_mut(key) {
            *value = Value::String(value.to_string());
        }
    }
}
