use crate::error::Result;
use crate::ParsedContacts;
use dialbook_core::Contact;
use dialbook_store::error::StoreError;
use dialbook_store::ContactManager;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub duplicates: usize,
    pub invalid: usize,
    pub warnings: Vec<String>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.imported + self.duplicates + self.invalid
    }
}

/// Adds every parsed record through `manager`. Invalid records and phones
/// already in the book are counted and reported; any other store failure
/// stops the import, keeping what was added so far.
pub fn apply(manager: &mut ContactManager, parsed: ParsedContacts) -> Result<ImportReport> {
    let mut report = ImportReport {
        invalid: parsed.skipped,
        warnings: parsed.warnings,
        ..ImportReport::default()
    };

    for record in parsed.records {
        let contact = match Contact::from_record(&record) {
            Ok(contact) => contact,
            Err(err) => {
                warn!(name = %record.name, %err, "skipping invalid import record");
                report.invalid += 1;
                report
                    .warnings
                    .push(format!("{}: {err}; skipping", display_name(&record.name)));
                continue;
            }
        };

        match manager.add(contact) {
            Ok(()) => report.imported += 1,
            Err(StoreError::DuplicatePhone(phone)) => {
                report.duplicates += 1;
                report.warnings.push(format!(
                    "{}: phone {phone} already exists; skipping",
                    display_name(&record.name)
                ));
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!(
        imported = report.imported,
        duplicates = report.duplicates,
        invalid = report.invalid,
        "import finished"
    );
    Ok(report)
}

fn display_name(name: &str) -> &str {
    let name = name.trim();
    if name.is_empty() {
        "(unnamed)"
    } else {
        name
    }
}
