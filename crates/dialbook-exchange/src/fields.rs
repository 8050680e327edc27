//! Column labels and cell escaping shared by the exchange formats.

use dialbook_core::ContactRecord;

pub(crate) const TITLE: &str = "Address Book";

pub(crate) const NAME: &str = "Name";
pub(crate) const PHONE: &str = "Phone";
pub(crate) const EMAIL: &str = "Email";
pub(crate) const COUNTRY: &str = "Country/Region";
pub(crate) const REMARK: &str = "Remark";
pub(crate) const FREQUENT: &str = "Frequent";

/// Export column order. `Country/Region` is written but never read back.
pub(crate) const HEADERS: [&str; 6] = [NAME, PHONE, EMAIL, COUNTRY, REMARK, FREQUENT];

pub(crate) fn frequent_label(is_frequent: bool) -> &'static str {
    if is_frequent {
        "yes"
    } else {
        "no"
    }
}

pub(crate) fn parse_frequent(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "yes" | "y" | "true" | "1" | "是"
    )
}

/// Escapes backslashes and line breaks, plus `|` when `pipe` is set, so a
/// value stays on one line and inside one table cell.
pub(crate) fn escape_cell(value: &str, pipe: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '|' if pipe => out.push_str("\\|"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn unescape_cell(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Where each stored field sits in a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Columns {
    name: usize,
    phone: usize,
    email: Option<usize>,
    remark: Option<usize>,
    frequent: Option<usize>,
}

impl Columns {
    /// The layout [`HEADERS`] describes.
    pub(crate) fn positional() -> Self {
        Self {
            name: 0,
            phone: 1,
            email: Some(2),
            remark: Some(4),
            frequent: Some(5),
        }
    }

    /// Locates the columns by label. `None` unless both name and phone are
    /// present.
    pub(crate) fn from_header<S: AsRef<str>>(header: &[S]) -> Option<Self> {
        let find = |label: &str| {
            header
                .iter()
                .position(|cell| cell.as_ref().trim().eq_ignore_ascii_case(label))
        };
        Some(Self {
            name: find(NAME)?,
            phone: find(PHONE)?,
            email: find(EMAIL),
            remark: find(REMARK),
            frequent: find(FREQUENT),
        })
    }

    /// Builds a record from one row, or `None` when name or phone is blank.
    pub(crate) fn record<S: AsRef<str>>(&self, row: &[S]) -> Option<ContactRecord> {
        let cell = |index: Option<usize>| {
            index
                .and_then(|index| row.get(index))
                .map(|value| value.as_ref().trim().to_string())
                .unwrap_or_default()
        };
        let name = cell(Some(self.name));
        let phone = cell(Some(self.phone));
        if name.is_empty() || phone.is_empty() {
            return None;
        }
        Some(ContactRecord {
            name,
            phone,
            email: cell(self.email),
            remark: cell(self.remark),
            is_frequent: parse_frequent(&cell(self.frequent)),
        })
    }
}
