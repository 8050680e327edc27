//! Plain-text listing: a title block, then one numbered block per contact.

use crate::error::Result;
use crate::fields::{self, escape_cell, unescape_cell};
use crate::ParsedContacts;
use dialbook_core::{Contact, ContactRecord};

const RULE_WIDTH: usize = 50;

pub fn encode(contacts: &[Contact]) -> String {
    let mut out = String::new();
    out.push_str(fields::TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for (position, contact) in contacts.iter().enumerate() {
        out.push_str(&format!("Contact {}:\n", position + 1));
        push_line(&mut out, fields::NAME, contact.name());
        push_line(&mut out, fields::PHONE, contact.phone());
        push_line(&mut out, fields::EMAIL, contact.email());
        push_line(&mut out, fields::COUNTRY, contact.country());
        push_line(&mut out, fields::REMARK, contact.remark());
        push_line(
            &mut out,
            fields::FREQUENT,
            fields::frequent_label(contact.is_frequent()),
        );
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push_str("\n\n");
    }
    out
}

fn push_line(out: &mut String, label: &str, value: &str) {
    out.push_str(label);
    out.push_str(": ");
    out.push_str(&escape_cell(value, false));
    out.push('\n');
}

pub fn decode(data: &str) -> Result<ParsedContacts> {
    let mut parsed = ParsedContacts::default();
    let mut current: Option<RawBlock> = None;

    for line in data.lines() {
        let trimmed = line.trim();
        if is_block_start(trimmed) {
            if let Some(block) = current.replace(RawBlock::new(trimmed)) {
                block.finish(&mut parsed);
            }
            continue;
        }

        let Some(block) = current.as_mut() else {
            continue;
        };
        let Some((label, value)) = trimmed.split_once(':') else {
            continue;
        };
        let value = unescape_cell(value.trim());
        match label.trim() {
            fields::NAME => block.name = Some(value),
            fields::PHONE => block.phone = Some(value),
            fields::EMAIL => block.email = value,
            fields::REMARK => block.remark = value,
            fields::FREQUENT => block.is_frequent = fields::parse_frequent(&value),
            _ => {}
        }
    }

    if let Some(block) = current.take() {
        block.finish(&mut parsed);
    }
    Ok(parsed)
}

fn is_block_start(line: &str) -> bool {
    line.strip_prefix("Contact ")
        .and_then(|rest| rest.strip_suffix(':'))
        .is_some_and(|number| !number.is_empty() && number.chars().all(|ch| ch.is_ascii_digit()))
}

struct RawBlock {
    label: String,
    name: Option<String>,
    phone: Option<String>,
    email: String,
    remark: String,
    is_frequent: bool,
}

impl RawBlock {
    fn new(header: &str) -> Self {
        Self {
            label: header.trim_end_matches(':').to_string(),
            name: None,
            phone: None,
            email: String::new(),
            remark: String::new(),
            is_frequent: false,
        }
    }

    fn finish(self, parsed: &mut ParsedContacts) {
        match (self.name, self.phone) {
            (Some(name), Some(phone)) if !name.is_empty() && !phone.is_empty() => {
                parsed.records.push(ContactRecord {
                    name,
                    phone,
                    email: self.email,
                    remark: self.remark,
                    is_frequent: self.is_frequent,
                });
            }
            _ => parsed.skip(format!("{}: missing name or phone; skipping", self.label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("Ada Lovelace", "+447700900123", "ada@example.com", "", true)
                .expect("valid"),
            Contact::new("张三", "13800138000", "", "two\nlines", false).expect("valid"),
        ]
    }

    #[test]
    fn encode_writes_numbered_blocks() {
        let out = encode(&sample());
        assert!(out.starts_with("Address Book\n====="));
        assert!(out.contains("Contact 1:\nName: Ada Lovelace\nPhone: +447700900123\n"));
        assert!(out.contains("Country/Region: United Kingdom\n"));
        assert!(out.contains("Contact 2:\nName: 张三\n"));
        assert!(out.contains("Remark: two\\nlines\n"));
        assert!(out.contains("Frequent: yes\n"));
    }

    #[test]
    fn decode_reads_back_encoded_listing() {
        let parsed = decode(&encode(&sample())).expect("decode");
        assert_eq!(parsed.skipped, 0);
        let expected: Vec<ContactRecord> = sample().iter().map(Contact::to_record).collect();
        assert_eq!(parsed.records, expected);
    }

    #[test]
    fn crlf_remark_roundtrips() {
        let contacts =
            vec![Contact::new("Bob", "13912345678", "", "line one\r\nline two", false)
                .expect("valid")];
        let parsed = decode(&encode(&contacts)).expect("decode");
        assert_eq!(parsed.records[0].remark, "line one\r\nline two");
    }

    #[test]
    fn decode_tolerates_empty_values_and_skips_incomplete_blocks() {
        let data = "Address Book\n\nContact 1:\nName: Bob\nPhone: 13912345678\nEmail:\n\
                    Remark: \n-----\nContact 2:\nName: No Phone\n-----\n";
        let parsed = decode(data).expect("decode");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].email, "");
        assert_eq!(parsed.skipped, 1);
        assert!(parsed.warnings[0].starts_with("Contact 2"));
    }
}
