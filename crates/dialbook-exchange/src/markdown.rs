//! Markdown table export. `|` inside a cell is written as `\|`.

use crate::error::Result;
use crate::fields::{self, escape_cell, unescape_cell, Columns, HEADERS};
use crate::ParsedContacts;
use dialbook_core::Contact;

pub fn encode(contacts: &[Contact]) -> String {
    let mut out = format!("# {}\n\n", fields::TITLE);
    push_row(&mut out, HEADERS.iter().map(|header| header.to_string()));
    push_row(
        &mut out,
        HEADERS.iter().map(|header| "-".repeat(header.chars().count())),
    );
    for contact in contacts {
        push_row(
            &mut out,
            [
                contact.name(),
                contact.phone(),
                contact.email(),
                contact.country(),
                contact.remark(),
                fields::frequent_label(contact.is_frequent()),
            ]
            .into_iter()
            .map(|cell| escape_cell(cell, true)),
        );
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&cell);
        out.push_str(" |");
    }
    out.push('\n');
}

pub fn decode(data: &str) -> Result<ParsedContacts> {
    let mut parsed = ParsedContacts::default();
    let mut columns: Option<Columns> = None;

    for (line_no, line) in data.lines().enumerate() {
        let trimmed = line.trim();
        if !trimmed.starts_with('|') {
            continue;
        }
        let cells = split_row(trimmed);
        if is_separator(&cells) {
            continue;
        }
        if columns.is_none() {
            if let Some(found) = Columns::from_header(&cells) {
                columns = Some(found);
                continue;
            }
        }

        let layout = columns.unwrap_or_else(Columns::positional);
        match layout.record(&cells) {
            Some(record) => parsed.records.push(record),
            None => parsed.skip(format!(
                "line {}: missing name or phone; skipping",
                line_no + 1
            )),
        }
    }

    Ok(parsed)
}

/// Splits a `| a | b |` row on unescaped pipes and unescapes each cell.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                current.push(ch);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(current);

    // Drop the empty edges outside the leading and trailing pipes.
    if cells.first().is_some_and(|cell| cell.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.trim().is_empty()) {
        cells.pop();
    }
    cells
        .iter()
        .map(|cell| unescape_cell(cell.trim()))
        .collect()
}

fn is_separator(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let cell = cell.trim();
            !cell.is_empty() && cell.chars().all(|ch| ch == '-' || ch == ':')
        })
}
