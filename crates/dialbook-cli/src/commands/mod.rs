use crate::util::frequent_marker;
use anyhow::Result;
use dialbook_config::AppConfig;
use dialbook_core::ContactDto;
use dialbook_store::{ContactManager, ContactRef};
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod contacts;
pub mod search;
pub mod transfer;

pub struct Context<'a> {
    pub manager: &'a mut ContactManager,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Prints one line per contact, or the DTO array with `--json`.
pub fn print_contacts(ctx: &Context<'_>, hits: &[ContactRef<'_>], empty: &str) -> Result<()> {
    let items: Vec<ContactDto> = hits
        .iter()
        .map(|hit| ContactDto::from_contact(hit.index, hit.contact))
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("{empty}");
        return Ok(());
    }

    for item in items {
        println!(
            "{:>3} {} {}  {}  [{}]",
            item.position,
            frequent_marker(item.is_frequent),
            item.name,
            item.formatted_phone,
            item.country
        );
    }
    Ok(())
}
