use crate::commands::{print_contacts, print_json, Context};
use anyhow::Result;
use clap::{Args, ValueEnum};
use dialbook_core::KeypadDto;
use dialbook_store::ContactManager;

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub term: String,
    /// Field to match against
    #[arg(long, value_enum, default_value_t = SearchField::All)]
    pub by: SearchField,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    Name,
    Phone,
    Email,
    Keypad,
    All,
}

#[derive(Debug, Args)]
pub struct KeypadArgs {
    pub text: String,
}

pub fn search_contacts(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let manager = &*ctx.manager;
    let term = args.term.as_str();
    let hits = match args.by {
        SearchField::Name => manager.search_by_name(term),
        SearchField::Phone => manager.search_by_phone(term),
        SearchField::Email => manager.search_by_email(term),
        SearchField::Keypad => manager.search_by_keypad(term)?,
        SearchField::All => manager.unified_search(term),
    };
    print_contacts(ctx, &hits, "no matches")
}

/// Needs no contacts file, so it runs without a [`Context`].
pub fn keypad_code(args: KeypadArgs, json: bool) -> Result<()> {
    let dto = KeypadDto {
        code: ContactManager::keypad_code(&args.text),
        text: args.text,
    };
    if json {
        print_json(&dto)
    } else {
        println!("{}", dto.code);
        Ok(())
    }
}
