use crate::commands::{print_contacts, print_json, Context};
use crate::error::invalid_input;
use crate::util::index_for;
use anyhow::Result;
use clap::{ArgAction, Args};
use dialbook_core::{Contact, ContactDto, ContactUpdate};

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub remark: String,
    /// Mark the contact as frequent
    #[arg(long, action = ArgAction::SetTrue)]
    pub frequent: bool,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// 1-based position as shown by `list`
    pub position: usize,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// New email; pass an empty string to clear it
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub remark: Option<String>,
    #[arg(long)]
    pub frequent: Option<bool>,
}

#[derive(Debug, Args)]
pub struct PositionArgs {
    /// 1-based position as shown by `list`
    pub position: usize,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show frequent contacts
    #[arg(long, action = ArgAction::SetTrue)]
    pub frequent: bool,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddArgs) -> Result<()> {
    let contact = Contact::new(
        &args.name,
        &args.phone,
        &args.email,
        &args.remark,
        args.frequent,
    )?;
    ctx.manager.add(contact)?;

    let index = ctx.manager.len() - 1;
    let contact = ctx.manager.get(index)?;
    if ctx.json {
        print_json(&ContactDto::from_contact(index, contact))?;
    } else {
        println!("added {} {}", index + 1, contact.name());
    }
    Ok(())
}

pub fn edit_contact(ctx: &mut Context<'_>, args: EditArgs) -> Result<()> {
    let index = index_for(ctx.manager, args.position)?;
    let update = ContactUpdate {
        name: args.name,
        phone: args.phone,
        email: args.email,
        remark: args.remark,
        is_frequent: args.frequent,
    };
    if update.is_empty() {
        return Err(invalid_input("no updates provided"));
    }

    let mut contact = ctx.manager.get(index)?.clone();
    contact.update(update)?;
    ctx.manager.update(index, contact)?;

    let contact = ctx.manager.get(index)?;
    if ctx.json {
        print_json(&ContactDto::from_contact(index, contact))?;
    } else {
        println!("updated {} {}", index + 1, contact.name());
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: PositionArgs) -> Result<()> {
    let index = index_for(ctx.manager, args.position)?;
    let detail = ContactDto::from_contact(index, ctx.manager.get(index)?);

    if ctx.json {
        return print_json(&detail);
    }

    println!("position: {}", detail.position);
    println!("name: {}", detail.name);
    println!("phone: {}", detail.formatted_phone);
    if !detail.email.is_empty() {
        println!("email: {}", detail.email);
    }
    println!("country: {}", detail.country);
    if !detail.remark.is_empty() {
        println!("remark: {}", detail.remark);
    }
    println!("frequent: {}", if detail.is_frequent { "yes" } else { "no" });
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let hits = if args.frequent {
        ctx.manager.get_frequent()
    } else {
        ctx.manager.get_all()
    };
    print_contacts(ctx, &hits, "no contacts")
}

pub fn delete_contact(ctx: &mut Context<'_>, args: PositionArgs) -> Result<()> {
    let index = index_for(ctx.manager, args.position)?;
    let removed = ctx.manager.delete(index)?;
    if ctx.json {
        print_json(&ContactDto::from_contact(index, &removed))?;
    } else {
        println!("deleted {} {}", index + 1, removed.name());
    }
    Ok(())
}

pub fn star_contact(ctx: &mut Context<'_>, args: PositionArgs) -> Result<()> {
    let index = index_for(ctx.manager, args.position)?;
    let is_frequent = ctx.manager.toggle_frequent(index)?;

    let contact = ctx.manager.get(index)?;
    if ctx.json {
        print_json(&ContactDto::from_contact(index, contact))?;
    } else if is_frequent {
        println!("starred {} {}", index + 1, contact.name());
    } else {
        println!("unstarred {} {}", index + 1, contact.name());
    }
    Ok(())
}
