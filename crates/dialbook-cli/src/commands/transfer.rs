use crate::commands::{print_json, Context};
use crate::error::not_found;
use anyhow::{Context as _, Result};
use clap::Args;
use dialbook_core::FileFormat;
use dialbook_exchange as exchange;
use serde::Serialize;
use std::path::PathBuf;

const DEFAULT_EXPORT_STEM: &str = "contacts";

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// File to import; the format follows the extension
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file; defaults to contacts.<ext> in the configured export
    /// directory
    pub file: Option<PathBuf>,
    /// excel, text, markdown or json; defaults to the file extension
    #[arg(long)]
    pub format: Option<FileFormat>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    format: FileFormat,
    path: PathBuf,
    count: usize,
}

pub fn import_contacts(ctx: &mut Context<'_>, args: ImportArgs) -> Result<()> {
    if !args.file.is_file() {
        return Err(not_found(format!(
            "import file {} does not exist",
            args.file.display()
        )));
    }
    let parsed = exchange::read_file(&args.file)?;
    let report = exchange::apply(ctx.manager, parsed)?;

    if ctx.json {
        return print_json(&report);
    }

    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    println!(
        "Imported {} of {} contacts ({} duplicates, {} invalid)",
        report.imported,
        report.total(),
        report.duplicates,
        report.invalid
    );
    Ok(())
}

pub fn export_contacts(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let (path, format) = match args.file {
        Some(path) => {
            let format = match args.format {
                Some(format) => format,
                None => FileFormat::from_path(&path)?,
            };
            (path, format)
        }
        None => {
            let format = args.format.unwrap_or(ctx.config.export.format);
            let dir = ctx.config.export.directory.clone().unwrap_or_default();
            let file = format!("{DEFAULT_EXPORT_STEM}.{}", format.extension());
            (dir.join(file), format)
        }
    };

    let contacts = ctx.manager.store().contacts();
    exchange::write_file(&path, format, contacts)
        .with_context(|| format!("write export file {}", path.display()))?;

    let report = ExportReport {
        format,
        count: contacts.len(),
        path,
    };
    if ctx.json {
        print_json(&report)?;
    } else {
        println!(
            "Exported {} contacts to {}",
            report.count,
            report.path.display()
        );
    }
    Ok(())
}
