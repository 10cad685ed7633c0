use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use super::command::{Cli, Commands, OutputFormat};
use super::interactive::Session;
use super::{display_contact, write_listing};
use crate::config::Config;
use crate::domain::contact::ContactFields;
use crate::domain::manager::ContactManager;
use crate::errors::AppError;

pub fn run_app() -> Result<(), AppError> {
    // .env values are visible to clap's env fallbacks
    dotenv().ok();
    let cli = Cli::parse();

    let config = Config::new(cli.seed, cli.log_level);
    config.init_tracing()?;

    let mut manager = config.build_manager();
    info!(
        seed = config.seed.is_which(),
        contacts = manager.len(),
        "contact list ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&mut manager, cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Runs a single subcommand against `manager`, writing what the user sees to `out`.
pub fn execute<W: Write>(
    manager: &mut ContactManager,
    command: Commands,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Commands::List { filter, format } => {
            let contacts = manager.list(filter.as_deref().unwrap_or_default());
            match format {
                OutputFormat::Table => write_listing(out, &contacts)?,
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&contacts)?)?
                }
            }
            Ok(())
        }

        Commands::Show { id, format } => {
            let contact = manager.set_viewed(id)?;
            match format {
                OutputFormat::Table => writeln!(out, "{}", display_contact(contact))?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(contact)?)?,
            }
            Ok(())
        }

        Commands::Add {
            name,
            phone,
            email,
            gender,
        } => {
            let fields = ContactFields::new(name, phone, email.unwrap_or_default(), gender);
            let id = manager.create(fields)?;

            writeln!(out, "Contact {id} added successfully")?;
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            phone,
            email,
            gender,
        } => {
            let mut fields = manager.set_editing(id)?.fields();
            if let Some(name) = name {
                fields.name = name;
            }
            if let Some(phone) = phone {
                fields.phone = phone;
            }
            if let Some(email) = email {
                fields.email = email;
            }
            if let Some(gender) = gender {
                fields.gender = gender;
            }

            let id = manager.save(fields)?;
            writeln!(out, "Contact {id} updated successfully")?;
            Ok(())
        }

        Commands::Delete { id } => {
            match manager.delete(id) {
                Some(contact) => {
                    writeln!(out, "Contact {} deleted successfully", contact.name)?
                }
                None => writeln!(out, "No contact with id {id}, nothing deleted")?,
            }
            Ok(())
        }

        Commands::Call { id } => {
            let notice = manager.call(id).ok_or(AppError::NotFound(id))?;
            writeln!(out, "{notice}")?;
            Ok(())
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            Session::new(manager, stdin.lock(), out).run()
        }
    }
}
