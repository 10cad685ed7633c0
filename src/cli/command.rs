use clap::{Parser, Subcommand, ValueEnum};

use crate::config::SeedChoice;
use crate::domain::contact::{ContactId, Gender};

#[derive(Parser, Debug)]
#[command(name = "rusty-contacts", version, about = "Simple in-memory Contact List")]
pub struct Cli {
    /// Contacts the list starts with (default, empty)
    #[arg(
        long,
        env = "CONTACTS_SEED",
        value_enum,
        default_value_t = SeedChoice::Default,
        global = true
    )]
    pub seed: SeedChoice,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "CONTACTS_LOG", default_value_t = String::from("warn"), global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts, optionally filtered by name or phone
    List {
        /// Case-insensitive name match or literal phone match
        #[arg(short, long)]
        filter: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show the details of one contact
    Show {
        #[arg(long, value_parser = parse_id)]
        id: ContactId,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        #[arg(long, value_enum)]
        gender: Gender,
    },
    /// Edit an existing contact
    /// Fields that are not given keep their current value
    Edit {
        #[arg(long, value_parser = parse_id)]
        id: ContactId,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address, pass "" to remove it
        #[arg(long)]
        email: Option<String>,

        /// Update gender
        #[arg(long, value_enum)]
        gender: Option<Gender>,
    },
    /// Delete a contact by id
    Delete {
        #[arg(long, value_parser = parse_id)]
        id: ContactId,
    },
    /// Call a contact
    Call {
        #[arg(long, value_parser = parse_id)]
        id: ContactId,
    },
    /// Menu driven session that keeps changes until exit
    Interactive,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_id(value: &str) -> Result<ContactId, String> {
    value.parse::<ContactId>().map_err(|e| e.to_string())
}
