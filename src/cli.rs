pub mod command;
pub mod interactive;
pub mod run;

pub use run::run_app;

use std::io::{BufRead, Write};

use crate::domain::{Command, contact::Contact};
use crate::errors::AppError;

pub const MENU: &str = "\
1. List Contacts
2. Search Contacts
3. Show Contact
4. Add Contact
5. Edit Contact
6. Delete Contact
7. Call Contact
8. Exit";

pub fn parse_command(action: &str) -> Result<Command, AppError> {
    match action.trim() {
        "1" => Ok(Command::ListContacts),
        "2" => Ok(Command::SearchContacts),
        "3" => Ok(Command::ShowContact),
        "4" => Ok(Command::AddContact),
        "5" => Ok(Command::EditContact),
        "6" => Ok(Command::DeleteContact),
        "7" => Ok(Command::CallContact),
        "8" => Ok(Command::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact) -> String {
    format!(
        "[{}] {}\n\
        Phone: {}\n\
        Email: {}\n\
        Gender: {}",
        contact.initial(),
        contact.name,
        contact.phone,
        contact.display_email(),
        contact.gender
    )
}

pub fn listing_row(contact: &Contact) -> String {
    format!(
        "{:>3}. {:<20} {:<16} {}",
        contact.id, contact.name, contact.phone, contact.email
    )
}

pub fn write_listing<W: Write>(out: &mut W, contacts: &[&Contact]) -> Result<(), AppError> {
    if contacts.is_empty() {
        writeln!(out, "No contacts found")?;
        return Ok(());
    }
    for contact in contacts {
        writeln!(out, "{}", listing_row(contact))?;
    }
    Ok(())
}

// INPUT FUNCTIONS
/// One trimmed line, or `None` once the input is exhausted.
pub fn get_input<R: BufRead>(reader: &mut R) -> Result<Option<String>, AppError> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// One line exactly as typed, only the line ending removed.
pub fn get_raw_input<R: BufRead>(reader: &mut R) -> Result<Option<String>, AppError> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(Some(input))
}
