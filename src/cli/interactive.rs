use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::{MENU, display_contact, get_input, get_raw_input, parse_command, write_listing};
use crate::domain::Command;
use crate::domain::contact::{ContactFields, ContactId, Gender};
use crate::domain::manager::ContactManager;
use crate::errors::AppError;
use crate::validation::ValidationErrors;

const GO_BACK: &str = "*";
const CLEAR: &str = "-";

/// What a menu action leaves behind for the main loop.
enum Flow {
    Continue,
    EndOfInput,
}

/// Menu loop over a reader and a writer. Changes live until the session ends.
pub struct Session<'a, R, W> {
    manager: &'a mut ContactManager,
    input: R,
    output: W,
}

// Bail out of the current action when the input runs dry
macro_rules! input_or_end {
    ($expr:expr) => {
        match $expr? {
            Some(line) => line,
            None => return Ok(Flow::EndOfInput),
        }
    };
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(manager: &'a mut ContactManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        info!(contacts = self.manager.len(), "interactive session started");
        writeln!(self.output, "\n--- Contact BOOK ---")?;

        'outerloop: loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(action) = self.prompt("")? else {
                break 'outerloop;
            };

            let command = match parse_command(&action) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue 'outerloop;
                }
            };
            debug!(?command, "menu choice");

            let outcome = match command {
                Command::ListContacts => self.list_contacts(),
                Command::SearchContacts => self.search_contacts(),
                Command::ShowContact => self.show_contact(),
                Command::AddContact => self.add_contact(),
                Command::EditContact => self.edit_contact(),
                Command::DeleteContact => self.delete_contact(),
                Command::CallContact => self.call_contact(),
                Command::Exit => break 'outerloop,
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::EndOfInput) => break 'outerloop,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }

        writeln!(self.output, "\nBye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        self.write_prompt(message)?;
        get_input(&mut self.input)
    }

    // Search text is matched as typed, surrounding spaces included
    fn prompt_raw(&mut self, message: &str) -> Result<Option<String>, AppError> {
        self.write_prompt(message)?;
        get_raw_input(&mut self.input)
    }

    fn write_prompt(&mut self, message: &str) -> Result<(), AppError> {
        if !message.is_empty() {
            writeln!(self.output, "\n{message}")?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt_id(&mut self, action: &str) -> Result<Option<Option<ContactId>>, AppError> {
        let message = format!("Enter contact id to {action}\n{GO_BACK} to go back: ");
        let Some(input) = self.prompt(&message)? else {
            return Ok(None);
        };
        if input == GO_BACK {
            return Ok(Some(None));
        }
        Ok(Some(Some(input.parse::<ContactId>()?)))
    }

    fn write_errors(&mut self, errors: &ValidationErrors) -> Result<(), AppError> {
        for error in errors {
            writeln!(self.output, "{}: {}", error.field, error.kind)?;
        }
        Ok(())
    }

    fn list_contacts(&mut self) -> Result<Flow, AppError> {
        self.manager.show_list();
        let contacts = self.manager.list("");
        write_listing(&mut self.output, &contacts)?;
        Ok(Flow::Continue)
    }

    fn search_contacts(&mut self) -> Result<Flow, AppError> {
        let filter = input_or_end!(self.prompt_raw("Search by name or phone: "));
        let contacts = self.manager.list(&filter);
        write_listing(&mut self.output, &contacts)?;
        Ok(Flow::Continue)
    }

    fn show_contact(&mut self) -> Result<Flow, AppError> {
        let Some(id) = input_or_end!(self.prompt_id("show")) else {
            return Ok(Flow::Continue);
        };
        let detail = display_contact(self.manager.set_viewed(id)?);
        writeln!(self.output, "\n{detail}")?;

        let choice = input_or_end!(self.prompt("e to edit this contact, enter to go back: "));
        if !choice.eq_ignore_ascii_case("e") {
            self.manager.show_list();
            return Ok(Flow::Continue);
        }

        let fields = self.manager.edit_viewed()?.fields();
        self.edit_form(fields)
    }

    fn read_gender(
        &mut self,
        current: Option<Gender>,
    ) -> Result<Option<Option<Gender>>, AppError> {
        loop {
            let message = match current {
                Some(gender) => format!("Enter gender (female/male) [{gender}]: "),
                None => "Enter gender (female/male): ".to_string(),
            };
            let Some(input) = self.prompt(&message)? else {
                return Ok(None);
            };
            if input == GO_BACK {
                return Ok(Some(None));
            }
            if input.is_empty()
                && let Some(gender) = current
            {
                return Ok(Some(Some(gender)));
            }
            match input.parse::<Gender>() {
                Ok(gender) => return Ok(Some(Some(gender))),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn add_contact(&mut self) -> Result<Flow, AppError> {
        self.manager.show_list();

        'add_contact: loop {
            let message = format!("Enter contact name \n{GO_BACK} to go back: ");
            let name = input_or_end!(self.prompt(&message));
            if name == GO_BACK {
                break 'add_contact;
            }
            let phone = input_or_end!(self.prompt("Enter contact phone number: "));
            let email = input_or_end!(self.prompt("Enter contact email (optional): "));
            let Some(gender) = input_or_end!(self.read_gender(None)) else {
                break 'add_contact;
            };

            match self.manager.save(ContactFields::new(name, phone, email, gender)) {
                Ok(id) => {
                    writeln!(self.output, "Contact {id} added successfully!")?;
                    break 'add_contact;
                }
                Err(AppError::Validation(errors)) => {
                    self.write_errors(&errors)?;
                    continue 'add_contact;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Flow::Continue)
    }

    fn edit_contact(&mut self) -> Result<Flow, AppError> {
        let Some(id) = input_or_end!(self.prompt_id("edit")) else {
            return Ok(Flow::Continue);
        };
        let fields = self.manager.set_editing(id)?.fields();
        self.edit_form(fields)
    }

    /// Prompts over the contact under edit until it saves or the user backs out.
    fn edit_form(&mut self, mut fields: ContactFields) -> Result<Flow, AppError> {
        'edit_contact: loop {
            writeln!(self.output, "\nPress enter to keep the value in brackets")?;

            let name = input_or_end!(self.prompt(&format!("Name [{}]: ", fields.name)));
            if name == GO_BACK {
                break 'edit_contact;
            }
            if !name.is_empty() {
                fields.name = name;
            }

            let phone = input_or_end!(self.prompt(&format!("Phone [{}]: ", fields.phone)));
            if !phone.is_empty() {
                fields.phone = phone;
            }

            let email = input_or_end!(self.prompt(&format!(
                "Email [{}] ({CLEAR} to remove): ",
                fields.email
            )));
            match email.as_str() {
                "" => {}
                CLEAR => fields.email.clear(),
                _ => fields.email = email,
            }

            let Some(gender) = input_or_end!(self.read_gender(Some(fields.gender))) else {
                break 'edit_contact;
            };
            fields.gender = gender;

            match self.manager.save(fields.clone()) {
                Ok(id) => {
                    writeln!(self.output, "Contact {id} updated successfully!")?;
                    return Ok(Flow::Continue);
                }
                Err(AppError::Validation(errors)) => {
                    self.write_errors(&errors)?;
                    continue 'edit_contact;
                }
                Err(e) => return Err(e),
            }
        }

        self.manager.show_list();
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> Result<Flow, AppError> {
        let Some(id) = input_or_end!(self.prompt_id("delete")) else {
            return Ok(Flow::Continue);
        };
        let detail = display_contact(self.manager.set_viewed(id)?);

        let message = format!("Are you sure you want to delete this contact\n{detail}\n? (y/n)");
        let consent = input_or_end!(self.prompt(&message)).to_lowercase();
        if consent != "y" {
            self.manager.show_list();
            return Ok(Flow::Continue);
        }

        if let Some(contact) = self.manager.delete_viewed() {
            writeln!(self.output, "Contact {} deleted successfully!", contact.name)?;
        }
        Ok(Flow::Continue)
    }

    fn call_contact(&mut self) -> Result<Flow, AppError> {
        let Some(id) = input_or_end!(self.prompt_id("call")) else {
            return Ok(Flow::Continue);
        };
        let notice = self.manager.call(id).ok_or(AppError::NotFound(id))?;
        writeln!(self.output, "{notice}")?;
        Ok(Flow::Continue)
    }
}
