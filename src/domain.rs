pub mod contact;
pub mod manager;
pub mod search;

/// Menu entries of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListContacts,
    SearchContacts,
    ShowContact,
    AddContact,
    EditContact,
    DeleteContact,
    CallContact,
    Exit,
}
