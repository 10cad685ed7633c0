use std::collections::HashSet;

use tracing::debug;

use super::contact::{CallNotice, Contact, ContactFields, ContactId, seed_contacts};
use super::search::filter_contacts;
use crate::errors::AppError;
use crate::validation;

/// Which contact the user is looking at and which one is open in the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    pub viewed: Option<ContactId>,
    pub editing: Option<ContactId>,
}

impl Focus {
    fn forget(&mut self, id: ContactId) {
        if self.viewed == Some(id) {
            self.viewed = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactManager {
    contacts: Vec<Contact>,
    next_id: u64,
    focus: Focus,
}

impl Default for ContactManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactManager {
    /// A store holding the seed contacts.
    pub fn new() -> Self {
        Self::from_unique(seed_contacts())
    }

    pub fn empty() -> Self {
        Self::from_unique(Vec::new())
    }

    /// Ids keep counting from the highest one present.
    /// Two contacts sharing an id are rejected.
    pub fn with_contacts(contacts: Vec<Contact>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(contacts.len());
        if let Some(duplicate) = contacts.iter().find(|c| !seen.insert(c.id)) {
            return Err(AppError::DuplicateId(duplicate.id));
        }
        Ok(Self::from_unique(contacts))
    }

    fn from_unique(contacts: Vec<Contact>) -> Self {
        let next_id = contacts.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        Self {
            contacts,
            next_id,
            focus: Focus::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn next_id(&self) -> ContactId {
        ContactId(self.next_id)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn list(&self, filter: &str) -> Vec<&Contact> {
        filter_contacts(&self.contacts, filter).collect()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: ContactId) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id == id)
    }

    pub fn create(&mut self, fields: ContactFields) -> Result<ContactId, AppError> {
        let errors = validation::validate(&fields);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let id = ContactId(self.next_id);
        self.next_id += 1;
        self.contacts.push(fields.into_contact(id));

        debug!(%id, "contact created");
        Ok(id)
    }

    pub fn update(&mut self, id: ContactId, fields: ContactFields) -> Result<(), AppError> {
        let errors = validation::validate(&fields);
        let contact = self.get_mut(id).ok_or(AppError::NotFound(id))?;

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        contact.apply(fields);

        debug!(%id, "contact updated");
        Ok(())
    }

    /// Removing an absent id is not an error; `None` is returned.
    pub fn delete(&mut self, id: ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| c.id == id)?;
        let removed = self.contacts.remove(index);
        self.focus.forget(id);

        debug!(%id, "contact deleted");
        Some(removed)
    }

    pub fn set_viewed(&mut self, id: ContactId) -> Result<&Contact, AppError> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::NotFound(id))?;
        self.focus.viewed = Some(id);
        Ok(&self.contacts[index])
    }

    pub fn clear_viewed(&mut self) {
        self.focus.viewed = None;
    }

    pub fn set_editing(&mut self, id: ContactId) -> Result<&Contact, AppError> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::NotFound(id))?;
        self.focus.editing = Some(id);
        Ok(&self.contacts[index])
    }

    pub fn clear_editing(&mut self) {
        self.focus.editing = None;
    }

    pub fn viewed(&self) -> Option<&Contact> {
        self.focus.viewed.and_then(|id| self.get(id))
    }

    pub fn editing(&self) -> Option<&Contact> {
        self.focus.editing.and_then(|id| self.get(id))
    }

    /// Back to the list: nothing viewed, nothing being edited.
    pub fn show_list(&mut self) {
        self.focus = Focus::default();
    }

    /// Opens the viewed contact in the edit form.
    pub fn edit_viewed(&mut self) -> Result<&Contact, AppError> {
        let id = self.focus.viewed.ok_or(AppError::NothingViewed)?;
        self.set_editing(id)
    }

    /// Form submission. Updates the contact under edit, or creates a new one
    /// when nothing is being edited. On success focus returns to the list;
    /// on failure focus is kept so the form can be shown again.
    pub fn save(&mut self, fields: ContactFields) -> Result<ContactId, AppError> {
        let id = match self.focus.editing {
            Some(id) => {
                self.update(id, fields)?;
                id
            }
            None => self.create(fields)?,
        };
        self.show_list();
        Ok(id)
    }

    /// Deletes whatever is currently viewed, if anything.
    pub fn delete_viewed(&mut self) -> Option<Contact> {
        let id = self.focus.viewed?;
        let removed = self.delete(id);
        self.show_list();
        removed
    }

    pub fn call(&self, id: ContactId) -> Option<CallNotice> {
        self.get(id).map(CallNotice::from)
    }
}
