use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ContactId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ContactId(s.trim().parse::<u64>()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gender = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        };
        write!(f, "{gender}")
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            other => Err(AppError::ParseGender(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
}

impl Contact {
    /// Avatar letter: first character of the name, uppercased.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Email as shown on the detail view, `-` when absent.
    pub fn display_email(&self) -> &str {
        if self.email.is_empty() {
            "-"
        } else {
            &self.email
        }
    }

    /// Current values as form input, e.g. to prefill an edit.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            gender: self.gender,
        }
    }

    pub(crate) fn apply(&mut self, fields: ContactFields) {
        let ContactFields {
            name,
            phone,
            email,
            gender,
        } = fields.trimmed();
        self.name = name;
        self.phone = phone;
        self.email = email;
        self.gender = gender;
    }
}

/// Candidate values submitted from a create or edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: Gender,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            gender,
        }
    }

    pub(crate) fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            gender: self.gender,
        }
    }

    pub(crate) fn into_contact(self, id: ContactId) -> Contact {
        let fields = self.trimmed();
        Contact {
            id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
            gender: fields.gender,
        }
    }
}

/// Notice shown by the call action. Reading a contact, never changing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNotice {
    pub name: String,
    pub phone: String,
}

impl From<&Contact> for CallNotice {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
        }
    }
}

impl fmt::Display for CallNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Calling {}...\n{}", self.name, self.phone)
    }
}

/// The contacts every fresh process starts with.
pub fn seed_contacts() -> Vec<Contact> {
    [
        (1, "Mona Abdo", "(202) 555-0101", "mona@email.com", Gender::Female),
        (2, "Karim Ali", "(202) 555-0102", "karim@email.com", Gender::Male),
        (3, "Mohamed Hassan", "(202) 555-0103", "mohamed@email.com", Gender::Male),
        (4, "Eman Ali", "(202) 555-0104", "eman@email.com", Gender::Female),
    ]
    .into_iter()
    .map(|(id, name, phone, email, gender)| Contact {
        id: ContactId(id),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        gender,
    })
    .collect()
}
