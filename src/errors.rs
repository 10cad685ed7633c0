use thiserror::Error;

use crate::domain::contact::ContactId;
use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while reading input or writing output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact {0} Not found")]
    NotFound(ContactId),

    #[error("Contact id {0} is used more than once")]
    DuplicateId(ContactId),

    #[error("No contact is currently being viewed")]
    NothingViewed,

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Unrecognized gender: '{0}' (female, male)")]
    ParseGender(String),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Could not serialize contacts: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// The field errors carried by a validation failure, if this is one.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}
