pub use crate::cli::{command, run_app};
pub use crate::config::{Config, SeedChoice};
pub use crate::domain::{
    contact::{self, CallNotice, Contact, ContactFields, ContactId, Gender},
    manager::{ContactManager, Focus},
    search::matches_filter,
};
pub use crate::errors::AppError;
pub use crate::validation::{Field, FieldError, ValidationErrorKind, ValidationErrors};
