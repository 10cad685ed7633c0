use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::contact::ContactFields;

const MIN_PHONE_DIGITS: usize = 10;

// Something without spaces or '@', then '@', then a domain containing a '.'
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
        };
        write!(f, "{field}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationErrorKind {
    EmptyName,
    EmptyPhone,
    InvalidPhone,
    InvalidEmail,
}

impl ValidationErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationErrorKind::EmptyName => "Name is required",
            ValidationErrorKind::EmptyPhone => "Phone number is required",
            ValidationErrorKind::InvalidPhone => "Please enter a valid phone number",
            ValidationErrorKind::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

/// Every rule that failed for a candidate set of fields. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: Field, kind: ValidationErrorKind) {
        let error = FieldError { field, kind };
        if !self.errors.contains(&error) {
            self.errors.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: Field, kind: ValidationErrorKind) -> bool {
        self.errors.contains(&FieldError { field, kind })
    }

    pub fn kinds(&self) -> impl Iterator<Item = ValidationErrorKind> + '_ {
        self.errors.iter().map(|e| e.kind)
    }

    /// The error for a single field, used to place a message next to its input.
    pub fn for_field(&self, field: Field) -> Option<ValidationErrorKind> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.kind)?;
        }
        Ok(())
    }
}

pub fn validate_name(name: &str) -> Option<ValidationErrorKind> {
    name.trim()
        .is_empty()
        .then_some(ValidationErrorKind::EmptyName)
}

pub fn validate_phone(phone: &str) -> Option<ValidationErrorKind> {
    // Digits, whitespace, hyphens and parentheses only
    // At least 10 digits once the punctuation is stripped
    let phone = phone.trim();
    if phone.is_empty() {
        return Some(ValidationErrorKind::EmptyPhone);
    }

    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'));
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();

    if !allowed || digits < MIN_PHONE_DIGITS {
        return Some(ValidationErrorKind::InvalidPhone);
    }
    None
}

pub fn validate_email(email: &str) -> Option<ValidationErrorKind> {
    // Email can be empty
    let email = email.trim();
    if email.is_empty() || EMAIL_RE.is_match(email) {
        return None;
    }
    Some(ValidationErrorKind::InvalidEmail)
}

/// Runs every field rule. Does not stop at the first failure.
pub fn validate(fields: &ContactFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if let Some(kind) = validate_name(&fields.name) {
        errors.push(Field::Name, kind);
    }
    if let Some(kind) = validate_phone(&fields.phone) {
        errors.push(Field::Phone, kind);
    }
    if let Some(kind) = validate_email(&fields.email) {
        errors.push(Field::Email, kind);
    }

    errors
}
