use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::phone::digits_only;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Consent,
}

/// Raw values of the contact form as the visitor left them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub consent: bool,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nome é obrigatório.")]
    NameRequired,
    #[error("E-mail é obrigatório.")]
    EmailRequired,
    #[error("E-mail inválido.")]
    EmailInvalid,
    #[error("Telefone deve conter apenas números (10 ou 11 dígitos).")]
    PhoneDigits,
    #[error("É necessário aceitar o consentimento.")]
    ConsentRequired,
}

/// Per-field failures. The form may be submitted only when this is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, ValidationError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|err| err.to_string())
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

pub fn validate(fields: &FormFields) -> FormErrors {
    let mut errors = BTreeMap::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, ValidationError::NameRequired);
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, ValidationError::EmailRequired);
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, ValidationError::EmailInvalid);
    }

    let phone_digits = digits_only(&fields.phone);
    if !phone_digits.is_empty() && !(10..=11).contains(&phone_digits.len()) {
        errors.insert(Field::Phone, ValidationError::PhoneDigits);
    }

    if !fields.consent {
        errors.insert(Field::Consent, ValidationError::ConsentRequired);
    }

    FormErrors(errors)
}
