//! Registration form payload and per-field validation errors.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw values entered on the registration form.
///
/// Sent as-is to the `register` server function; the server normalizes and
/// re-validates before storing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationInput {
    /// Value currently held for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the value held for `field`.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// One input of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// HTML `type` attribute for the input element.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
        }
    }

    /// Stable id used for the input element and its label.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "register-name",
            Field::Email => "register-email",
            Field::Password => "register-password",
            Field::ConfirmPassword => "register-confirm-password",
        }
    }
}

/// Validation messages keyed by field. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    /// The first failing rule wins.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_serializes_confirm_password_in_camel_case() {
        let input = RegistrationInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["confirmPassword"], "secret123");
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add(Field::Email, "Email is required");
        errors.add(Field::Email, "Email must be a valid email");
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_display_joins_messages_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.add(Field::ConfirmPassword, "Passwords must match");
        errors.add(Field::Name, "Name is required");
        assert_eq!(errors.to_string(), "Name is required; Passwords must match");
    }

    #[test]
    fn test_get_and_set_by_field() {
        let mut input = RegistrationInput::default();
        for field in Field::ALL {
            input.set(field, field.label().to_string());
        }
        assert_eq!(input.get(Field::ConfirmPassword), "Confirm Password");
        assert_eq!(input.name, "Name");
    }
}
