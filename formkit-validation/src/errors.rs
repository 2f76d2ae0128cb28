// Validation errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A failed rule on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// The failing rule's configured message
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The error collection produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors reported for one field, in rule order.
    pub fn for_field<'a, 'f>(
        &'a self,
        field: &'f str,
    ) -> impl Iterator<Item = &'a ValidationError> + use<'a, 'f> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Messages reported for one field.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.for_field(field).map(|e| e.message.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self.errors })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Misuse of the form API. Never produced by a validation pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_field_keeps_order() {
        let errors = ValidationErrors::from(vec![
            ValidationError::new("email", "Email is required"),
            ValidationError::new("name", "Name is required"),
            ValidationError::new("email", "Email is invalid"),
        ]);

        assert_eq!(
            errors.messages("email"),
            vec!["Email is required", "Email is invalid"]
        );
        assert!(errors.messages("password").is_empty());
    }

    #[test]
    fn test_messages_outlive_field_name() {
        let errors = ValidationErrors::from(vec![
            ValidationError::new("email", "required"),
            ValidationError::new("name", "letters only"),
            ValidationError::new("email", "invalid"),
        ]);

        let messages = {
            let field = String::from("email");
            errors.messages(&field)
        };
        assert_eq!(messages, vec!["required", "invalid"]);
    }

    #[test]
    fn test_json_shape() {
        let errors = ValidationErrors::from(vec![ValidationError::new("name", "Too short")]);
        assert_eq!(
            errors.to_json(),
            serde_json::json!({ "errors": [{ "field": "name", "message": "Too short" }] })
        );
    }

    #[test]
    fn test_display() {
        let error = ValidationError::new("email", "Invalid email");
        assert_eq!(error.to_string(), "email: Invalid email");
    }
}
