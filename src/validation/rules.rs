// src/validation/rules.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{FieldError, FormSnapshot};

// Lowercase RFC 5322-ish address; unanchored, so any address inside the value matches
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?",
    )
    .expect("email pattern is a valid regex")
});

// ============================================================================
// Field Validation Rules
// ============================================================================

/// A single check against one named field of a form.
///
/// Rules are immutable once built and look at the whole snapshot, so a
/// rule can compare its field against a sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidation {
    /// Fails when the value is empty or absent
    Required { field: String },
    /// Fails when the value is present, non-empty and not email-shaped
    Email { field: String },
    /// Fails when the value has fewer than `min_length` characters.
    /// An absent field passes; pair with `Required` to reject it.
    MinLength { field: String, min_length: usize },
    /// Fails when the value differs from `field_to_compare`
    CompareFields {
        field: String,
        field_to_compare: String,
    },
}

impl FieldValidation {
    pub fn required(field: impl Into<String>) -> Self {
        FieldValidation::Required {
            field: field.into(),
        }
    }

    pub fn email(field: impl Into<String>) -> Self {
        FieldValidation::Email {
            field: field.into(),
        }
    }

    pub fn min_length(field: impl Into<String>, min_length: usize) -> Self {
        FieldValidation::MinLength {
            field: field.into(),
            min_length,
        }
    }

    pub fn compare_fields(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        FieldValidation::CompareFields {
            field: field.into(),
            field_to_compare: field_to_compare.into(),
        }
    }

    /// Name of the field this rule is bound to
    pub fn field_name(&self) -> &str {
        match self {
            FieldValidation::Required { field }
            | FieldValidation::Email { field }
            | FieldValidation::MinLength { field, .. }
            | FieldValidation::CompareFields { field, .. } => field.as_str(),
        }
    }

    pub fn validate(&self, form: &FormSnapshot) -> Result<(), FieldError> {
        match self {
            FieldValidation::Required { field } => match form.get(field) {
                Some(value) if !value.is_empty() => Ok(()),
                _ => Err(FieldError::RequiredField),
            },
            FieldValidation::Email { field } => match form.get(field) {
                Some(value) if !value.is_empty() && !is_valid_email(value) => {
                    Err(FieldError::InvalidField)
                }
                _ => Ok(()),
            },
            FieldValidation::MinLength { field, min_length } => match form.get(field) {
                Some(value) if value.chars().count() < *min_length => {
                    Err(FieldError::InvalidField)
                }
                _ => Ok(()),
            },
            FieldValidation::CompareFields {
                field,
                field_to_compare,
            } => {
                if form.get(field) == form.get(field_to_compare) {
                    Ok(())
                } else {
                    Err(FieldError::InvalidField)
                }
            }
        }
    }
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
