// src/validation/composite.rs

use tracing::debug;

use super::models::{FieldError, FormSnapshot};
use super::rules::FieldValidation;
use crate::common::ValidationResult;

/// Every rule of a form, in declaration order.
///
/// Built once per form and queried on each change with the latest full
/// snapshot. For a given field only the first failing rule is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationComposite {
    validations: Vec<FieldValidation>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<FieldValidation>) -> Self {
        Self { validations }
    }

    /// Concatenates per-field rule lists, keeping field order
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Vec<FieldValidation>>,
    {
        Self::new(fields.into_iter().flatten().collect())
    }

    /// Message of the first failing rule for `field_name`, or `None` when
    /// the field passes
    pub fn validate(&self, field_name: &str, form: &FormSnapshot) -> Option<String> {
        self.first_error(field_name, form).map(|error| error.to_string())
    }

    /// Evaluates the field's rules left to right and stops at the first
    /// failure
    pub fn first_error(&self, field_name: &str, form: &FormSnapshot) -> Option<FieldError> {
        let error = self
            .validations
            .iter()
            .filter(|validation| validation.field_name() == field_name)
            .find_map(|validation| validation.validate(form).err());

        if let Some(error) = error {
            debug!(field = %field_name, error = ?error, "Field validation failed");
        }
        error
    }

    /// Distinct field names in the order their first rule was declared
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for validation in &self.validations {
            let name = validation.field_name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Per-field status for every field that has rules
    pub fn validate_form(&self, form: &FormSnapshot) -> ValidationResult {
        let mut result = ValidationResult::new();
        for field in self.field_names() {
            if let Some(message) = self.validate(field, form) {
                result.add_error(field, &message);
            }
        }
        result
    }

    pub fn is_form_valid(&self, form: &FormSnapshot) -> bool {
        self.field_names()
            .into_iter()
            .all(|field| self.first_error(field, form).is_none())
    }
}
