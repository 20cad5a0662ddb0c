// src/validation/builder.rs

use super::rules::FieldValidation;

/// Fluent accumulator of rules for a single field.
///
/// ```
/// use survey_client::validation::{FieldValidation, ValidationBuilder};
///
/// let rules = ValidationBuilder::field("password").required().min_length(5).build();
/// assert_eq!(
///     rules,
///     vec![
///         FieldValidation::required("password"),
///         FieldValidation::min_length("password", 5),
///     ]
/// );
/// ```
#[derive(Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct ValidationBuilder {
    field_name: String,
    validations: Vec<FieldValidation>,
}

impl ValidationBuilder {
    pub fn field(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            validations: Vec::new(),
        }
    }

    pub fn required(self) -> Self {
        let rule = FieldValidation::required(&self.field_name);
        self.push(rule)
    }

    pub fn email(self) -> Self {
        let rule = FieldValidation::email(&self.field_name);
        self.push(rule)
    }

    pub fn min_length(self, length: usize) -> Self {
        let rule = FieldValidation::min_length(&self.field_name, length);
        self.push(rule)
    }

    pub fn same_as(self, field_to_compare: impl Into<String>) -> Self {
        let rule = FieldValidation::compare_fields(&self.field_name, field_to_compare);
        self.push(rule)
    }

    /// Rules in the order they were chained
    pub fn build(self) -> Vec<FieldValidation> {
        self.validations
    }

    fn push(mut self, rule: FieldValidation) -> Self {
        self.validations.push(rule);
        self
    }
}
