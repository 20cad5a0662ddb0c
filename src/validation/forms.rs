// src/validation/forms.rs
//
// Rule sets for the account forms

use super::builder::ValidationBuilder as Builder;
use super::composite::ValidationComposite;

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";
pub const PASSWORD_CONFIRMATION_FIELD: &str = "passwordConfirmation";

pub fn login_validation() -> ValidationComposite {
    ValidationComposite::from_fields([
        Builder::field(EMAIL_FIELD).required().email().build(),
        Builder::field(PASSWORD_FIELD).required().min_length(5).build(),
    ])
}

pub fn signup_validation() -> ValidationComposite {
    ValidationComposite::from_fields([
        Builder::field(NAME_FIELD).required().min_length(3).build(),
        Builder::field(EMAIL_FIELD).required().email().build(),
        Builder::field(PASSWORD_FIELD).required().min_length(5).build(),
        Builder::field(PASSWORD_CONFIRMATION_FIELD)
            .required()
            .min_length(5)
            .same_as(PASSWORD_FIELD)
            .build(),
    ])
}
