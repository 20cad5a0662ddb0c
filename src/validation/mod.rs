// src/validation/mod.rs

pub mod builder;
pub mod composite;
pub mod forms;
pub mod models;
pub mod rules;


// Re-export commonly used items
pub use builder::ValidationBuilder;
pub use composite::ValidationComposite;
pub use forms::{login_validation, signup_validation};
pub use models::{FieldError, FormSnapshot};
pub use rules::FieldValidation;
