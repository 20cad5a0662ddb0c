// src/usecases/mod.rs

pub mod add_account;
pub mod authentication;
pub mod load_survey_list;
pub mod models;


// Re-export commonly used items
pub use add_account::{AddAccount, RemoteAddAccount};
pub use authentication::{Authentication, RemoteAuthentication};
pub use load_survey_list::{LoadSurveyList, RemoteLoadSurveyList};
pub use models::*;
