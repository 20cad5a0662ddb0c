// src/lib.rs
//
// Client core for the survey account API: form validation, remote calls
// over an HTTP transport, and the current-account cache.

pub mod cache;
pub mod common;
pub mod http;
pub mod usecases;
pub mod validation;

// Re-export commonly used types for convenience
pub use cache::{CurrentAccountAdapter, FileStorage, MemoryStorage};
pub use common::{ClientConfig, DomainError, RemoteCallError};
pub use http::{HttpRequest, HttpResponse, ReqwestHttpClient, TransportError};
pub use usecases::{AccountModel, RemoteAddAccount, RemoteAuthentication, RemoteLoadSurveyList};
pub use validation::{FieldError, FieldValidation, FormSnapshot, ValidationBuilder, ValidationComposite};
