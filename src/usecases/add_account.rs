// src/usecases/add_account.rs
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::models::{AccountModel, AddAccountParams};
use crate::cache::AccountIntegrity;
use crate::common::{safe_email_log, DomainError, RemoteCallError};
use crate::http::{status, HttpPostClient, HttpRequest};

#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, params: AddAccountParams) -> Result<AccountModel, RemoteCallError>;
}

/// Creates an account by POSTing the signup form
pub struct RemoteAddAccount {
    url: String,
    http_client: Arc<dyn HttpPostClient>,
    integrity: AccountIntegrity,
}

impl RemoteAddAccount {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpPostClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
            integrity: AccountIntegrity::default(),
        }
    }

    /// Which account fields a success body must carry
    pub fn with_integrity(mut self, integrity: AccountIntegrity) -> Self {
        self.integrity = integrity;
        self
    }
}

#[async_trait]
impl AddAccount for RemoteAddAccount {
    async fn add(&self, params: AddAccountParams) -> Result<AccountModel, RemoteCallError> {
        debug!(email = %safe_email_log(&params.email), "Creating account");

        let body = serde_json::to_value(&params).map_err(|_| DomainError::Unexpected)?;
        let response = self
            .http_client
            .post(HttpRequest::new(&self.url).with_body(body))
            .await?;

        match response.status_code {
            status::OK => match AccountModel::from_body(&response.body, self.integrity) {
                Some(account) => {
                    info!(email = %safe_email_log(&params.email), "Account created");
                    Ok(account)
                }
                None => {
                    warn!(url = %self.url, "Signup response is missing account fields");
                    Err(DomainError::Unexpected.into())
                }
            },
            status::FORBIDDEN => Err(DomainError::EmailInUse.into()),
            other => {
                warn!(url = %self.url, status = other, "Unexpected signup status");
                Err(DomainError::Unexpected.into())
            }
        }
    }
}
