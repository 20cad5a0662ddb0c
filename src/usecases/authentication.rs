// src/usecases/authentication.rs
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::models::{AccountModel, AuthenticationParams};
use crate::cache::AccountIntegrity;
use crate::common::{safe_email_log, DomainError, RemoteCallError};
use crate::http::{status, HttpPostClient, HttpRequest};

#[async_trait]
pub trait Authentication: Send + Sync {
    async fn auth(&self, params: AuthenticationParams) -> Result<AccountModel, RemoteCallError>;
}

/// Logs an account in by POSTing credentials to the login endpoint
pub struct RemoteAuthentication {
    url: String,
    http_client: Arc<dyn HttpPostClient>,
    integrity: AccountIntegrity,
}

impl RemoteAuthentication {
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
impl Authentication for RemoteAuthentication {
    async fn auth(&self, params: AuthenticationParams) -> Result<AccountModel, RemoteCallError> {
        debug!(email = %safe_email_log(&params.email), "Authenticating account");

        let body = serde_json::to_value(&params).map_err(|_| DomainError::Unexpected)?;
        let response = self
            .http_client
            .post(HttpRequest::new(&self.url).with_body(body))
            .await?;

        match response.status_code {
            status::OK => match AccountModel::from_body(&response.body, self.integrity) {
                Some(account) => {
                    info!(email = %safe_email_log(&params.email), "Authentication succeeded");
                    Ok(account)
                }
                None => {
                    warn!(url = %self.url, "Authentication response is missing account fields");
                    Err(DomainError::Unexpected.into())
                }
            },
            status::UNAUTHORIZED => Err(DomainError::InvalidCredentials.into()),
            other => {
                warn!(url = %self.url, status = other, "Unexpected authentication status");
                Err(DomainError::Unexpected.into())
            }
        }
    }
}
