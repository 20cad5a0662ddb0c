// src/usecases/load_survey_list.rs
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::models::SurveyModel;
use crate::common::{DomainError, RemoteCallError};
use crate::http::{status, HttpGetClient, HttpRequest};

#[async_trait]
pub trait LoadSurveyList: Send + Sync {
    async fn load_all(&self) -> Result<Vec<SurveyModel>, RemoteCallError>;
}

pub struct RemoteLoadSurveyList {
    url: String,
    http_client: Arc<dyn HttpGetClient>,
}

impl RemoteLoadSurveyList {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpGetClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl LoadSurveyList for RemoteLoadSurveyList {
    async fn load_all(&self) -> Result<Vec<SurveyModel>, RemoteCallError> {
        let response = self.http_client.get(HttpRequest::new(&self.url)).await?;

        match response.status_code {
            status::OK => {
                let surveys: Vec<SurveyModel> =
                    serde_json::from_value(response.body).map_err(|e| {
                        warn!(url = %self.url, error = %e, "Malformed survey list");
                        DomainError::Unexpected
                    })?;
                debug!(count = surveys.len(), "Surveys loaded");
                Ok(surveys)
            }
            status::NO_CONTENT => Ok(Vec::new()),
            status::FORBIDDEN => Err(DomainError::AccessDenied.into()),
            other => {
                warn!(url = %self.url, status = other, "Unexpected survey list status");
                Err(DomainError::Unexpected.into())
            }
        }
    }
}
