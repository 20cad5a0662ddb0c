// src/usecases/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::AccountIntegrity;

// ============================================================================
// Account Models
// ============================================================================

/// Authenticated account snapshot as returned by the API and cached locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    pub access_token: String,
    #[serde(default)]
    pub name: String,
}

impl AccountModel {
    pub fn new(access_token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            name: name.into(),
        }
    }

    /// Reads an account out of a success body.
    /// Returns `None` when the fields `integrity` requires are missing or empty.
    pub fn from_body(body: &Value, integrity: AccountIntegrity) -> Option<Self> {
        let payload: AccountPayload = serde_json::from_value(body.clone()).ok()?;
        let account = Self {
            access_token: payload.access_token?,
            name: payload.name.unwrap_or_default(),
        };
        integrity.is_complete(&account).then_some(account)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountPayload {
    access_token: Option<String>,
    name: Option<String>,
}

// ============================================================================
// Request Params
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

// ============================================================================
// Survey Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswerModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyModel {
    pub id: String,
    pub question: String,
    pub answers: Vec<SurveyAnswerModel>,
    pub date: DateTime<Utc>,
    pub did_answer: bool,
}
