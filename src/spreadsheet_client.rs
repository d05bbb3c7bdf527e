//! src/spreadsheet_client.rs
//!
//! Client for the sheet script endpoint the landing page posted to before the
//! waiting list moved into our own database. The script is deployed and owned
//! elsewhere; this module only knows its request and reply formats.

use crate::domain::WaitingListFormData;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// How the payload is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEncoding {
    /// `application/x-www-form-urlencoded`, what a plain `<form>` sends.
    Form,
    /// `application/json`.
    Json,
}

/// Value of the `status` or `result` member of a script reply.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStatus {
    Ok,
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

/// Reply of the sheet script.
///
/// Deployed revisions disagree on the shape:
///
/// * first revision answered `{"result": "success"}`,
/// * second revision answered `{"status": "ok"}`,
/// * current revision answers `{"status": "success"}` or
///   `{"status": "error", "message": "..."}`.
///
/// New deployments should stick to the `status` form. `Result` only exists so
/// that a stale deployment keeps working and can be removed once every script
/// URL in use answers with `status`.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScriptResponse {
    Status {
        status: ScriptStatus,
        #[serde(default)]
        message: Option<String>,
    },
    Result {
        result: ScriptStatus,
        #[serde(default)]
        message: Option<String>,
    },
}

impl ScriptResponse {
    pub fn is_success(&self) -> bool {
        match self {
            ScriptResponse::Status { status, .. } => {
                matches!(status, ScriptStatus::Ok | ScriptStatus::Success)
            }
            ScriptResponse::Result { result, .. } => *result == ScriptStatus::Success,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ScriptResponse::Status { message, .. } | ScriptResponse::Result { message, .. } => {
                message.as_deref()
            }
        }
    }
}

/// HTTP status and parsed body of a script call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptReply {
    pub status: StatusCode,
    pub response: ScriptResponse,
}

#[derive(Debug, Clone)]
pub struct SpreadsheetClient {
    http_client: Client,
    script_url: Url,
    encoding: ScriptEncoding,
}

impl SpreadsheetClient {
    pub fn new(
        script_url: Url,
        encoding: ScriptEncoding,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            script_url,
            encoding,
        })
    }

    #[tracing::instrument(name = "Posting waiting list data to the sheet script", skip_all)]
    pub async fn submit(&self, form: &WaitingListFormData) -> Result<ScriptReply, reqwest::Error> {
        let request = self.http_client.post(self.script_url.clone());
        let request = match self.encoding {
            ScriptEncoding::Form => request.form(form),
            ScriptEncoding::Json => request.json(form),
        };
        let response = request.send().await?;
        let status = response.status();
        let response = response.json::<ScriptResponse>().await?;
        Ok(ScriptReply { status, response })
    }
}
