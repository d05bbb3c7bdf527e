//! src/waiting_list_client.rs

use crate::domain::WaitingListFormData;
use crate::form_controller::{SubmissionReply, SubmitRejected, WaitingListForm};
use crate::routes::WaitingListResponse;
use crate::spreadsheet_client::SpreadsheetClient;
use reqwest::{Client, Url};
use std::time::{Duration, Instant};

/// Where a form submission is sent.
#[derive(Debug, Clone)]
pub enum SubmissionBackend {
    /// `POST {base_url}/api/waiting-list`
    Api { http_client: Client, endpoint: Url },
    /// The sheet script the landing page used before the API existed.
    SpreadsheetScript(SpreadsheetClient),
}

/// Carries a `WaitingListForm` submission to the backend and feeds the
/// answer back into the form.
#[derive(Debug, Clone)]
pub struct WaitingListClient {
    backend: SubmissionBackend,
}

impl WaitingListClient {
    /// `base_url` may carry a path prefix; the route is resolved below it.
    pub fn for_api(base_url: &str, timeout: Duration) -> Result<Self, anyhow::Error> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join("api/waiting-list")?;
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            backend: SubmissionBackend::Api {
                http_client,
                endpoint,
            },
        })
    }

    pub fn for_spreadsheet(client: SpreadsheetClient) -> Self {
        Self {
            backend: SubmissionBackend::SpreadsheetScript(client),
        }
    }

    /// Submits the form once. A rejected submit leaves the form as
    /// `begin_submit` left it and sends nothing.
    #[tracing::instrument(name = "Submitting the waiting list form", skip_all)]
    pub async fn submit(&self, form: &mut WaitingListForm) -> Result<(), SubmitRejected> {
        let payload = form.begin_submit()?;
        match self.send(&payload).await {
            Ok(reply) => form.complete(reply, Instant::now()),
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Waiting list submission did not get an answer"
                );
                form.fail();
            }
        }
        Ok(())
    }

    async fn send(&self, payload: &WaitingListFormData) -> Result<SubmissionReply, anyhow::Error> {
        match &self.backend {
            SubmissionBackend::Api {
                http_client,
                endpoint,
            } => {
                let response = http_client
                    .post(endpoint.clone())
                    .json(payload)
                    .send()
                    .await?;
                let status = response.status().as_u16();
                let body = response.json::<WaitingListResponse>().await?;
                Ok(SubmissionReply::from_api(status, body))
            }
            SubmissionBackend::SpreadsheetScript(client) => {
                let reply = client.submit(payload).await?;
                Ok(SubmissionReply {
                    status: reply.status.as_u16(),
                    success: reply.response.is_success(),
                    message: reply.response.message().map(str::to_owned),
                    error: None,
                })
            }
        }
    }
}
