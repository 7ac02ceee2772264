//! Client for the trading bot's create-trader endpoint

use async_trait::async_trait;
use cli_log::*;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::ADD_TRADER_PATH;
use crate::error::SubmissionFailure;
use crate::form::TraderDraft;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddTraderResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub trader_id: Option<String>,
}

fn default_success() -> bool {
    true
}

/// The create-trader operation. The form only knows this seam.
#[async_trait]
pub trait TraderApi: Send + Sync {
    async fn add_trader(&self, draft: &TraderDraft) -> Result<AddTraderResponse, SubmissionFailure>;
}

pub struct HttpTraderApi {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpTraderApi {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        // No request timeout: a submission runs until the backend answers
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ADD_TRADER_PATH)
    }
}

#[async_trait]
impl TraderApi for HttpTraderApi {
    async fn add_trader(
        &self,
        draft: &TraderDraft,
    ) -> Result<AddTraderResponse, SubmissionFailure> {
        let url = self.endpoint();
        debug!("POST {url} for trader '{}'", draft.id);

        let response = self.http_client.post(&url).json(draft).send().await?;
        let status = response.status();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

/// Map a backend reply onto success or a failure carrying the backend's message.
pub fn interpret_response(
    status: StatusCode,
    body: &str,
) -> Result<AddTraderResponse, SubmissionFailure> {
    let json: Option<serde_json::Value> = serde_json::from_str(body).ok();

    if !status.is_success() {
        warn!("Create-trader call rejected with status {status}");
        return Err(failure_from_body(json.as_ref()));
    }

    let reply = json
        .as_ref()
        .and_then(|value| serde_json::from_value::<AddTraderResponse>(value.clone()).ok());
    match reply {
        Some(reply) if reply.success => Ok(reply),
        Some(_) => Err(failure_from_body(json.as_ref())),
        None => {
            warn!("Create-trader call returned an unreadable body");
            Err(SubmissionFailure::without_message())
        }
    }
}

fn failure_from_body(json: Option<&serde_json::Value>) -> SubmissionFailure {
    let message = json.and_then(|value| {
        ["message", "error"]
            .iter()
            .find_map(|field| value.get(field).and_then(|m| m.as_str()))
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    });
    SubmissionFailure { message }
}
