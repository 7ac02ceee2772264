//! Submission of the draft to the create-trader call.
//!
//! The controller moves `Idle -> Submitting -> Idle` and leaves behind a
//! success or error message. At most one call is in flight; the call runs
//! on its own task so the event loop keeps drawing.

use std::sync::Arc;

use cli_log::*;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::api::{AddTraderResponse, TraderApi};
use crate::error::SubmissionFailure;
use crate::form::TraderDraft;
use crate::i18n::{t, Language, TextKey};

type CallResult = Result<AddTraderResponse, SubmissionFailure>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    /// Static notice shown under the text.
    pub follow_up: Option<TextKey>,
}

/// What the owner of the draft has to do once a call settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { trader_id: Option<String> },
    Failed,
}

pub struct SubmissionController {
    state: SubmissionState,
    message: Option<FormMessage>,
    pending: Option<oneshot::Receiver<CallResult>>,
    language: Language,
}

impl SubmissionController {
    pub fn new(language: Language) -> Self {
        Self {
            state: SubmissionState::Idle,
            message: None,
            pending: None,
            language,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// Start a create-trader call with a copy of `draft`. Returns `false`
    /// and does nothing while another call is in flight.
    pub fn submit(&mut self, api: Arc<dyn TraderApi>, draft: &TraderDraft) -> bool {
        if self.is_submitting() {
            debug!("Submit ignored, a submission is already in flight");
            return false;
        }

        let stale = draft.stale_fields();
        if !stale.is_empty() {
            let names: Vec<&str> = stale.iter().map(|key| key.as_ref()).collect();
            warn!(
                "Submitting trader '{}' with values in hidden fields: {}",
                draft.id,
                names.join(", ")
            );
        }

        self.state = SubmissionState::Submitting;
        self.message = None;
        info!("Submitting trader '{}' ({} / {})", draft.id, draft.ai_model, draft.exchange);

        let (tx, rx) = oneshot::channel();
        let payload = draft.clone();
        tokio::spawn(async move {
            let result = api.add_trader(&payload).await;
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
        true
    }

    /// Non-blocking check for a finished call.
    pub fn poll(&mut self) -> Option<Outcome> {
        let rx = self.pending.as_mut()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(SubmissionFailure::without_message()),
        };
        Some(self.finish(result))
    }

    /// Wait for the in-flight call, if any, to finish.
    pub async fn settle(&mut self) -> Option<Outcome> {
        let rx = self.pending.as_mut()?;
        let result = rx.await.unwrap_or_else(|_| Err(SubmissionFailure::without_message()));
        Some(self.finish(result))
    }

    fn finish(&mut self, result: CallResult) -> Outcome {
        self.pending = None;
        self.state = SubmissionState::Idle;

        match result {
            Ok(reply) => {
                info!("Trader created: {}", reply.message);
                self.message = Some(FormMessage {
                    kind: MessageKind::Success,
                    text: reply.message,
                    follow_up: Some(TextKey::RedeployRequired),
                });
                Outcome::Created { trader_id: reply.trader_id }
            }
            Err(failure) => {
                warn!("Trader submission failed: {failure}");
                let text = failure
                    .message
                    .unwrap_or_else(|| t(TextKey::AddTraderError, self.language).to_string());
                self.message = Some(FormMessage {
                    kind: MessageKind::Error,
                    text,
                    follow_up: None,
                });
                Outcome::Failed
            }
        }
    }
}
