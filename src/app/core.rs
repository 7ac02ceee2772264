//! Core application state: the form, its submission and the focused control

use std::sync::Arc;

use cli_log::*;

use crate::api::TraderApi;
use crate::error::{ConstraintViolation, FieldError};
use crate::form::{
    check_draft, parse_number, visible_fields, FieldKey, FieldSpec, FieldValue, FormState,
    InputKind, TraderDraft,
};
use crate::i18n::Language;
use crate::submission::{Outcome, SubmissionController};
use super::types::{Focus, NumberInputs};

pub struct App {
    // Backend
    pub api: Arc<dyn TraderApi>,
    pub language: Language,

    // Form data
    pub form: FormState,
    pub number_inputs: NumberInputs,
    pub submission: SubmissionController,

    // UI state
    pub focus: Focus,
    pub violation: Option<ConstraintViolation>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(api: Arc<dyn TraderApi>, language: Language) -> Self {
        let form = FormState::new();
        let number_inputs = NumberInputs::from_draft(form.draft());
        Self {
            api,
            language,
            form,
            number_inputs,
            submission: SubmissionController::new(language),
            focus: Focus::default(),
            violation: None,
            needs_redraw: true,
        }
    }

    pub fn draft(&self) -> &TraderDraft {
        self.form.draft()
    }

    pub fn visible_fields(&self) -> Vec<FieldSpec> {
        visible_fields(self.draft().ai_model, self.draft().exchange)
    }

    pub fn focused_spec(&self) -> Option<FieldSpec> {
        match self.focus {
            Focus::Field(key) => self.visible_fields().into_iter().find(|spec| spec.key == key),
            Focus::Submit => None,
        }
    }

    /// Replace one field of the draft, keeping the numeric input text in step.
    pub fn set_field(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FieldError> {
        self.form.set_field(key, value)?;
        let rendered = match self.form.draft().field(key) {
            FieldValue::Decimal(value) => Some(value.to_string()),
            FieldValue::Integer(value) => Some(value.to_string()),
            _ => None,
        };
        if let (Some(text), Some(rendered)) = (self.number_inputs.get_mut(key), rendered) {
            *text = rendered;
        }
        self.needs_redraw = true;
        Ok(())
    }

    /// Store typed text for a numeric input; the draft follows only when the
    /// text is a valid value.
    pub fn set_number_text(&mut self, spec: &FieldSpec, text: String) -> Result<(), FieldError> {
        let parsed = parse_number(spec, &text);
        if let Some(slot) = self.number_inputs.get_mut(spec.key) {
            *slot = text;
        }
        if let Ok(value) = parsed {
            self.form.set_field(spec.key, value)?;
        }
        self.needs_redraw = true;
        Ok(())
    }

    /// First input-level violation that would block submission.
    pub fn check_inputs(&self) -> Result<(), ConstraintViolation> {
        for spec in self.visible_fields() {
            let text = self.number_inputs.get(spec.key);
            if let (InputKind::Number { .. }, Some(text)) = (spec.kind, text) {
                parse_number(&spec, text)?;
            }
        }
        check_draft(self.draft())
    }

    pub fn can_submit(&self) -> bool {
        !self.submission.is_submitting()
    }

    /// Submit the draft if the inputs allow it. A violation is kept for
    /// display and focus moves to the offending field.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        if let Err(violation) = self.check_inputs() {
            info!("Submission blocked: {violation}");
            self.focus = Focus::Field(violation.key());
            self.violation = Some(violation);
            self.needs_redraw = true;
            return false;
        }

        self.violation = None;
        self.needs_redraw = true;
        self.submission.submit(self.api.clone(), self.form.draft())
    }

    /// Pick up a finished submission, if any.
    pub fn update(&mut self) {
        if let Some(outcome) = self.submission.poll() {
            self.apply_outcome(&outcome);
        }
    }

    /// Wait for the in-flight submission and apply its outcome.
    pub async fn wait_for_submission(&mut self) -> Option<Outcome> {
        let outcome = self.submission.settle().await?;
        self.apply_outcome(&outcome);
        Some(outcome)
    }

    fn apply_outcome(&mut self, outcome: &Outcome) {
        if let Outcome::Created { trader_id } = outcome {
            debug!("Resetting form after creating {trader_id:?}");
            self.form.reset();
            self.number_inputs = NumberInputs::from_draft(self.form.draft());
            self.ensure_focus_visible();
        }
        self.needs_redraw = true;
    }
}
