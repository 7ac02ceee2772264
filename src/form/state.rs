use crate::error::FieldError;
use super::draft::{TraderDraft, DEFAULT_DRAFT};
use super::field::{FieldKey, FieldValue};

/// Owns the current draft. Every change swaps in a new draft value and
/// advances `revision`.
#[derive(Debug, Clone)]
pub struct FormState {
    draft: TraderDraft,
    revision: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: DEFAULT_DRAFT,
            revision: 0,
        }
    }

    pub fn draft(&self) -> &TraderDraft {
        &self.draft
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_field(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FieldError> {
        self.draft = self.draft.with_field(key, value)?;
        self.revision += 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.draft = DEFAULT_DRAFT;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::AiModel;

    #[test]
    fn set_field_publishes_a_new_revision() {
        let mut form = FormState::new();
        let before = form.draft().clone();
        form.set_field(FieldKey::Id, "hyperliquid_deepseek_2".into()).unwrap();
        assert_eq!(form.revision(), 1);
        assert_eq!(form.draft().id, "hyperliquid_deepseek_2");
        assert_eq!(before.id, "");
    }

    #[test]
    fn rejected_values_leave_the_draft_alone() {
        let mut form = FormState::new();
        assert!(form.set_field(FieldKey::Id, false.into()).is_err());
        assert_eq!(form.revision(), 0);
        assert_eq!(form.draft(), &DEFAULT_DRAFT);
    }

    #[test]
    fn switching_model_keeps_hidden_keys() {
        let mut form = FormState::new();
        form.set_field(FieldKey::DeepseekKey, "sk-ds".into()).unwrap();
        form.set_field(FieldKey::AiModel, AiModel::Qwen.into()).unwrap();
        form.set_field(FieldKey::AiModel, AiModel::Custom.into()).unwrap();
        assert_eq!(form.draft().ai_keys.deepseek_key, "sk-ds");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = FormState::new();
        form.set_field(FieldKey::Name, "Trader #2".into()).unwrap();
        form.reset();
        assert_eq!(form.draft(), &DEFAULT_DRAFT);
        assert_eq!(form.revision(), 2);
    }
}
