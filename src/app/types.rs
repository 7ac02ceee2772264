//! Type definitions for the application

use crate::form::{FieldKey, TraderDraft};

/// The control that receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldKey),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(FieldKey::Id)
    }
}

/// Raw text of the numeric inputs. The draft only receives a number once
/// the text parses and satisfies the field's min and step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInputs {
    pub initial_balance: String,
    pub scan_interval_minutes: String,
}

impl NumberInputs {
    pub fn from_draft(draft: &TraderDraft) -> Self {
        Self {
            initial_balance: draft.initial_balance.to_string(),
            scan_interval_minutes: draft.scan_interval_minutes.to_string(),
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::InitialBalance => Some(&self.initial_balance),
            FieldKey::ScanIntervalMinutes => Some(&self.scan_interval_minutes),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: FieldKey) -> Option<&mut String> {
        match key {
            FieldKey::InitialBalance => Some(&mut self.initial_balance),
            FieldKey::ScanIntervalMinutes => Some(&mut self.scan_interval_minutes),
            _ => None,
        }
    }
}
