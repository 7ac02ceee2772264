use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;
use crate::form::{FieldSpec, FieldValue, InputKind};
use super::types::Focus;

impl App {
    /// Handle one key press. Returns `false` when the user asked to quit.
    pub fn handle_key_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(false);
        }

        if self.violation.is_some() {
            // Any key dismisses the violation overlay
            self.violation = None;
            self.needs_redraw = true;
            return Ok(true);
        }

        match key.code {
            KeyCode::Esc => return Ok(false),
            KeyCode::Tab | KeyCode::Down => self.next_control(),
            KeyCode::BackTab | KeyCode::Up => self.previous_control(),
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Left => self.handle_cycle(false)?,
            KeyCode::Right => self.handle_cycle(true)?,
            KeyCode::Backspace => self.handle_backspace()?,
            KeyCode::Char(ch) => self.handle_char(ch)?,
            _ => {}
        }
        Ok(true) // Continue running
    }

    fn handle_cycle(&mut self, forward: bool) -> Result<()> {
        let Focus::Field(key) = self.focus else {
            return Ok(());
        };
        let value = match self.draft().field(key) {
            FieldValue::AiModel(model) => {
                FieldValue::AiModel(if forward { model.next() } else { model.previous() })
            }
            FieldValue::Exchange(exchange) => {
                FieldValue::Exchange(if forward { exchange.next() } else { exchange.previous() })
            }
            _ => return Ok(()),
        };
        self.set_field(key, value)?;
        Ok(())
    }

    fn handle_char(&mut self, ch: char) -> Result<()> {
        if self.focus == Focus::Submit {
            // Space activates the focused button
            if ch == ' ' {
                self.submit();
            }
            return Ok(());
        }
        let Some(spec) = self.focused_spec() else {
            return Ok(());
        };
        match spec.kind {
            InputKind::Select if ch == ' ' => self.handle_cycle(true)?,
            InputKind::Checkbox if ch == ' ' => {
                if let FieldValue::Flag(checked) = self.draft().field(spec.key) {
                    self.set_field(spec.key, FieldValue::Flag(!checked))?;
                }
            }
            _ if spec.is_typed() => self.edit_text(&spec, |text| text.push(ch))?,
            _ => {}
        }
        Ok(())
    }

    fn handle_backspace(&mut self) -> Result<()> {
        if let Some(spec) = self.focused_spec().filter(FieldSpec::is_typed) {
            self.edit_text(&spec, |text| {
                text.pop();
            })?;
        }
        Ok(())
    }

    fn edit_text(&mut self, spec: &FieldSpec, edit: impl FnOnce(&mut String)) -> Result<()> {
        if let Some(current) = self.number_inputs.get(spec.key) {
            let mut text = current.to_string();
            edit(&mut text);
            self.set_number_text(spec, text)?;
        } else if let FieldValue::Text(mut text) = self.draft().field(spec.key) {
            edit(&mut text);
            self.set_field(spec.key, FieldValue::Text(text))?;
        }
        Ok(())
    }
}
