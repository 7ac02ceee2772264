//! Focus movement between the visible controls

use super::core::App;
use super::types::Focus;

impl App {
    /// Visible controls in tab order, ending with the submit button.
    pub fn controls(&self) -> Vec<Focus> {
        self.visible_fields()
            .into_iter()
            .map(|spec| Focus::Field(spec.key))
            .chain(std::iter::once(Focus::Submit))
            .collect()
    }

    fn focus_index(&self, controls: &[Focus]) -> usize {
        controls.iter().position(|c| *c == self.focus).unwrap_or(0)
    }

    pub fn next_control(&mut self) {
        let controls = self.controls();
        let index = (self.focus_index(&controls) + 1) % controls.len();
        self.focus = controls[index];
        self.needs_redraw = true;
    }

    pub fn previous_control(&mut self) {
        let controls = self.controls();
        let index = (self.focus_index(&controls) + controls.len() - 1) % controls.len();
        self.focus = controls[index];
        self.needs_redraw = true;
    }

    /// Move focus back to the first control if the focused one is hidden.
    pub fn ensure_focus_visible(&mut self) {
        let controls = self.controls();
        if !controls.contains(&self.focus) {
            self.focus = controls[0];
            self.needs_redraw = true;
        }
    }
}
