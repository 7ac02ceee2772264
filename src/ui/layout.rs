use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use super::{
    components::{render_header, render_message, render_submit_bar, render_violation},
    form::render_form,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let message = app.submission.message();
    let message_height = match message {
        Some(m) if m.follow_up.is_some() => 5,
        Some(_) => 4,
        None => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),              // Header
            Constraint::Length(message_height), // Submission message
            Constraint::Min(10),                // Form
            Constraint::Length(3),              // Help and submit button
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    if let Some(message) = message {
        render_message(f, app, message, chunks[1]);
    }
    render_form(f, app, chunks[2]);
    render_submit_bar(f, app, chunks[3]);

    // Violation overlay
    if let Some(ref violation) = app.violation {
        render_violation(f, app, violation);
    }
}
