use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::config::{OVERLAY_HEIGHT_PERCENT, OVERLAY_WIDTH_PERCENT};
use crate::error::ConstraintViolation;
use crate::form::field_spec;
use crate::i18n::{t, TextKey};
use crate::submission::{FormMessage, MessageKind};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            t(TextKey::TraderManagement, app.language),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            t(TextKey::AddNewTrader, app.language),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Inline success/error banner left by the last submission.
pub fn render_message(f: &mut Frame, app: &App, message: &FormMessage, area: Rect) {
    let (color, marker, title) = match message.kind {
        MessageKind::Success => (Color::Green, "✅", t(TextKey::Success, app.language)),
        MessageKind::Error => (Color::Red, "❌", t(TextKey::Error, app.language)),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{marker} {title}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.text.as_str(), Style::default().fg(color))),
    ];
    if let Some(notice) = message.follow_up {
        let notice_style = Style::default().fg(Color::Gray);
        lines.push(Line::from(Span::styled(t(notice, app.language), notice_style)));
    }

    let banner = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    f.render_widget(banner, area);
}

pub fn render_submit_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(area);

    let help = Paragraph::new(t(TextKey::KeyHelp, app.language))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[0]);

    let (label, style) = if app.submission.is_submitting() {
        (TextKey::Submitting, Style::default().fg(Color::DarkGray))
    } else if app.focus == Focus::Submit {
        let style = Style::default().fg(Color::Black).bg(Color::Yellow);
        (TextKey::AddTrader, style.add_modifier(Modifier::BOLD))
    } else {
        (TextKey::AddTrader, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };

    let button = Paragraph::new(t(label, app.language))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[1]);
}

/// Overlay naming the field that blocked submission.
pub fn render_violation(f: &mut Frame, app: &App, violation: &ConstraintViolation) {
    let hint = match violation {
        ConstraintViolation::Missing(_) => TextKey::FieldRequired,
        ConstraintViolation::InvalidUrl(_) => TextKey::FieldInvalidUrl,
        ConstraintViolation::BelowMin { .. } => TextKey::FieldBelowMin,
        ConstraintViolation::StepMismatch { .. } => TextKey::FieldStepMismatch,
        ConstraintViolation::NotANumber(_) => TextKey::FieldNotANumber,
        ConstraintViolation::OutOfRange(_) => TextKey::FieldOutOfRange,
    };
    let field = field_spec(violation.key())
        .map(|spec| spec.display_label(app.language))
        .unwrap_or_else(|| violation.key().to_string());

    let area = centered_rect(OVERLAY_WIDTH_PERCENT, OVERLAY_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, area);
    let overlay = Paragraph::new(vec![
        Line::from(Span::styled(field, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(t(hint, app.language)),
    ])
    .style(Style::default().fg(Color::Red))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default()
        .borders(Borders::ALL)
        .title(t(TextKey::Error, app.language))
        .style(Style::default().fg(Color::Red)));
    f.render_widget(overlay, area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::api::{AddTraderResponse, TraderApi};
    use crate::app::tests::test_app;
    use crate::error::SubmissionFailure;
    use crate::form::{FieldKey, TraderDraft};
    use crate::i18n::Language;
    use crate::ui::render_ui;
    use super::*;

    struct AcceptingApi;

    #[async_trait]
    impl TraderApi for AcceptingApi {
        async fn add_trader(
            &self,
            draft: &TraderDraft,
        ) -> Result<AddTraderResponse, SubmissionFailure> {
            Ok(AddTraderResponse {
                success: true,
                message: "trader added".into(),
                trader_id: Some(draft.id.clone()),
            })
        }
    }

    fn fill(app: &mut App) {
        app.set_field(FieldKey::Id, "hl_ds_2".into()).unwrap();
        app.set_field(FieldKey::Name, "Trader 2".into()).unwrap();
        app.set_field(FieldKey::DeepseekKey, "sk-1".into()).unwrap();
        app.set_field(FieldKey::HyperliquidPrivateKey, "0xabc".into()).unwrap();
        app.set_field(FieldKey::HyperliquidWalletAddr, "0xdef".into()).unwrap();
    }

    /// Draw the whole screen and return it row by row.
    fn screen(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn shows(rows: &[String], text: &str) -> bool {
        rows.iter().any(|row| row.contains(text))
    }

    #[tokio::test]
    async fn button_reads_submitting_while_in_flight() {
        let mut app = test_app();
        fill(&mut app);
        assert!(shows(&screen(&app), "Add Trader"));

        assert!(app.submit());
        let rows = screen(&app);
        assert!(shows(&rows, "Submitting..."));
        assert!(!shows(&rows, "Add Trader"));

        app.wait_for_submission().await;
        assert!(shows(&screen(&app), "Add Trader"));
    }

    #[tokio::test]
    async fn failure_banner_shows_error_title_and_text() {
        let mut app = test_app();
        fill(&mut app);
        app.submit();
        app.wait_for_submission().await;

        let rows = screen(&app);
        assert!(shows(&rows, "Error"));
        assert!(shows(&rows, "backend unreachable"));
        assert!(!shows(&rows, "Redeploy"));
    }

    #[tokio::test]
    async fn success_banner_carries_redeploy_notice() {
        let mut app = App::new(Arc::new(AcceptingApi), Language::En);
        fill(&mut app);
        app.submit();
        app.wait_for_submission().await;

        let rows = screen(&app);
        assert!(shows(&rows, "Success"));
        assert!(shows(&rows, "trader added"));
        assert!(shows(&rows, "Redeploy the service for the new trader to take effect."));
    }

    #[test]
    fn violation_overlay_names_the_field() {
        let mut app = test_app();
        app.violation = Some(ConstraintViolation::OutOfRange(FieldKey::ScanIntervalMinutes));
        let rows = screen(&app);
        assert!(shows(&rows, "Scan Interval (minutes) *"));
        assert!(shows(&rows, "Value is too large."));
    }
}
