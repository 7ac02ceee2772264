use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::config::PASSWORD_MASK;
use crate::form::{FieldSpec, FieldValue, InputKind, Section};
use crate::i18n::t;

pub fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let (lines, focused_line) = form_lines(app);

    // Keep the focused control inside the visible area
    let visible_height = area.height.saturating_sub(2) as usize;
    let scroll = focused_line
        .map(|line| (line + 2).saturating_sub(visible_height))
        .unwrap_or(0);

    let form = Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(form, area);
}

/// All form lines plus the index of the focused control's value line.
pub fn form_lines(app: &App) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut focused_line = None;
    let mut current_section: Option<Section> = None;

    for spec in app.visible_fields() {
        if current_section != Some(spec.section) {
            if current_section.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                t(spec.section.title(), app.language),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            current_section = Some(spec.section);
        }

        let focused = app.focus == Focus::Field(spec.key);
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if spec.kind == InputKind::Checkbox {
            if focused {
                focused_line = Some(lines.len());
            }
            lines.push(Line::from(vec![
                value_span(app, &spec, focused),
                Span::styled(format!(" {}", spec.display_label(app.language)), label_style),
            ]));
            continue;
        }

        lines.push(Line::from(Span::styled(spec.display_label(app.language), label_style)));
        if focused {
            focused_line = Some(lines.len());
        }
        lines.push(Line::from(vec![Span::raw("  "), value_span(app, &spec, focused)]));
    }

    (lines, focused_line)
}

fn value_span(app: &App, spec: &FieldSpec, focused: bool) -> Span<'static> {
    let value_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let cursor = if focused { "▏" } else { "" };

    match (spec.kind, app.draft().field(spec.key)) {
        (InputKind::Select, FieldValue::AiModel(model)) => {
            Span::styled(format!("◄ {} ►", model.label()), value_style)
        }
        (InputKind::Select, FieldValue::Exchange(exchange)) => {
            Span::styled(format!("◄ {} ►", exchange.label()), value_style)
        }
        (InputKind::Checkbox, FieldValue::Flag(checked)) => {
            Span::styled(if checked { "[x]" } else { "[ ]" }, value_style)
        }
        (InputKind::Number { .. }, _) => {
            let text = app.number_inputs.get(spec.key).unwrap_or_default();
            Span::styled(format!("{text}{cursor}"), value_style)
        }
        (_, FieldValue::Text(text)) if text.is_empty() => {
            Span::styled(format!("{cursor}{}", spec.placeholder), placeholder_style)
        }
        (InputKind::Password, FieldValue::Text(text)) => {
            let masked: String = std::iter::repeat_n(PASSWORD_MASK, text.chars().count()).collect();
            Span::styled(format!("{masked}{cursor}"), value_style)
        }
        (_, FieldValue::Text(text)) => Span::styled(format!("{text}{cursor}"), value_style),
        _ => Span::raw(""),
    }
}
