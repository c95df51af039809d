//! Render functions for each wizard step

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::centered_rect;
use crate::wizard::{Direction, Field, StepId, Wizard, STEPS};

mod address;
mod complete;
mod personal;
mod preferences;
mod review;

/// Render the active step, or the confirmation surface after submission
pub fn render(wizard: &Wizard, frame: &mut Frame) {
    if wizard.submitted() {
        complete::render_complete(wizard, frame);
        return;
    }
    match wizard.step().id {
        StepId::Personal => personal::render_personal(wizard, frame),
        StepId::Address => address::render_address(wizard, frame),
        StepId::Preferences => preferences::render_preferences(wizard, frame),
        StepId::Review => review::render_review(wizard, frame),
    }
}

/// Draw the outer chrome shared by all steps and return the inner area
pub(crate) fn step_chrome(frame: &mut Frame, title: &str) -> Rect {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Enroll",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" - {title} ")),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Step progress indicator with the transition direction glyph
pub(crate) fn render_progress(wizard: &Wizard, frame: &mut Frame, area: Rect) {
    let arrow = match wizard.direction() {
        Direction::Forward => "▸",
        Direction::Backward => "◂",
    };

    let mut spans = Vec::new();
    for (i, step) in STEPS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == wizard.current_index() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if i < wizard.current_index() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if i == wizard.current_index() {
            spans.push(Span::styled(format!("{arrow} "), style));
        }
        spans.push(Span::styled(step.title, style));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Label, input, and inline error rows for each of the step's fields
pub(crate) fn render_fields(wizard: &Wizard, frame: &mut Frame, area: Rect) {
    let mut y = area.y;
    for field in wizard.step().fields {
        if y + 2 > area.bottom() {
            break;
        }
        let focused = wizard.focused_field() == Some(*field);

        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = Paragraph::new(Line::from(Span::styled(field.label(), label_style)));
        frame.render_widget(label, Rect::new(area.x, y, area.width, 1));
        y += 1;

        wizard
            .field(*field)
            .render(frame, Rect::new(area.x + 2, y, area.width.saturating_sub(2), 1), focused);
        y += 1;

        if let Some(message) = wizard.error(*field) {
            if y < area.bottom() {
                let error = Paragraph::new(Line::from(Span::styled(
                    format!("✗ {message}"),
                    Style::default().fg(Color::Red),
                )));
                frame.render_widget(error, Rect::new(area.x + 2, y, area.width.saturating_sub(2), 1));
                y += 1;
            }
        }
        y += 1; // spacer
    }
}

/// Key hint footer shared by the steps
pub(crate) fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {action}")));
    }
    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Display form of a boolean preference on the review screens
pub(crate) fn toggle_text(wizard: &Wizard, field: Field) -> &'static str {
    if wizard.bool_value(field) {
        "Yes"
    } else {
        "No"
    }
}
