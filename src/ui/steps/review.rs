//! Review step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_footer, render_progress, step_chrome, toggle_text};
use crate::wizard::{Field, Wizard};

pub(crate) fn render_review(wizard: &Wizard, frame: &mut Frame) {
    let inner = step_chrome(frame, "Review");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Title
            Constraint::Min(14),   // Summary
            Constraint::Length(3), // Errors
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    render_progress(wizard, frame, chunks[0]);

    let title = Paragraph::new(Line::from(Span::styled(
        "Ready to Submit",
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[2]);

    let mut summary = vec![section("Personal")];
    summary.push(value_line("Name", &format!(
        "{} {}",
        wizard.value(Field::FirstName),
        wizard.value(Field::LastName)
    )));
    summary.push(value_line("Email", &wizard.value(Field::Email)));
    summary.push(Line::from(""));
    summary.push(section("Address"));
    summary.push(value_line("Country", &wizard.value(Field::Country)));
    summary.push(value_line("State", &wizard.value(Field::State)));
    summary.push(value_line("City", &wizard.value(Field::City)));
    summary.push(value_line("Street", &wizard.value(Field::Street)));
    summary.push(Line::from(""));
    summary.push(section("Preferences"));
    summary.push(value_line("Newsletter", toggle_text(wizard, Field::Newsletter)));
    summary.push(value_line("Alerts", toggle_text(wizard, Field::Alerts)));
    frame.render_widget(Paragraph::new(summary), chunks[3]);

    // Submission-blocking errors from earlier steps, if any
    if !wizard.errors().is_empty() {
        let mut lines = Vec::new();
        for (field, message) in wizard.errors().iter().take(2) {
            lines.push(Line::from(Span::styled(
                format!("✗ {}: {}", field.label(), message),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(Paragraph::new(lines), chunks[4]);
    }

    render_footer(
        frame,
        chunks[5],
        &[("Enter", "submit"), ("Esc", "back"), ("r", "start over")],
    );
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn value_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}
