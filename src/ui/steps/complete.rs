//! Post-submission confirmation rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::render_footer;
use crate::ui::centered_rect;
use crate::wizard::Wizard;

pub(crate) fn render_complete(wizard: &Wizard, frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Enrollment Complete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Description
            Constraint::Min(6),    // Snapshot summary
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "✓ Thank you for enrolling",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let desc = Paragraph::new(Line::from("Your details were saved on this machine."))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(desc, chunks[1]);

    if let Some(snapshot) = wizard.snapshot() {
        let lines = vec![
            Line::from(vec![
                Span::styled("  Name: ", Style::default().fg(Color::Gray)),
                Span::raw(format!("{} {}", snapshot.first_name, snapshot.last_name)),
            ]),
            Line::from(vec![
                Span::styled("  Email: ", Style::default().fg(Color::Gray)),
                Span::raw(snapshot.email.clone()),
            ]),
            Line::from(vec![
                Span::styled("  City: ", Style::default().fg(Color::Gray)),
                Span::raw(format!("{}, {}", snapshot.city, snapshot.country)),
            ]),
            Line::from(vec![
                Span::styled("  Submitted: ", Style::default().fg(Color::Gray)),
                Span::raw(snapshot.submitted_at.format("%Y-%m-%d %H:%M UTC").to_string()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), chunks[2]);
    }

    render_footer(
        frame,
        chunks[3],
        &[("Enter", "close"), ("r", "start over"), ("q", "quit")],
    );
}
