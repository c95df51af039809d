//! Personal details step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{render_fields, render_footer, render_progress, step_chrome};
use crate::wizard::Wizard;

pub(crate) fn render_personal(wizard: &Wizard, frame: &mut Frame) {
    let inner = step_chrome(frame, "Personal");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Description
            Constraint::Min(12),   // Fields
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    render_progress(wizard, frame, chunks[0]);

    let desc = Paragraph::new(vec![Line::from("Tell us who you are.")])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(desc, chunks[2]);

    render_fields(wizard, frame, chunks[3]);

    render_footer(
        frame,
        chunks[4],
        &[
            ("Enter", "next"),
            ("Tab/↓", "next field"),
            ("↑", "previous field"),
            ("Esc", "quit"),
        ],
    );
}
