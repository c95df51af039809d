//! Transient toast overlay.
//!
//! Toasts are created from wizard notices and expire after a configurable
//! time-to-live; they render stacked above the bottom edge and never require
//! acknowledgment.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn color(self) -> Color {
        match self {
            ToastKind::Success => Color::Green,
            ToastKind::Info => Color::Cyan,
            ToastKind::Error => Color::Red,
        }
    }
}

#[derive(Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    created: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            created: Instant::now(),
        }
    }

    pub fn expired(&self, ttl: Duration) -> bool {
        self.created.elapsed() >= ttl
    }
}

/// Render toasts stacked bottom-right, newest at the bottom
pub fn render_toasts(frame: &mut Frame, toasts: &[Toast]) {
    let screen = frame.area();
    for (i, toast) in toasts.iter().rev().enumerate() {
        let height: u16 = 3;
        let width = (toast.text.len() as u16 + 4).min(screen.width.saturating_sub(2));
        let bottom_offset = 1 + (i as u16) * height;
        if bottom_offset + height > screen.height {
            break;
        }
        let area = Rect {
            x: screen.width.saturating_sub(width + 2),
            y: screen.height.saturating_sub(bottom_offset + height),
            width,
            height,
        };

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(toast.kind.color()));
        let para = Paragraph::new(Span::styled(
            toast.text.as_str(),
            Style::default().fg(toast.kind.color()),
        ))
        .block(block);
        frame.render_widget(para, area);
    }
}
