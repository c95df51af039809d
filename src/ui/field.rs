//! Form input widgets for the wizard steps

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A single editable input
pub enum FormField {
    /// Single-line text input
    TextInput {
        value: String,
        cursor_pos: usize,
        placeholder: &'static str,
    },
    /// Boolean toggle
    Toggle { value: bool },
}

impl FormField {
    pub fn text(placeholder: &'static str) -> Self {
        FormField::TextInput {
            value: String::new(),
            cursor_pos: 0,
            placeholder,
        }
    }

    pub fn toggle() -> Self {
        FormField::Toggle { value: false }
    }

    /// Current value as entered (untrimmed)
    pub fn value(&self) -> String {
        match self {
            FormField::TextInput { value, .. } => value.clone(),
            FormField::Toggle { value } => value.to_string(),
        }
    }

    /// Boolean reading; false for text inputs
    pub fn is_on(&self) -> bool {
        matches!(self, FormField::Toggle { value: true })
    }

    pub fn set_value(&mut self, new_value: &str) {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            } => {
                *value = new_value.to_string();
                *cursor_pos = value.len();
            }
            FormField::Toggle { value } => {
                *value = new_value == "true" || new_value == "yes";
            }
        }
    }

    /// Return the field to its initial empty/off state
    pub fn clear(&mut self) {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            } => {
                value.clear();
                *cursor_pos = 0;
            }
            FormField::Toggle { value } => *value = false,
        }
    }

    /// Handle a key event, returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self {
            FormField::TextInput { value, cursor_pos, .. } => match key {
                KeyCode::Char(c) => {
                    value.insert(*cursor_pos, c);
                    *cursor_pos += c.len_utf8();
                    true
                }
                KeyCode::Backspace => {
                    if *cursor_pos > 0 {
                        let prev = previous_boundary(value, *cursor_pos);
                        value.replace_range(prev..*cursor_pos, "");
                        *cursor_pos = prev;
                    }
                    true
                }
                KeyCode::Delete => {
                    if *cursor_pos < value.len() {
                        let next = next_boundary(value, *cursor_pos);
                        value.replace_range(*cursor_pos..next, "");
                    }
                    true
                }
                KeyCode::Left => {
                    if *cursor_pos > 0 {
                        *cursor_pos = previous_boundary(value, *cursor_pos);
                    }
                    true
                }
                KeyCode::Right => {
                    if *cursor_pos < value.len() {
                        *cursor_pos = next_boundary(value, *cursor_pos);
                    }
                    true
                }
                KeyCode::Home => {
                    *cursor_pos = 0;
                    true
                }
                KeyCode::End => {
                    *cursor_pos = value.len();
                    true
                }
                _ => false,
            },
            FormField::Toggle { value } => match key {
                KeyCode::Char(' ') => {
                    *value = !*value;
                    true
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    *value = false;
                    true
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    *value = true;
                    true
                }
                _ => false,
            },
        }
    }

    /// Render the input line
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        match self {
            FormField::TextInput {
                value,
                cursor_pos,
                placeholder,
            } => {
                let line = if value.is_empty() && !focused {
                    Line::from(Span::styled(
                        *placeholder,
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    let mut text = value.clone();
                    if focused {
                        if *cursor_pos < text.len() {
                            text.insert(*cursor_pos, '|');
                        } else {
                            text.push('|');
                        }
                    }
                    Line::from(text)
                };

                let para = Paragraph::new(line).style(Style::default().fg(if focused {
                    Color::White
                } else {
                    Color::Gray
                }));
                frame.render_widget(para, area);
            }
            FormField::Toggle { value } => {
                let on_style = if *value {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let off_style = if *value {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                };

                let marker = if focused { "> " } else { "  " };
                let line = Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled("[Yes]", on_style),
                    Span::raw(" / "),
                    Span::styled("[No]", off_style),
                ]);
                frame.render_widget(Paragraph::new(line), area);
            }
        }
    }
}

/// Byte index of the char boundary before `pos`
fn previous_boundary(value: &str, pos: usize) -> usize {
    value[..pos]
        .char_indices()
        .next_back()
        .map_or(0, |(idx, _)| idx)
}

/// Byte index of the char boundary after `pos`
fn next_boundary(value: &str, pos: usize) -> usize {
    value[pos..]
        .chars()
        .next()
        .map_or(value.len(), |c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_handles_chars() {
        let mut field = FormField::text("name");
        assert!(field.handle_key(KeyCode::Char('h')));
        assert!(field.handle_key(KeyCode::Char('i')));
        assert_eq!(field.value(), "hi");
    }

    #[test]
    fn test_text_input_cursor_editing() {
        let mut field = FormField::text("name");
        field.set_value("abc");
        field.handle_key(KeyCode::Left);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "ac");

        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Delete);
        assert_eq!(field.value(), "c");
    }

    #[test]
    fn test_text_input_multibyte_editing() {
        let mut field = FormField::text("name");
        field.handle_key(KeyCode::Char('é'));
        field.handle_key(KeyCode::Char('e'));
        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Right);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "e");
    }

    #[test]
    fn test_toggle_keys() {
        let mut field = FormField::toggle();
        assert!(!field.is_on());

        field.handle_key(KeyCode::Char(' '));
        assert!(field.is_on());

        field.handle_key(KeyCode::Left);
        assert!(!field.is_on());

        field.handle_key(KeyCode::Right);
        assert!(field.is_on());
    }

    #[test]
    fn test_clear_resets_state() {
        let mut text = FormField::text("name");
        text.set_value("Ada");
        text.clear();
        assert_eq!(text.value(), "");

        let mut toggle = FormField::toggle();
        toggle.set_value("true");
        toggle.clear();
        assert!(!toggle.is_on());
    }
}
