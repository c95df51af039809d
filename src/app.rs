//! TUI application: terminal lifecycle, event loop, key routing.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::notifications;
use crate::storage::FileStore;
use crate::ui::steps;
use crate::ui::toast::{render_toasts, Toast, ToastKind};
use crate::wizard::{Notice, StepId, Wizard};

pub struct App {
    config: Config,
    wizard: Wizard,
    toasts: Vec<Toast>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let store = FileStore::new(config.data_path());
        let wizard = Wizard::new(Box::new(store));
        Self {
            config,
            wizard,
            toasts: Vec::new(),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        let toast_ttl = Duration::from_millis(self.config.ui.toast_ttl_ms);

        // Main loop
        while !self.should_quit {
            terminal.draw(|f| {
                steps::render(&self.wizard, f);
                render_toasts(f, &self.toasts);
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            self.drain_notices();
            self.toasts.retain(|toast| !toast.expired(toast_ttl));
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.wizard.reset(),
                _ => {}
            }
            return;
        }

        if self.wizard.submitted() {
            self.handle_confirmation_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Enter => {
                if self.wizard.is_last_step() {
                    self.wizard.submit();
                } else {
                    self.wizard.advance();
                }
            }
            KeyCode::Esc => {
                if self.wizard.current_index() == 0 {
                    self.should_quit = true;
                } else {
                    self.wizard.retreat();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.wizard.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.wizard.focus_prev(),
            // Review has no inputs, so plain letters are free for actions
            KeyCode::Char('r') if self.wizard.step().id == StepId::Review => {
                self.wizard.reset();
            }
            KeyCode::Char('q') if self.wizard.step().id == StepId::Review => {
                self.should_quit = true;
            }
            code => {
                self.wizard.handle_field_key(code);
            }
        }
    }

    fn handle_confirmation_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.wizard.acknowledge(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.wizard.reset(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Turn controller notices into toasts and desktop notifications
    fn drain_notices(&mut self) {
        for notice in self.wizard.take_notices() {
            match notice {
                Notice::Submitted { name } => {
                    self.toasts.push(Toast::new(
                        ToastKind::Success,
                        format!("Enrollment saved. Welcome, {name}!"),
                    ));
                    if self.config.notifications.enabled && self.config.notifications.on_submit {
                        let body = format!("Saved enrollment for {name}");
                        if let Err(err) = notifications::send(
                            "Enrollment complete",
                            &body,
                            self.config.notifications.sound,
                        ) {
                            tracing::warn!(error = %err, "desktop notification failed");
                        }
                    }
                }
                Notice::SubmitBlocked { errors } => {
                    let plural = if errors == 1 { "field needs" } else { "fields need" };
                    self.toasts.push(Toast::new(
                        ToastKind::Error,
                        format!("{errors} {plural} attention"),
                    ));
                }
                Notice::Reset => {
                    self.toasts
                        .push(Toast::new(ToastKind::Info, "Form cleared"));
                }
            }
        }
    }
}
