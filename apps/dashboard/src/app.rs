//! Terminal event loop and input handling.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use finanzas_core::{
    ConversionOutcome, ConverterForm, Dashboard, DashboardState, DisplayMode, RefreshTimer,
    ValidationError,
};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::ui;

/// What a key press asks the loop to do beyond editing local UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    SelectMode(DisplayMode),
    Convert,
}

/// Dialog shown over the dashboard until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

pub struct App {
    pub state: DashboardState,
    pub form: ConverterForm,
    pub modal: Option<Modal>,
    pub base_currency: String,
}

impl App {
    pub fn new(state: DashboardState, base_currency: impl Into<String>) -> Self {
        Self {
            state,
            form: ConverterForm::default(),
            modal: None,
            base_currency: base_currency.into(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        if self.modal.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.modal = None;
            }
            return None;
        }

        match key.code {
            KeyCode::Esc if self.state.mode() != DisplayMode::Currencies => {
                return Some(Command::Quit);
            }
            KeyCode::F(n @ 1..=3) => {
                return Some(Command::SelectMode(DisplayMode::ALL[n as usize - 1]));
            }
            KeyCode::Tab => return Some(Command::SelectMode(self.state.mode().next())),
            _ => {}
        }

        if self.state.mode() != DisplayMode::Currencies {
            return None;
        }

        match key.code {
            KeyCode::Up => self.form.select_previous(),
            KeyCode::Down => self.form.select_next(),
            KeyCode::Backspace => self.form.backspace(),
            // Amount field has focus in this mode.
            KeyCode::Esc => self.form.set_amount_input(String::new()),
            KeyCode::Enter => return Some(Command::Convert),
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
        None
    }

    pub fn show_conversion(&mut self, result: Result<ConversionOutcome, ValidationError>) {
        self.modal = Some(match result {
            Ok(outcome) => Modal {
                title: outcome.title().to_string(),
                message: outcome.message(),
                is_error: !outcome.is_success(),
            },
            Err(e) => Modal {
                title: "Error".to_string(),
                message: e.to_string(),
                is_error: true,
            },
        });
    }
}

pub async fn run(dashboard: Dashboard, interval: Duration) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &dashboard, interval).await;
    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    dashboard: &Dashboard,
    interval: Duration,
) -> anyhow::Result<()> {
    let mut app = App::new(
        dashboard.initial_state(DisplayMode::default()),
        dashboard.rates().base_currency(),
    );
    let mut timer = RefreshTimer::new(interval);
    timer.start(Instant::now());
    info!("Dashboard started, refreshing every {:?}", interval);

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        let wait = timer.time_until_due(Instant::now()).unwrap_or(interval);
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Some(Command::Quit) => break,
                        Some(Command::SelectMode(mode)) => {
                            dashboard.select_mode(&mut app.state, mode);
                        }
                        Some(Command::Convert) => {
                            let result = dashboard.submit_conversion(&app.form).await;
                            app.show_conversion(result);
                        }
                        None => {}
                    }
                }
            }
        }

        if timer.is_due(Instant::now()) {
            let report = dashboard.tick(&mut app.state).await;
            debug!(
                "Tick {} done: {} updated, {} unavailable",
                timer.completed_ticks() + 1,
                report.updated,
                report.unavailable
            );
            timer.complete_tick(Instant::now());
        }
    }

    timer.stop();
    info!("Dashboard closed after {} ticks", timer.completed_ticks());
    Ok(())
}
