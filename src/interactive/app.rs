//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{GuessOutcome, Round, RoundStatus, SecretWord, Statistics};
use crate::solver::{Solver, StrategyType};
use crate::wordlists::pick_random;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MESSAGE_LIMIT: usize = 6;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a, StrategyType>,
    pub words: &'a [SecretWord],
    pub config: GameConfig,
    pub round: Round,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub hints_used: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn new(
        words: &'a [SecretWord],
        config: GameConfig,
        strategy: StrategyType,
    ) -> Result<Self> {
        let secret = pick_random(words, &mut rand::rng())
            .context("word list is empty")?
            .clone();
        let round = Round::with_rules(secret, config.mistake_budget, config.placeholder);

        let mut app = Self {
            solver: Solver::new(strategy, words),
            words,
            config,
            round,
            input_mode: InputMode::Guessing,
            messages: Vec::new(),
            stats: Statistics::default(),
            hints_used: 0,
            should_quit: false,
        };
        app.add_message(
            "Welcome! Type a letter to guess it, '?' for a hint.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn new_round(&mut self) {
        if let Some(secret) = pick_random(self.words, &mut rand::rng()) {
            self.round = Round::with_rules(
                secret.clone(),
                self.config.mistake_budget,
                self.config.placeholder,
            );
        }
        self.input_mode = InputMode::Guessing;
        self.hints_used = 0;
        self.messages.clear();
        self.add_message(
            &format!(
                "New round! The word has {} letters.",
                self.round.secret().len()
            ),
            MessageStyle::Info,
        );
        tracing::info!(length = self.round.secret().len(), "round started");
    }

    pub fn handle_guess(&mut self, input: char) {
        match self.round.guess(&input.to_string()) {
            Ok(GuessOutcome::Hit { letter, revealed }) => self.add_message(
                &format!(
                    "Yes! '{}' appears {revealed} {}.",
                    letter.to_ascii_uppercase(),
                    if revealed == 1 { "time" } else { "times" }
                ),
                MessageStyle::Success,
            ),
            Ok(GuessOutcome::Miss { letter }) => self.add_message(
                &format!(
                    "No '{}'. {} chances left.",
                    letter.to_ascii_uppercase(),
                    self.round.remaining_chances()
                ),
                MessageStyle::Error,
            ),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        }

        let status = self.round.status();
        if status.is_over() {
            self.finish_round(status);
        }
    }

    fn finish_round(&mut self, status: RoundStatus) {
        self.stats.record(status);
        self.input_mode = InputMode::RoundOver;

        let word = self.round.secret().text().to_uppercase();
        if status == RoundStatus::Won {
            self.add_message(&format!("🎉 You guessed {word}!"), MessageStyle::Success);
        } else {
            self.add_message(
                &format!("💀 Hanged! The word was {word}."),
                MessageStyle::Error,
            );
        }
        self.add_message(
            "Press 'n' for a new round or 'q' to quit.",
            MessageStyle::Info,
        );
        tracing::info!(?status, misses = self.round.missed().len(), "round finished");
    }

    /// Suggest the solver's next letter without guessing it
    pub fn hint(&mut self) {
        if let Some(letter) = self.solver.next_letter(&self.round) {
            self.hints_used += 1;
            let candidates = self.solver.count_candidates(&self.round);
            self.add_message(
                &format!(
                    "Hint: try '{}' ({candidates} candidate words)",
                    letter.to_ascii_uppercase()
                ),
                MessageStyle::Info,
            );
        } else {
            self.add_message("No letters left to suggest!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.hint(),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.handle_guess(c);
                }
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n') => self.new_round(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
