//! TUI rendering with ratatui
//!
//! Gallows, word and status panels for the Hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::frame;
use crate::output::formatters::{letter_list, spaced};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Prompt
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Gallows
            Constraint::Percentage(55), // Word and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("H A N G M A N")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let missed = app.round.missed().len();
    let color = if app.round.is_lost() {
        Color::Red
    } else if missed > 0 {
        Color::Yellow
    } else {
        Color::White
    };

    let art: Vec<Line> = frame(missed, app.round.budget())
        .lines()
        .map(Line::from)
        .collect();

    let gallows = Paragraph::new(art)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Chances
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_chances(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    // Reveal the whole word once the round is over
    let shown = if app.input_mode == InputMode::RoundOver {
        app.round.secret().text().to_string()
    } else {
        app.round.blanks()
    };

    let content = vec![
        Line::from(Span::styled(
            spaced(&shown).to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Missed: "),
            Span::styled(
                letter_list(app.round.missed()).to_uppercase(),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let word = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, area);
}

fn render_chances(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.round.remaining_chances();
    let budget = app.round.budget();
    let percent = if budget == 0 {
        0
    } else {
        (remaining * 100 / budget) as u16
    };

    let color = match remaining {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Chances ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "{remaining}/{budget} left | {} letters to uncover",
            app.round.letters_to_uncover()
        ));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a letter to guess | ? for a hint ", Color::Yellow),
        InputMode::RoundOver => (" Round over | n: new round, q: quit ", Color::Green),
    };

    let guessed = app.round.guessed();
    let content = if guessed.is_empty() {
        String::new()
    } else {
        format!("Guessed: {}", letter_list(&guessed).to_uppercase())
    };

    let prompt = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(prompt, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Won: {} ({:.0}%)",
        app.stats.rounds_played,
        app.stats.rounds_won,
        app.stats.win_rate() * 100.0
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let hints_text = format!("Hints used: {}", app.hints_used);
    f.render_widget(
        Paragraph::new(hints_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Esc/Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::solver::StrategyType;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_hidden_word_and_chances() {
        let words = words_from_slice(&["otter"]);
        let mut app = App::new(
            &words,
            GameConfig::default(),
            StrategyType::from_name("frequency"),
        )
        .unwrap();
        app.handle_guess('t');
        app.handle_guess('z');

        let screen = screen(&app);
        assert!(screen.contains("H A N G M A N"));
        assert!(screen.contains("_ T T _ _"));
        assert!(screen.contains("Missed: Z"));
        assert!(screen.contains("5/6 left"));
    }

    #[test]
    fn reveals_word_when_round_over() {
        let words = words_from_slice(&["ox"]);
        let mut app = App::new(
            &words,
            GameConfig::default(),
            StrategyType::from_name("frequency"),
        )
        .unwrap();
        for c in ['a', 'b', 'c', 'd', 'e', 'f'] {
            app.handle_guess(c);
        }

        let screen = screen(&app);
        assert!(screen.contains("O X"));
        assert!(screen.contains("Round over"));
        assert!(screen.contains("Rounds: 1 | Won: 0"));
    }
}
