//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI. Input and output are generic so the loop
//! can be driven by any reader and writer.

use crate::config::GameConfig;
use crate::core::{GuessOutcome, Round, RoundStatus, SecretWord, Statistics};
use crate::output::{loss_banner, render_board, win_banner};
use crate::wordlists::pick_random;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Line-oriented console for one game session
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and hand back the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for guesses until one is accepted and applied to the round
    ///
    /// Rejected guesses are reported and the player is asked again.
    /// Returns `None` when input runs out.
    pub fn get_guess(&mut self, round: &mut Round) -> io::Result<Option<GuessOutcome>> {
        loop {
            let Some(input) = self.prompt("Guess a letter.")? else {
                return Ok(None);
            };

            match round.guess(&input) {
                Ok(outcome) => return Ok(Some(outcome)),
                Err(err) => {
                    tracing::debug!(input = %input, %err, "rejected guess");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Ask whether to play another round; any answer starting with `y` is yes
    pub fn play_again(&mut self) -> io::Result<bool> {
        let answer = self.prompt("Do you want to play again? (yes or no)")?;
        Ok(answer.is_some_and(|a| a.to_lowercase().starts_with('y')))
    }

    /// Play one round to completion
    ///
    /// Returns the final status, or `None` if input ran out first.
    pub fn play_round(
        &mut self,
        secret: SecretWord,
        config: &GameConfig,
    ) -> io::Result<Option<RoundStatus>> {
        tracing::info!(length = secret.len(), budget = config.mistake_budget, "round started");
        let mut round = Round::with_rules(secret, config.mistake_budget, config.placeholder);

        loop {
            write!(self.output, "{}", render_board(&round))?;

            if self.get_guess(&mut round)?.is_none() {
                return Ok(None);
            }

            match round.status() {
                RoundStatus::InProgress => {}
                status => {
                    write!(self.output, "{}", render_board(&round))?;
                    let banner = if status == RoundStatus::Won {
                        win_banner(&round)
                    } else {
                        loss_banner(&round)
                    };
                    writeln!(self.output, "\n{banner}\n")?;
                    tracing::info!(
                        ?status,
                        misses = round.missed().len(),
                        "round finished"
                    );
                    return Ok(Some(status));
                }
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Plays rounds with random words from `words` until the player declines
/// another round or input ends.
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error with the
/// console.
pub fn run_simple<R, W, G>(
    words: &[SecretWord],
    config: &GameConfig,
    rng: &mut G,
    input: R,
    output: W,
) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut console = Console::new(input, output);
    let mut stats = Statistics::default();

    writeln!(console.output, "H A N G M A N\n").context("failed to write to console")?;

    loop {
        let secret = pick_random(words, rng)
            .context("word list is empty")?
            .clone();

        let Some(status) = console
            .play_round(secret, config)
            .context("console I/O failed")?
        else {
            break;
        };
        stats.record(status);

        if !console.play_again().context("console I/O failed")? {
            break;
        }
    }

    writeln!(
        console.output,
        "Thanks for playing! You won {} of {} rounds.",
        stats.rounds_won, stats.rounds_played
    )
    .context("failed to write to console")?;

    Ok(stats)
}
