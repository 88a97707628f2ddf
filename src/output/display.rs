//! Board rendering and display functions for command results

use super::formatters::{chances_bar, letter_list, spaced};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Round, frame};
use colored::Colorize;

/// Chances left and letters still hidden
#[must_use]
pub fn remaining_info(round: &Round) -> String {
    format!(
        "No of chances remaining = {}\nYou have to uncover {} more letters",
        round.remaining_chances(),
        round.letters_to_uncover()
    )
}

/// The full board: gallows, missed letters, blanks and remaining info
#[must_use]
pub fn render_board(round: &Round) -> String {
    format!(
        "{}\n\nMissed letters: {}\n\n{}\n\n{}\n",
        frame(round.missed().len(), round.budget()),
        letter_list(round.missed()),
        spaced(&round.blanks()),
        remaining_info(round)
    )
}

/// Banner printed when a round is won
#[must_use]
pub fn win_banner(round: &Round) -> String {
    let misses = round.missed().len();
    format!(
        "{}\n{} The secret word is \"{}\"! You won with {} {}.\n{}",
        "═".repeat(50).bright_cyan(),
        "🎉 Yes!".bright_green().bold(),
        round.secret().text().bright_yellow().bold(),
        misses,
        if misses == 1 { "miss" } else { "misses" },
        "═".repeat(50).bright_cyan()
    )
}

/// Banner printed when a round is lost
#[must_use]
pub fn loss_banner(round: &Round) -> String {
    format!(
        "{}\n{} You have run out of guesses after {} missed and {} correct guesses.\nThe word was \"{}\".\n{}",
        "═".repeat(50).red(),
        "💀 Game over!".red().bold(),
        round.missed().len(),
        round.correct().len(),
        round.secret().text().bright_yellow().bold(),
        "═".repeat(50).red()
    )
}

/// Print the result of auto-playing a word
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!(
        "{} letters, {} distinct",
        result.target.len(),
        result.distinct_letters
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let mark = if step.hit {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            step.letter.to_ascii_uppercase(),
            mark,
            spaced(&step.blanks)
        );
        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );
    }

    println!();
    if result.won {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with {} {}",
                result.steps.len(),
                result.misses,
                if result.misses == 1 { "miss" } else { "misses" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
    println!(
        "   Chances left: [{}]",
        chances_bar(result.budget.saturating_sub(result.misses), result.budget)
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Won:              {}",
        format!("{}", result.wins).green()
    );
    println!(
        "   Lost:             {}",
        format!("{}", result.losses).yellow()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average misses:   {:.2}", result.average_misses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
    for (&misses, &count) in &result.miss_distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {misses:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.hardest.is_empty() {
        println!("\n🪢 {}", "Lost words:".bright_cyan().bold());
        for word in result.hardest.iter().take(10) {
            println!("   • {}", word.to_uppercase());
        }
    }
}
