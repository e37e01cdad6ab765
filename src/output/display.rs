//! Display functions for the console game

use super::formatters::share_text;
use crate::game::{GameSession, Outcome};
use chrono::NaiveDate;
use colored::Colorize;

/// Print the welcome banner
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mot du Jour - Console Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess today's French word. Accents are optional.");
    println!("  - {} letter in the right spot", " A ".black().on_green());
    println!("  - {} letter elsewhere in the word", " A ".black().on_yellow());
    println!("  - {} letter not in the word", " A ".white().on_bright_black());
    println!("\nCommands: 'quit' to exit\n");
}

/// Print the end-of-game summary with a shareable emoji grid
pub fn print_game_summary(session: &GameSession, day: NaiveDate) {
    let won = session.outcome() == Outcome::Won;

    println!("\n{}", "═".repeat(60).bright_cyan());
    if won {
        println!(
            "{}",
            format!(
                "    🎉  Trouvé en {} / {} !  🎉",
                session.attempts_used(),
                session.max_attempts()
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("    Perdu... the word was {}", session.secret())
                .red()
                .bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n{}\n",
        share_text(day, session.history(), won, session.max_attempts())
    );
}

/// Print the cumulative score
pub fn print_total_score(total: u64) {
    println!(
        "Total score: {}",
        total.to_string().bright_yellow().bold()
    );
}
