//! Display functions for command results

use super::formatters::styled_letter;
use crate::commands::{PoolReport, ScoreResult};
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: Vec<String> = result
        .guess
        .letters()
        .iter()
        .zip(result.feedback.verdicts())
        .map(|(&letter, &verdict)| styled_letter(letter, verdict))
        .collect();

    println!("\n{}", tiles.join(" "));
    println!("{}", result.feedback.to_emoji());
    println!(
        "\nExact: {}   Present: {}",
        result.feedback.count_exact().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Print a word pool summary
pub fn print_pool_report(report: &PoolReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORD POOL".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Word length:  {}", report.word_len);
    println!("   Corpus limit: {}", report.limit);
    println!(
        "   Pool size:    {}",
        report.size.to_string().bright_yellow().bold()
    );

    if report.size == 0 {
        println!(
            "\n{}",
            "No words of this length survive the limit; a game cannot start.".red()
        );
        return;
    }

    if !report.top.is_empty() {
        println!("\nTop {} by frequency:", report.top.len());
        for (i, word) in report.top.iter().enumerate() {
            println!("  {:>4}. {}", i + 1, word.to_uppercase());
        }
    }
}
