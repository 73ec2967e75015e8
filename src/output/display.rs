//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, spaced_pattern};
use crate::commands::{AnalysisResult, PlayResult, SolveResult};
use crate::core::{GameStatus, Guess};
use colored::Colorize;

/// How many letter scores the analysis table shows
const TOP_LETTERS: usize = 10;

fn status_label(status: GameStatus) -> colored::ColoredString {
    match status {
        GameStatus::Won => status.to_string().green().bold(),
        GameStatus::Lost => status.to_string().red().bold(),
        GameStatus::KeepGuessing => status.to_string().yellow(),
    }
}

/// Print the result of a batch of games
pub fn print_play_result(result: &PlayResult, quiet: bool) {
    if !quiet {
        println!();
        for record in &result.records {
            println!(
                "{:>12}  {}",
                record.secret.to_uppercase().bright_yellow(),
                record.summary
            );
        }
    }

    let games = result.records.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {games}");
    println!("   Won:              {}", format!("{}", result.won).green());
    println!("   Lost:             {}", format!("{}", result.lost).red());
    println!("   Total score:      {}", result.total_score);
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let kind = match step.guess {
            Guess::Letter(_) => "letter",
            Guess::Word(_) => "word",
        };
        println!(
            "\nTurn {}: {} ({kind})  {}",
            i + 1,
            colored_guess(&step.guess, step.correct),
            spaced_pattern(&step.pattern_after)
        );

        if verbose {
            println!("  Candidates: {}", step.candidates_before);
            println!(
                "  Entropy:    [{}] {:.3} bits",
                entropy_bar(step.entropy, 20).green(),
                step.entropy
            );
        }
    }

    println!();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved with score {}", result.score).green().bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed after {} guesses", result.steps.len())
                .red()
                .bold()
        ),
    }
    println!("   Status: {}", status_label(result.status));
}

/// Print the result of a state analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        spaced_pattern(&result.pattern).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.guessed_letters.is_empty() {
        println!("\nGuessed letters: {}", result.guessed_letters.to_uppercase());
    }

    println!("\n📊 {} candidate words", result.total_candidates);
    if !result.sample.is_empty() {
        let more = result.total_candidates.saturating_sub(result.sample.len());
        let suffix = if more > 0 {
            format!(" … and {more} more")
        } else {
            String::new()
        };
        println!("   {}{suffix}", result.sample.join(", "));
    }

    println!("\n📈 {}", "Letter entropy:".bright_cyan().bold());
    for score in result.letter_scores.iter().take(TOP_LETTERS) {
        println!(
            "   {}  [{}] {:.3} bits  ({} groups, largest {})",
            char::from(score.letter).to_ascii_uppercase(),
            entropy_bar(score.entropy, 30).green(),
            score.entropy,
            score.groups,
            score.largest_group
        );
    }
    println!(
        "   word [{}] {:.3} bits",
        entropy_bar(result.word_entropy, 30).blue(),
        result.word_entropy
    );

    println!(
        "\n💡 Recommended guess: {}",
        result.recommendation.to_string().to_uppercase().bright_green().bold()
    );
}
