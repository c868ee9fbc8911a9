//! Display functions for command results

use super::formatters::{
    color_swatch, distribution_bar, feedback_to_emoji, format_duration, guess_swatches,
};
use crate::commands::{BenchmarkResult, StatsReport};
use crate::core::{Color, Feedback, Guess, Poll};
use crate::game::{GameConfig, GameState, RecordedOutcome, Status};
use crate::i18n::{self, Label, Language};
use colored::Colorize;

/// Print the poll with the number used to pick each color
///
/// Colors in `ruled_out` are dimmed and struck through.
pub fn print_poll(poll: &Poll, language: Language, ruled_out: &[Color]) {
    let entries: Vec<String> = poll
        .colors()
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let name = i18n::translate(color, language);
            let name = if ruled_out.contains(&color) {
                name.bright_black().strikethrough()
            } else {
                name.normal()
            };
            format!(
                "{} {} {name}",
                (i + 1).to_string().bright_black(),
                color_swatch(color)
            )
        })
        .collect();
    println!("Colors: {}", entries.join("   "));
}

/// Print one submitted row
pub fn print_feedback_row(row: usize, guess: &Guess, feedback: Feedback) {
    println!(
        "  {:>2}. {}   {}",
        (row + 1).to_string().bright_black(),
        guess_swatches(guess),
        feedback_to_emoji(feedback)
    );
}

/// Print the end-of-game banner, the solution, and what was recorded
pub fn print_game_over(game: &GameState, outcome: RecordedOutcome, language: Language) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.status() {
        Status::Won => println!("  {}", i18n::label(Label::Won, language).bright_green().bold()),
        Status::Lost => println!("  {}", i18n::label(Label::Lost, language).bright_red().bold()),
        Status::InProgress => {}
    }

    if let Some(solution) = game.solution() {
        let swatches: Vec<String> = solution
            .colors()
            .iter()
            .map(|&c| color_swatch(c).to_string())
            .collect();
        println!(
            "  {}: {} ({})",
            i18n::label(Label::SolutionWas, language),
            swatches.join(" "),
            i18n::translate_all(solution.colors(), language)
        );
    }

    match outcome {
        RecordedOutcome::Nothing => {}
        RecordedOutcome::NewBestTime { seconds, previous } => {
            let previous = previous.map_or_else(String::new, |p| {
                format!(" (was {})", format_duration(p))
            });
            println!(
                "  ⏱  {}: {}{previous}",
                i18n::label(Label::NewBestTime, language).bright_yellow().bold(),
                format_duration(seconds).bright_white().bold()
            );
        }
        RecordedOutcome::SlowerThanBest { seconds, best } => {
            println!(
                "  ⏱  {} | {}: {}",
                format_duration(seconds),
                i18n::label(Label::BestTime, language),
                format_duration(best)
            );
        }
        RecordedOutcome::Scored { score, record } => {
            println!(
                "  ⭐ +{} | {}: {} | {}: {}",
                score.to_string().bright_yellow().bold(),
                i18n::label(Label::Score, language),
                record.total_score,
                i18n::label(Label::GamesPlayed, language),
                record.games_played
            );
        }
        RecordedOutcome::NoPoints => {
            println!("  ⭐ +0");
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

pub fn print_settings(config: &GameConfig) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "SETTINGS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("   Rows:              {}", config.rows);
    println!("   Color poll length: {}", config.color_poll_length);
    println!(
        "   Duplicates:        {}",
        if config.allow_duplicates { "allowed" } else { "not allowed" }
    );
    println!("   Mode:              {}", config.mode);
    println!(
        "   Helper:            {}",
        if config.helper_enabled { "on" } else { "off" }
    );
    println!("   Fingerprint:       {}", config.fingerprint());
}

pub fn print_stats(report: &StatsReport, language: Language) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {} ",
        "RECORDS".bright_cyan().bold(),
        report.fingerprint.to_string().bright_yellow()
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "   {}: {}",
        i18n::label(Label::BestTime, language),
        report
            .best_time
            .map_or_else(|| "-".to_string(), format_duration)
    );
    println!(
        "   {}: {}",
        i18n::label(Label::Score, language),
        report.score.total_score
    );
    println!(
        "   {}: {}",
        i18n::label(Label::GamesPlayed, language),
        report.score.games_played
    );
    if let Some(average) = report.score.average() {
        println!("   Ø: {average:.2}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Settings:         {}", result.config.fingerprint());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won / lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Average rows:     {}",
        format!("{:.2}", result.average_rows).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rows).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rows).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for rows_used in 1..=result.config.rows {
        if let Some(&count) = result.distribution.get(&rows_used) {
            let (bar, pct) = distribution_bar(count, result.total_games);
            println!("   {rows_used:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
