//! Simple interactive CLI mode
//!
//! Line-based game without TUI: one guess per line, colors given by name or
//! by their number in the poll.

use crate::core::{Color, Poll};
use crate::game::{GameState, RecordedOutcome, record_outcome};
use crate::i18n::{self, Label, Language};
use crate::output::{print_feedback_row, print_game_over, print_poll};
use crate::solver::Helper;
use crate::storage::KeyValueStore;
use crate::storage::records::load_settings;
use colored::Colorize;
use std::io::{self, Write};

/// Parse one row of input such as `1 2 red 4 4`
///
/// Numbers are 1-based indices into `poll`; names are checked against the
/// poll too.
///
/// # Errors
/// Returns a message naming the first token that is not a poll color.
pub fn parse_row(input: &str, poll: &Poll) -> Result<Vec<Color>, String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let color = match token.parse::<usize>() {
                Ok(n) => n
                    .checked_sub(1)
                    .and_then(|i| poll.get(i))
                    .ok_or_else(|| format!("No color number {n} in this poll"))?,
                Err(_) => token.parse::<Color>().map_err(|e| e.to_string())?,
            };
            if poll.contains(color) {
                Ok(color)
            } else {
                Err(format!("{color} is not in this poll"))
            }
        })
        .collect()
}

/// Run the simple interactive CLI mode
///
/// Settings are read from `store`, and rewards are written back to it.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// stored settings cannot start a game.
pub fn run_simple<S: KeyValueStore + ?Sized>(store: &mut S, language: Language) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Mastermind - Text Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter five colors per row, by number or by name.");
    println!("Feedback per slot:\n");
    println!("  - 🟩 right color, right place");
    println!("  - 🟨 color is in the code, elsewhere");
    println!("  - ⬜ color is not (or no more often) in the code\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut rng = rand::rng();

    'games: loop {
        let config = load_settings(store);
        let mut game = GameState::new(config, &mut rng).map_err(|e| e.to_string())?;
        let helper = config.helper_enabled.then(|| Helper::for_game(&game));

        println!("────────────────────────────────────────────────────────────");
        println!("{} rows, mode: {}", config.rows, config.mode);
        print_poll(game.poll(), language, &[]);
        println!("────────────────────────────────────────────────────────────");

        while !game.status().is_over() {
            if let Some(helper) = &helper {
                let history = game.history();
                if !history.is_empty() {
                    print_poll(game.poll(), language, &helper.ruled_out(game.poll(), &history));
                }
                println!(
                    "   {} {}",
                    helper.count_candidates(&history),
                    i18n::label(Label::Remaining, language)
                );
                if let Some(suggestion) = helper.suggest(&history, &mut rng) {
                    println!(
                        "   {}: {}",
                        i18n::label(Label::Suggestion, language),
                        i18n::translate_all(suggestion.colors(), language).bright_white()
                    );
                }
            }

            let prompt = format!("Row {}/{}", game.active_row() + 1, config.rows);
            let input = get_user_input(&prompt)?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    game.abandon();
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                "" => continue,
                _ => {}
            }

            let colors = match parse_row(&input, game.poll()) {
                Ok(colors) => colors,
                Err(message) => {
                    println!("❌ {message}\n");
                    continue;
                }
            };

            let row = game.active_row();
            let submitted = game.fill_row(&colors).and_then(|()| game.submit_guess());
            match submitted {
                Ok(feedback) => {
                    let guess = *game.rows()[row].guess();
                    print_feedback_row(row, &guess, feedback);
                }
                Err(e) => println!("❌ {e}\n"),
            }
        }

        let outcome = match record_outcome(store, &game) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("❌ {e}");
                RecordedOutcome::Nothing
            }
        };
        print_game_over(&game, outcome, language);
        println!();

        match get_user_input(i18n::label(Label::PlayAgain, language))?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" | "ja" | "j" | "oui" | "o" => {
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
