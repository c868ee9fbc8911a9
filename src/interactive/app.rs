//! TUI application state and logic

use crate::commands::{StatsReport, collect_stats};
use crate::core::{Code, Color};
use crate::error::GameError;
use crate::game::{GameConfig, GameState, RecordedOutcome, Status, record_outcome};
use crate::i18n::{self, Label, Language};
use crate::output::formatters::format_duration;
use crate::solver::Helper;
use crate::storage::KeyValueStore;
use crate::storage::records::{load_settings, save_settings};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

const MAX_MESSAGES: usize = 5;
const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state
pub struct App<S: KeyValueStore> {
    pub store: S,
    pub config: GameConfig,
    pub game: GameState,
    pub language: Language,
    pub helper: Option<Helper>,
    pub hint: Option<HintInfo>,
    pub messages: Vec<Message>,
    pub stats: StatsReport,
    pub last_outcome: Option<RecordedOutcome>,
    pub should_quit: bool,
    rng: StdRng,
}

/// What the helper currently knows
#[derive(Debug, Clone)]
pub struct HintInfo {
    pub remaining: usize,
    pub suggestion: Option<Code>,
    /// Poll colors no remaining code uses
    pub ruled_out: Vec<Color>,
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

impl<S: KeyValueStore> App<S> {
    /// Start a game with the settings stored in `store`
    ///
    /// # Errors
    /// Returns an error if the stored settings cannot start a game.
    pub fn new(store: S, language: Language) -> Result<Self, GameError> {
        Self::with_rng(store, language, StdRng::from_os_rng())
    }

    /// [`App::new`] with a caller-provided random source
    ///
    /// # Errors
    /// See [`App::new`].
    pub fn with_rng(store: S, language: Language, mut rng: StdRng) -> Result<Self, GameError> {
        let config = load_settings(&store);
        let game = GameState::new(config, &mut rng)?;
        let stats = collect_stats(&store, &config);

        let mut app = Self {
            store,
            config,
            game,
            language,
            helper: None,
            hint: None,
            messages: Vec::new(),
            stats,
            last_outcome: None,
            should_quit: false,
            rng,
        };
        app.setup_helper();
        app.add_message(
            "Pick colors with the number keys, Enter to check the row.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    fn setup_helper(&mut self) {
        self.helper = self
            .config
            .helper_enabled
            .then(|| Helper::for_game(&self.game));
        self.refresh_hint();
    }

    fn refresh_hint(&mut self) {
        self.hint = self.helper.as_ref().map(|helper| {
            let history = self.game.history();
            HintInfo {
                remaining: helper.count_candidates(&history),
                suggestion: helper.suggest(&history, &mut self.rng),
                ruled_out: helper.ruled_out(self.game.poll(), &history),
            }
        });
    }

    /// Replace the current game with a fresh one
    pub fn new_game(&mut self) {
        self.game.abandon();
        match GameState::new(self.config, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.last_outcome = None;
                self.stats = collect_stats(&self.store, &self.config);
                self.setup_helper();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Put the `index`-th poll color (0-based) into the current slot
    pub fn pick_color(&mut self, index: usize) {
        let Some(color) = self.game.poll().get(index) else {
            return;
        };
        if let Err(e) = self.game.assign_color(color) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn move_selection(&mut self, forward: bool) {
        if let Err(e) = self.game.move_selection(forward) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn clear_slot(&mut self) {
        // Nothing to clear is not worth a message
        let _ = self.game.clear_slot();
    }

    /// Fill the active row with the helper's suggestion
    pub fn apply_suggestion(&mut self) {
        let Some(code) = self.hint.as_ref().and_then(|hint| hint.suggestion) else {
            return;
        };
        if let Err(e) = self.game.fill_row(code.colors()) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    /// Check the active row
    pub fn submit(&mut self) {
        match self.game.submit_guess() {
            Ok(feedback) => {
                if self.game.status().is_over() {
                    self.finish_game();
                } else {
                    self.add_message(&feedback.to_emoji(), MessageStyle::Info);
                    self.refresh_hint();
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        let language = self.language;
        match self.game.status() {
            Status::Won => self.add_message(i18n::label(Label::Won, language), MessageStyle::Success),
            Status::Lost => self.add_message(i18n::label(Label::Lost, language), MessageStyle::Error),
            Status::InProgress => return,
        }
        if let Some(solution) = self.game.solution() {
            let text = format!(
                "{}: {}",
                i18n::label(Label::SolutionWas, language),
                i18n::translate_all(solution.colors(), language)
            );
            self.add_message(&text, MessageStyle::Info);
        }

        match record_outcome(&mut self.store, &self.game) {
            Ok(outcome) => {
                if let Some(text) = self.describe_outcome(outcome) {
                    self.add_message(&text, MessageStyle::Success);
                }
                self.last_outcome = Some(outcome);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.stats = collect_stats(&self.store, &self.config);
        self.hint = None;
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    fn describe_outcome(&self, outcome: RecordedOutcome) -> Option<String> {
        let language = self.language;
        match outcome {
            RecordedOutcome::Nothing | RecordedOutcome::NoPoints => None,
            RecordedOutcome::NewBestTime { seconds, .. } => Some(format!(
                "{}: {}",
                i18n::label(Label::NewBestTime, language),
                format_duration(seconds)
            )),
            RecordedOutcome::SlowerThanBest { seconds, best } => Some(format!(
                "{} | {}: {}",
                format_duration(seconds),
                i18n::label(Label::BestTime, language),
                format_duration(best)
            )),
            RecordedOutcome::Scored { score, record } => Some(format!(
                "+{score} | {}: {}",
                i18n::label(Label::Score, language),
                record.total_score
            )),
        }
    }

    /// Switch to the next mode and start over, so a running clock cannot be
    /// carried into another mode
    pub fn cycle_mode(&mut self) {
        let config = GameConfig {
            mode: self.config.mode.next(),
            ..self.config
        };
        if self.save_config(config) {
            self.add_message(&format!("Mode: {}", config.mode), MessageStyle::Info);
            self.new_game();
        }
    }

    pub fn toggle_helper(&mut self) {
        let config = GameConfig {
            helper_enabled: !self.config.helper_enabled,
            ..self.config
        };
        if self.save_config(config) {
            if self.game.status().is_over() {
                self.helper = None;
            } else {
                self.setup_helper();
            }
            let state = if config.helper_enabled { "on" } else { "off" };
            self.add_message(&format!("Helper {state}"), MessageStyle::Info);
        }
    }

    fn save_config(&mut self, config: GameConfig) -> bool {
        match save_settings(&mut self.store, &config) {
            Ok(()) => {
                self.config = config;
                true
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                false
            }
        }
    }

    /// Advance the stopwatch
    pub fn on_tick(&mut self) {
        self.game.tick();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('m') => self.cycle_mode(),
            KeyCode::Char('h') => self.toggle_helper(),
            KeyCode::Char(c @ '1'..='9') => self.pick_color(c as usize - '1' as usize),
            KeyCode::Char('0') => self.pick_color(9),
            KeyCode::Left => self.move_selection(false),
            KeyCode::Right => self.move_selection(true),
            KeyCode::Backspace | KeyCode::Delete => self.clear_slot(),
            KeyCode::Tab => self.apply_suggestion(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.on_tick();

        if app.should_quit {
            app.game.abandon();
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Mode;
    use crate::storage::MemoryStore;

    fn app() -> App<MemoryStore> {
        App::with_rng(MemoryStore::new(), Language::En, StdRng::seed_from_u64(42)).unwrap()
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_row(app: &mut App<MemoryStore>, keys: &str) {
        for key in keys.chars() {
            press(app, KeyCode::Char(key));
        }
        press(app, KeyCode::Enter);
    }

    /// App over a known puzzle: poll keys 1-5 are red, blue, green, yellow,
    /// purple and the solution is typed as "23452"
    fn known_app(config: GameConfig) -> App<MemoryStore> {
        use crate::core::{Color::*, Poll};

        let mut store = MemoryStore::new();
        save_settings(&mut store, &config).unwrap();
        let mut app = App::with_rng(store, Language::En, StdRng::seed_from_u64(5)).unwrap();
        app.game = GameState::with_puzzle(
            config,
            Poll::new([Red, Blue, Green, Yellow, Purple]),
            Code::new([Blue, Green, Yellow, Purple, Blue]),
        )
        .unwrap();
        app.setup_helper();
        app
    }

    fn solution_keys(app: &App<MemoryStore>, code: &Code) -> Vec<KeyCode> {
        code.colors()
            .iter()
            .map(|&color| {
                let index = app
                    .game
                    .poll()
                    .colors()
                    .iter()
                    .position(|&c| c == color)
                    .unwrap();
                KeyCode::Char(if index == 9 {
                    '0'
                } else {
                    char::from(b'1' + u8::try_from(index).unwrap())
                })
            })
            .collect()
    }

    #[test]
    fn starts_with_stored_settings() {
        let mut store = MemoryStore::new();
        let config = GameConfig {
            rows: 4,
            ..GameConfig::default()
        };
        save_settings(&mut store, &config).unwrap();

        let app = App::with_rng(store, Language::De, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(app.game.rows().len(), 4);
        assert!(app.hint.is_none());
    }

    #[test]
    fn number_keys_fill_slots_in_order() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));

        let first = app.game.poll().get(0);
        let second = app.game.poll().get(1);
        assert_eq!(app.game.current_guess().slot(0), first);
        assert_eq!(app.game.current_guess().slot(1), second);
        assert_eq!(app.game.selected_slot(), Some(2));
    }

    #[test]
    fn backspace_clears_last_filled() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Backspace);

        assert!(app.game.current_guess().slot(0).is_some());
        assert!(app.game.current_guess().slot(1).is_none());
    }

    #[test]
    fn incomplete_row_reports_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.active_row(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn full_row_advances() {
        let mut app = known_app(GameConfig::default());
        type_row(&mut app, "11111");

        assert_eq!(app.game.status(), Status::InProgress);
        assert_eq!(app.game.active_row(), 1);
        assert!(app.game.current_guess().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "⬜⬜⬜⬜⬜");
        assert_eq!(last.style, MessageStyle::Info);
    }

    #[test]
    fn hint_rules_out_absent_colors() {
        let mut app = known_app(GameConfig {
            helper_enabled: true,
            ..GameConfig::default()
        });
        assert!(app.hint.as_ref().unwrap().ruled_out.is_empty());

        type_row(&mut app, "11111");
        let hint = app.hint.as_ref().unwrap();
        assert_eq!(hint.ruled_out, vec![crate::core::Color::Red]);
        assert_eq!(hint.remaining, 4usize.pow(5));
    }

    #[test]
    fn mode_key_saves_and_restarts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('m'));

        assert_eq!(app.config.mode, Mode::Stopwatch);
        assert_eq!(load_settings(&app.store).mode, Mode::Stopwatch);
        assert!(app.game.current_guess().is_empty());
        assert!(app.game.stopwatch().is_running());
    }

    #[test]
    fn helper_toggle_shows_hint() {
        let mut app = app();
        press(&mut app, KeyCode::Char('h'));

        let hint = app.hint.as_ref().unwrap();
        assert!(hint.remaining > 0);
        assert!(hint.suggestion.is_some());
        assert!(load_settings(&app.store).helper_enabled);

        press(&mut app, KeyCode::Tab);
        assert!(app.game.current_guess().is_complete());
    }

    #[test]
    fn winning_in_score_mode_records_points() {
        let mut app = known_app(GameConfig {
            mode: Mode::Score,
            ..GameConfig::default()
        });

        type_row(&mut app, "11111");
        type_row(&mut app, "23452");

        assert_eq!(app.game.status(), Status::Won);
        let expected = crate::game::score_for_win(5, 1);
        assert_eq!(expected, 4);
        assert_eq!(app.stats.score.total_score, u64::from(expected));
        assert_eq!(app.stats.score.games_played, 1);
        assert_eq!(
            app.last_outcome,
            Some(RecordedOutcome::Scored {
                score: expected,
                record: app.stats.score
            })
        );
        assert!(app.hint.is_none());
    }

    #[test]
    fn typing_the_solution_wins() {
        let mut app = app();
        let solution = {
            // Play the solution by reading it back from a finished copy
            let mut probe = app.game.clone();
            while !probe.status().is_over() {
                probe
                    .fill_row(&[probe.poll().colors()[0]; 5])
                    .unwrap();
                probe.submit_guess().unwrap();
            }
            *probe.solution().unwrap()
        };

        for key in solution_keys(&app, &solution) {
            press(&mut app, key);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.status(), Status::Won);
        assert_eq!(app.last_outcome, Some(RecordedOutcome::Nothing));
    }

    #[test]
    fn keys_after_game_over_are_rejected() {
        let mut app = app();
        while !app.game.status().is_over() {
            let color = app.game.poll().colors()[0];
            app.game.fill_row(&[color; 5]).unwrap();
            press(&mut app, KeyCode::Enter);
        }

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game.status(), Status::InProgress);
        assert_eq!(app.last_outcome, None);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "19");
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
