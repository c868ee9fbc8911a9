//! Row-by-row game state machine
//!
//! `InProgress` advances one row per checked guess and ends exactly once in
//! `Won` or `Lost`. A finished game rejects every mutation; starting over
//! means building a new [`GameState`].

use super::config::{GameConfig, Mode};
use super::stopwatch::Stopwatch;
use crate::core::{COLS, Code, Color, Feedback, Guess, Poll, generator};
use crate::error::GameError;
use rand::Rng;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One row of the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    guess: Guess,
    feedback: Option<Feedback>,
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Guess {
        &self.guess
    }

    /// Present once the row has been checked
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    poll: Poll,
    solution: Code,
    rows: Vec<Row>,
    active_row: usize,
    selected_slot: Option<usize>,
    status: Status,
    stopwatch: Stopwatch,
}

impl GameState {
    /// Start a game with a random poll and solution
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if the settings are not playable.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let (poll, solution) =
            generator::new_puzzle(config.color_poll_length, config.allow_duplicates, rng)?;
        Self::with_puzzle(config, poll, solution)
    }

    /// Start a game with a known poll and solution
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` for unplayable settings and
    /// `GameError::ColorNotInPoll` if the solution uses a color the poll lacks.
    pub fn with_puzzle(config: GameConfig, poll: Poll, solution: Code) -> Result<Self, GameError> {
        config.validate()?;
        if let Some(&missing) = solution.colors().iter().find(|&&c| !poll.contains(c)) {
            return Err(GameError::ColorNotInPoll(missing));
        }

        let mut stopwatch = Stopwatch::default();
        if config.mode == Mode::Stopwatch {
            stopwatch.start();
        }

        Ok(Self {
            config,
            poll,
            solution,
            rows: vec![Row::default(); config.rows],
            active_row: 0,
            selected_slot: None,
            status: Status::InProgress,
            stopwatch,
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn poll(&self) -> &Poll {
        &self.poll
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    #[inline]
    #[must_use]
    pub const fn selected_slot(&self) -> Option<usize> {
        self.selected_slot
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// The row being edited
    #[must_use]
    pub fn current_guess(&self) -> &Guess {
        &self.rows[self.active_row].guess
    }

    /// The solution, revealed only once the game is over
    #[must_use]
    pub fn solution(&self) -> Option<&Code> {
        self.status.is_over().then_some(&self.solution)
    }

    /// Every checked row as (guess, feedback), oldest first
    #[must_use]
    pub fn history(&self) -> Vec<(Code, Feedback)> {
        self.rows
            .iter()
            .filter_map(|row| {
                let feedback = row.feedback?;
                row.guess.to_code().ok().map(|code| (code, feedback))
            })
            .collect()
    }

    /// Advance the stopwatch; returns seconds elapsed
    pub fn tick(&mut self) -> u64 {
        self.stopwatch.tick().as_secs()
    }

    /// Stop the stopwatch of a game that is being replaced
    pub fn abandon(&mut self) {
        self.stopwatch.stop();
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn ensure_active_row(&self, row: usize) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if row == self.active_row {
            Ok(())
        } else {
            Err(GameError::InactiveRow {
                row,
                active: self.active_row,
            })
        }
    }

    /// Select the slot the next color goes into
    ///
    /// # Errors
    /// `GameOver` once finished, `InactiveRow` for any row but the active one,
    /// `SlotOutOfRange` past the last slot.
    pub fn select_slot(&mut self, row: usize, slot: usize) -> Result<(), GameError> {
        self.ensure_active_row(row)?;
        if slot >= COLS {
            return Err(GameError::SlotOutOfRange(slot));
        }
        self.selected_slot = Some(slot);
        Ok(())
    }

    /// Move the selection left or right within the active row, wrapping around
    ///
    /// # Errors
    /// `GameOver` once finished.
    pub fn move_selection(&mut self, forward: bool) -> Result<usize, GameError> {
        self.ensure_in_progress()?;
        let slot = match (self.selected_slot, forward) {
            (None, true) => 0,
            (None, false) => COLS - 1,
            (Some(slot), true) => (slot + 1) % COLS,
            (Some(slot), false) => (slot + COLS - 1) % COLS,
        };
        self.selected_slot = Some(slot);
        Ok(slot)
    }

    /// Put `color` into the selected slot of the active row
    ///
    /// With no selection the first empty slot is used. Afterwards the
    /// selection moves to the next empty slot, if any. Returns the slot filled.
    ///
    /// # Errors
    /// `GameOver` once finished, `ColorNotInPoll` for colors not offered in
    /// this game, `NoSlotSelected` when nothing is selected and the row is full.
    pub fn assign_color(&mut self, color: Color) -> Result<usize, GameError> {
        self.ensure_in_progress()?;
        if !self.poll.contains(color) {
            return Err(GameError::ColorNotInPoll(color));
        }

        let guess = &mut self.rows[self.active_row].guess;
        let slot = self
            .selected_slot
            .or_else(|| guess.first_unset())
            .ok_or(GameError::NoSlotSelected)?;
        guess.set(slot, Some(color))?;
        self.selected_slot = guess.next_unset_after(slot);

        Ok(slot)
    }

    /// Empty the selected slot, or the last filled one when nothing is selected
    ///
    /// # Errors
    /// `GameOver` once finished, `NoSlotSelected` if there is nothing to clear.
    pub fn clear_slot(&mut self) -> Result<usize, GameError> {
        self.ensure_in_progress()?;
        let guess = &mut self.rows[self.active_row].guess;
        let slot = self
            .selected_slot
            .filter(|&slot| guess.slot(slot).is_some())
            .or_else(|| guess.last_set())
            .ok_or(GameError::NoSlotSelected)?;
        guess.set(slot, None)?;
        self.selected_slot = Some(slot);
        Ok(slot)
    }

    /// Replace the whole active row
    ///
    /// # Errors
    /// `GameOver` once finished, `CodeLength` unless exactly [`COLS`] colors
    /// are given, `ColorNotInPoll` for colors not offered in this game. The
    /// row is left untouched on error.
    pub fn fill_row(&mut self, colors: &[Color]) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let code = Code::from_slice(colors)?;
        if let Some(&missing) = code.colors().iter().find(|&&c| !self.poll.contains(c)) {
            return Err(GameError::ColorNotInPoll(missing));
        }
        self.rows[self.active_row].guess = Guess::from(code);
        self.selected_slot = None;
        Ok(())
    }

    /// Check the active row against the solution
    ///
    /// Records the feedback, then ends the game (`Won` on a perfect match,
    /// `Lost` on the last row) or moves to the next row.
    ///
    /// # Errors
    /// `GameOver` once finished, `IncompleteGuess` while slots are empty; the
    /// state is unchanged on error.
    pub fn submit_guess(&mut self) -> Result<Feedback, GameError> {
        self.submit_guess_at(Instant::now())
    }

    /// [`GameState::submit_guess`] with an explicit clock reading
    ///
    /// # Errors
    /// See [`GameState::submit_guess`].
    pub fn submit_guess_at(&mut self, now: Instant) -> Result<Feedback, GameError> {
        self.ensure_in_progress()?;
        let row = &mut self.rows[self.active_row];
        let guess = row.guess.to_code()?;
        let feedback = Feedback::evaluate(&guess, &self.solution);
        row.feedback = Some(feedback);
        self.selected_slot = None;

        if feedback.is_perfect() {
            self.finish(Status::Won, now);
        } else if self.active_row + 1 == self.rows.len() {
            self.finish(Status::Lost, now);
        } else {
            self.active_row += 1;
        }

        Ok(feedback)
    }

    fn finish(&mut self, status: Status, now: Instant) {
        self.status = status;
        self.stopwatch.stop_at(now);
    }

    /// Restart the stopwatch from `now`, pinning the start in stopwatch mode
    #[cfg(test)]
    pub(crate) fn restart_stopwatch_at(&mut self, now: Instant) {
        if self.config.mode == Mode::Stopwatch && !self.status.is_over() {
            self.stopwatch.start_at(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use Color::{Blue, Green, Purple, Red, Yellow};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    const SOLUTION: Code = Code::new([Red, Red, Blue, Green, Yellow]);

    fn game(rows: usize, mode: Mode) -> GameState {
        let config = GameConfig {
            rows,
            mode,
            ..GameConfig::default()
        };
        let poll = Poll::new([Red, Blue, Green, Yellow, Purple]);
        GameState::with_puzzle(config, poll, SOLUTION).unwrap()
    }

    fn play(game: &mut GameState, colors: [Color; COLS]) -> Result<Feedback, GameError> {
        game.fill_row(&colors)?;
        game.submit_guess()
    }

    #[test]
    fn new_game_starts_empty() {
        let game = game(4, Mode::Relax);
        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.active_row(), 0);
        assert_eq!(game.rows().len(), 4);
        assert!(game.rows().iter().all(|r| r.guess().is_empty() && r.feedback().is_none()));
        assert_eq!(game.selected_slot(), None);
        assert!(game.solution().is_none());
    }

    #[test]
    fn random_game_respects_config() {
        let config = GameConfig {
            color_poll_length: 7,
            allow_duplicates: false,
            ..GameConfig::default()
        };
        let game = GameState::new(config, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(game.poll().len(), 7);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            color_poll_length: 4,
            allow_duplicates: false,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameState::new(config, &mut StdRng::seed_from_u64(1)),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn solution_must_fit_poll() {
        let poll = Poll::new([Red, Blue]);
        assert_eq!(
            GameState::with_puzzle(GameConfig::default(), poll, SOLUTION).unwrap_err(),
            GameError::ColorNotInPoll(Green)
        );
    }

    #[test]
    fn incomplete_guess_leaves_state_untouched() {
        let mut game = game(3, Mode::Relax);
        game.assign_color(Red).unwrap();
        let before = *game.current_guess();

        assert_eq!(
            game.submit_guess(),
            Err(GameError::IncompleteGuess { unset: 4 })
        );
        assert_eq!(game.active_row(), 0);
        assert_eq!(game.current_guess(), &before);
        assert!(game.rows()[0].feedback().is_none());
    }

    #[test]
    fn wrong_guess_advances_row_and_resets_selection() {
        let mut game = game(3, Mode::Relax);
        game.select_slot(0, 2).unwrap();
        let feedback = play(&mut game, [Red, Blue, Red, Red, Red]).unwrap();

        assert_eq!(
            feedback.marks(),
            &[
                Mark::Correct,
                Mark::WrongPosition,
                Mark::WrongPosition,
                Mark::WrongColor,
                Mark::WrongColor
            ]
        );
        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.active_row(), 1);
        assert_eq!(game.selected_slot(), None);
        assert!(game.current_guess().is_empty());
        assert_eq!(game.rows()[0].feedback(), Some(feedback));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut game = game(3, Mode::Relax);
        let feedback = play(&mut game, *SOLUTION.colors()).unwrap();

        assert!(feedback.is_perfect());
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.active_row(), 0);
        assert_eq!(game.solution(), Some(&SOLUTION));
    }

    #[test]
    fn winning_on_last_row_is_a_win() {
        let mut game = game(2, Mode::Relax);
        play(&mut game, [Blue; COLS]).unwrap();
        play(&mut game, *SOLUTION.colors()).unwrap();

        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.active_row(), 1);
    }

    #[test]
    fn missing_on_last_row_is_a_loss() {
        let mut game = game(2, Mode::Relax);
        play(&mut game, [Blue; COLS]).unwrap();
        play(&mut game, [Purple; COLS]).unwrap();

        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.solution(), Some(&SOLUTION));
    }

    #[test]
    fn single_row_game_can_be_lost_immediately() {
        let mut game = game(1, Mode::Relax);
        play(&mut game, [Green; COLS]).unwrap();
        assert_eq!(game.status(), Status::Lost);
    }

    #[test]
    fn finished_game_rejects_mutation() {
        let mut game = game(1, Mode::Relax);
        play(&mut game, *SOLUTION.colors()).unwrap();

        assert_eq!(game.assign_color(Red), Err(GameError::GameOver));
        assert_eq!(game.select_slot(0, 0), Err(GameError::GameOver));
        assert_eq!(game.clear_slot(), Err(GameError::GameOver));
        assert_eq!(game.fill_row(SOLUTION.colors()), Err(GameError::GameOver));
        assert_eq!(game.submit_guess(), Err(GameError::GameOver));
        assert_eq!(game.move_selection(true), Err(GameError::GameOver));
    }

    #[test]
    fn only_active_row_is_selectable() {
        let mut game = game(3, Mode::Relax);
        play(&mut game, [Blue; COLS]).unwrap();

        assert_eq!(
            game.select_slot(0, 1),
            Err(GameError::InactiveRow { row: 0, active: 1 })
        );
        assert_eq!(
            game.select_slot(2, 1),
            Err(GameError::InactiveRow { row: 2, active: 1 })
        );
        assert!(game.select_slot(1, 4).is_ok());
        assert_eq!(game.select_slot(1, 5), Err(GameError::SlotOutOfRange(5)));
    }

    #[test]
    fn assign_follows_selection_then_next_empty_slot() {
        let mut game = game(3, Mode::Relax);
        game.select_slot(0, 3).unwrap();

        assert_eq!(game.assign_color(Red), Ok(3));
        assert_eq!(game.selected_slot(), Some(4));
        assert_eq!(game.assign_color(Blue), Ok(4));
        assert_eq!(game.selected_slot(), Some(0));
        assert_eq!(game.current_guess().slot(3), Some(Red));
        assert_eq!(game.current_guess().slot(4), Some(Blue));
    }

    #[test]
    fn assign_without_selection_fills_left_to_right() {
        let mut game = game(3, Mode::Relax);
        for (expected, color) in [Red, Blue, Green, Yellow, Purple].into_iter().enumerate() {
            assert_eq!(game.assign_color(color), Ok(expected));
        }
        assert!(game.current_guess().is_complete());
        assert_eq!(game.selected_slot(), None);
        assert_eq!(game.assign_color(Red), Err(GameError::NoSlotSelected));
    }

    #[test]
    fn assign_rejects_colors_outside_poll() {
        let mut game = game(3, Mode::Relax);
        assert_eq!(
            game.assign_color(Color::White),
            Err(GameError::ColorNotInPoll(Color::White))
        );
        assert!(game.current_guess().is_empty());
    }

    #[test]
    fn clear_slot_prefers_selection() {
        let mut game = game(3, Mode::Relax);
        game.fill_row(&[Red, Blue, Green, Yellow, Purple]).unwrap();

        assert_eq!(game.clear_slot(), Ok(4));
        game.select_slot(0, 1).unwrap();
        assert_eq!(game.clear_slot(), Ok(1));
        assert_eq!(game.current_guess().unset_count(), 2);

        game.select_slot(0, 4).unwrap();
        assert_eq!(game.clear_slot(), Ok(3));
    }

    #[test]
    fn move_selection_wraps() {
        let mut game = game(3, Mode::Relax);
        assert_eq!(game.move_selection(false), Ok(COLS - 1));
        assert_eq!(game.move_selection(true), Ok(0));
        assert_eq!(game.move_selection(true), Ok(1));
    }

    #[test]
    fn fill_row_validates_before_writing() {
        let mut game = game(3, Mode::Relax);
        assert_eq!(game.fill_row(&[Red, Blue]), Err(GameError::CodeLength(2)));
        assert_eq!(
            game.fill_row(&[Red, Blue, Green, Yellow, Color::Cyan]),
            Err(GameError::ColorNotInPoll(Color::Cyan))
        );
        assert!(game.current_guess().is_empty());
    }

    #[test]
    fn stopwatch_runs_only_in_stopwatch_mode() {
        assert!(!game(3, Mode::Relax).stopwatch().is_running());
        assert!(!game(3, Mode::Score).stopwatch().is_running());
        assert!(game(3, Mode::Stopwatch).stopwatch().is_running());
    }

    #[test]
    fn stopwatch_stops_on_win() {
        let mut game = game(3, Mode::Stopwatch);
        let t0 = Instant::now();
        game.restart_stopwatch_at(t0);
        game.fill_row(SOLUTION.colors()).unwrap();
        game.submit_guess_at(t0 + Duration::from_secs(42)).unwrap();

        assert!(!game.stopwatch().is_running());
        assert_eq!(game.stopwatch().elapsed_secs(), 42);
        assert_eq!(game.tick(), 42);
    }

    #[test]
    fn stopwatch_stops_on_loss_and_abandon() {
        let mut lost = game(1, Mode::Stopwatch);
        play(&mut lost, [Blue; COLS]).unwrap();
        assert!(!lost.stopwatch().is_running());

        let mut abandoned = game(3, Mode::Stopwatch);
        abandoned.abandon();
        assert!(!abandoned.stopwatch().is_running());
    }
}
