//! Random solutions and polls
//!
//! All functions take the random source as a parameter so games can be
//! replayed from a seeded RNG.

use super::code::Code;
use super::color::{COLS, Color, Poll};
use crate::error::GameError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `length` colors uniformly from `poll`
///
/// Without duplicates, a draw repeating an already placed color is rejected
/// and redrawn.
///
/// # Errors
/// Returns `GameError::InvalidConfig` if the poll is empty, or if duplicates
/// are disallowed and the poll has fewer than `length` colors (the draw could
/// never finish).
pub fn draw_colors<R: Rng>(
    poll: &Poll,
    length: usize,
    allow_duplicates: bool,
    rng: &mut R,
) -> Result<Vec<Color>, GameError> {
    if poll.is_empty() {
        return Err(GameError::InvalidConfig("the color poll is empty".to_string()));
    }
    if !allow_duplicates && poll.len() < length {
        return Err(GameError::InvalidConfig(format!(
            "{length} distinct colors needed, only {} available",
            poll.len()
        )));
    }

    let colors = poll.colors();
    let mut drawn = Vec::with_capacity(length);
    while drawn.len() < length {
        let color = colors[rng.random_range(0..colors.len())];
        if !allow_duplicates && drawn.contains(&color) {
            continue;
        }
        drawn.push(color);
    }

    Ok(drawn)
}

/// Draw a solution of [`COLS`] colors from `poll`
///
/// # Errors
/// See [`draw_colors`].
pub fn generate_solution<R: Rng>(
    poll: &Poll,
    allow_duplicates: bool,
    rng: &mut R,
) -> Result<Code, GameError> {
    let colors = draw_colors(poll, COLS, allow_duplicates, rng)?;
    Code::from_slice(&colors)
}

/// Build a poll that contains every color of `seed`
///
/// Random palette colors are added until the poll holds `poll_length` colors,
/// or the whole palette if that is smaller. A seed with more distinct colors
/// than `poll_length` is kept whole.
#[must_use]
pub fn build_poll<R: Rng>(
    palette: &[Color],
    seed: &[Color],
    poll_length: usize,
    rng: &mut R,
) -> Poll {
    let mut colors: Vec<Color> = Vec::with_capacity(poll_length);
    for &color in seed {
        if !colors.contains(&color) {
            colors.push(color);
        }
    }

    let mut extra: Vec<Color> = palette
        .iter()
        .copied()
        .filter(|color| !colors.contains(color))
        .collect();
    extra.shuffle(rng);

    let target = poll_length.min(colors.len() + extra.len());
    let missing = target.saturating_sub(colors.len());
    colors.extend(extra.into_iter().take(missing));

    Poll::new(colors)
}

/// Set up a new game: the poll offered to the player and the hidden solution
///
/// A working pool of `poll_length` palette colors is drawn first, the
/// solution is drawn from it, and the final poll is grown from the solution's
/// colors.
///
/// # Errors
/// Returns `GameError::InvalidConfig` when no solution can be drawn.
pub fn new_puzzle<R: Rng>(
    poll_length: usize,
    allow_duplicates: bool,
    rng: &mut R,
) -> Result<(Poll, Code), GameError> {
    let pool = build_poll(&Color::PALETTE, &[], poll_length, rng);
    let solution = generate_solution(&pool, allow_duplicates, rng)?;
    let poll = build_poll(
        &Color::PALETTE,
        &solution.distinct_colors(),
        poll_length,
        rng,
    );
    Ok((poll, solution))
}
