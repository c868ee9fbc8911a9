//! Formatting utilities for terminal output

use crate::core::{Color, Feedback, Guess};
use colored::{ColoredString, Colorize};

const FILLED: &str = "●";
const EMPTY: &str = "○";
const DISTRIBUTION_WIDTH: usize = 40;

/// A round swatch in the color's own RGB
#[must_use]
pub fn color_swatch(color: Color) -> ColoredString {
    let (r, g, b) = color.rgb();
    FILLED.truecolor(r, g, b)
}

/// Swatches for a whole row, unset slots as hollow circles
#[must_use]
pub fn guess_swatches(guess: &Guess) -> String {
    guess
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(color) => color_swatch(*color).to_string(),
            None => EMPTY.bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback.to_emoji()
}

/// Seconds as `mm:ss`, hours folded into minutes
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar and percentage for `count` out of `total` games, full width at 100%
#[must_use]
pub fn distribution_bar(count: usize, total: usize) -> (String, f64) {
    let pct = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };
    (create_progress_bar(pct, 100.0, DISTRIBUTION_WIDTH), pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Color::*};

    #[test]
    fn feedback_to_emoji_mixed() {
        let solution = Code::new([Red, Blue, Green, Yellow, Purple]);
        let guess = Code::new([Red, Green, Orange, Orange, Orange]);
        let emoji = feedback_to_emoji(Feedback::evaluate(&guess, &solution));
        assert_eq!(emoji, "🟩🟨⬜⬜⬜");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(75), "01:15");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn swatches_mark_empty_slots() {
        colored::control::set_override(false);
        let guess = Guess::from(Code::new([Red; 5]));
        assert_eq!(guess_swatches(&guess), "● ● ● ● ●");
        assert_eq!(guess_swatches(&Guess::default()), "○ ○ ○ ○ ○");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn distribution_bar_scales_with_share() {
        let (bar, pct) = distribution_bar(1, 4);
        assert!((pct - 25.0).abs() < f64::EPSILON);
        assert_eq!(bar, format!("{}{}", "█".repeat(10), "░".repeat(30)));

        let (bar, _) = distribution_bar(7, 7);
        assert_eq!(bar, "█".repeat(40));
    }

    #[test]
    fn distribution_bar_without_games() {
        let (bar, pct) = distribution_bar(0, 0);
        assert!(pct.abs() < f64::EPSILON);
        assert_eq!(bar, "░".repeat(40));
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
