//! Settings command
//!
//! Applies changes to the persisted [`GameConfig`]. Invalid combinations are
//! rejected and the stored settings stay as they were.

use crate::error::GameError;
use crate::game::{GameConfig, Mode};
use crate::storage::KeyValueStore;
use crate::storage::records::{load_settings, save_settings};

/// Requested changes; `None` keeps the stored value
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsUpdate {
    pub rows: Option<usize>,
    pub color_poll_length: Option<usize>,
    pub allow_duplicates: Option<bool>,
    pub mode: Option<Mode>,
    pub helper_enabled: Option<bool>,
}

impl SettingsUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_none()
            && self.color_poll_length.is_none()
            && self.allow_duplicates.is_none()
            && self.mode.is_none()
            && self.helper_enabled.is_none()
    }

    #[must_use]
    pub fn apply_to(&self, config: GameConfig) -> GameConfig {
        GameConfig {
            rows: self.rows.unwrap_or(config.rows),
            color_poll_length: self.color_poll_length.unwrap_or(config.color_poll_length),
            allow_duplicates: self.allow_duplicates.unwrap_or(config.allow_duplicates),
            mode: self.mode.unwrap_or(config.mode),
            helper_enabled: self.helper_enabled.unwrap_or(config.helper_enabled),
        }
    }
}

/// Apply `update` to the stored settings and return the result
///
/// An empty update just returns the current settings.
///
/// # Errors
/// `InvalidConfig` if the result is not playable, `Storage` if it cannot be
/// written.
pub fn update_settings<S: KeyValueStore + ?Sized>(
    store: &mut S,
    update: &SettingsUpdate,
) -> Result<GameConfig, GameError> {
    let current = load_settings(store);
    if update.is_empty() {
        return Ok(current);
    }

    let updated = update.apply_to(current);
    save_settings(store, &updated)?;
    Ok(updated)
}
