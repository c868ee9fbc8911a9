//! Settings, best times and scores on top of a [`KeyValueStore`]
//!
//! Keys:
//! - `settings`: the [`GameConfig`]
//! - `bestTime_{fingerprint}`: best winning time in seconds
//! - `score_{fingerprint}`: a [`ScoreRecord`]

use super::KeyValueStore;
use crate::error::GameError;
use crate::game::{Fingerprint, GameConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SETTINGS_KEY: &str = "settings";

#[must_use]
pub fn best_time_key(fingerprint: Fingerprint) -> String {
    format!("bestTime_{fingerprint}")
}

#[must_use]
pub fn score_key(fingerprint: Fingerprint) -> String {
    format!("score_{fingerprint}")
}

/// Accumulated score-mode results for one fingerprint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub total_score: u64,
    pub games_played: u64,
}

impl ScoreRecord {
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.games_played > 0).then(|| self.total_score as f64 / self.games_played as f64)
    }
}

/// Decode the value under `key`
///
/// `Ok(None)` when absent, `MalformedPersistedState` when it does not decode.
fn read_value<T, S>(store: &S, key: &str) -> Result<Option<T>, GameError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|_| GameError::MalformedPersistedState {
                key: key.to_string(),
            })
        })
        .transpose()
}

fn write_value<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), GameError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| GameError::Storage(e.to_string()))?;
    store
        .set(key, raw)
        .map_err(|e| GameError::Storage(e.to_string()))
}

/// Stored settings, or the defaults if they are missing, malformed or invalid
pub fn load_settings<S: KeyValueStore + ?Sized>(store: &S) -> GameConfig {
    match read_value::<GameConfig, _>(store, SETTINGS_KEY) {
        Ok(Some(config)) if config.validate().is_ok() => config,
        _ => GameConfig::default(),
    }
}

/// Validate and store settings; invalid settings leave the stored ones intact
///
/// # Errors
/// `InvalidConfig` for unplayable settings, `Storage` if writing fails.
pub fn save_settings<S: KeyValueStore + ?Sized>(
    store: &mut S,
    config: &GameConfig,
) -> Result<(), GameError> {
    config.validate()?;
    write_value(store, SETTINGS_KEY, config)
}

/// Best winning time in seconds, if one was recorded
pub fn load_best_time<S: KeyValueStore + ?Sized>(
    store: &S,
    fingerprint: Fingerprint,
) -> Option<u64> {
    read_value(store, &best_time_key(fingerprint)).ok().flatten()
}

/// Store `seconds` if it beats the recorded best (or nothing is recorded)
///
/// Returns whether a new best was stored.
///
/// # Errors
/// `Storage` if writing fails.
pub fn record_best_time<S: KeyValueStore + ?Sized>(
    store: &mut S,
    fingerprint: Fingerprint,
    seconds: u64,
) -> Result<bool, GameError> {
    if load_best_time(store, fingerprint).is_some_and(|best| seconds >= best) {
        return Ok(false);
    }
    write_value(store, &best_time_key(fingerprint), &seconds)?;
    Ok(true)
}

/// Score record for `fingerprint`, zeroed if missing or malformed
pub fn load_score<S: KeyValueStore + ?Sized>(store: &S, fingerprint: Fingerprint) -> ScoreRecord {
    read_value(store, &score_key(fingerprint))
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Add one game's score; a zero score is not recorded
///
/// Returns the updated record, or `None` when nothing was stored.
///
/// # Errors
/// `Storage` if writing fails.
pub fn add_score<S: KeyValueStore + ?Sized>(
    store: &mut S,
    fingerprint: Fingerprint,
    score: u32,
) -> Result<Option<ScoreRecord>, GameError> {
    if score == 0 {
        return Ok(None);
    }
    let mut record = load_score(store, fingerprint);
    record.total_score += u64::from(score);
    record.games_played += 1;
    write_value(store, &score_key(fingerprint), &record)?;
    Ok(Some(record))
}

/// Forget best time and score for `fingerprint`
///
/// # Errors
/// `Storage` if the removal cannot be persisted.
pub fn clear_records<S: KeyValueStore + ?Sized>(
    store: &mut S,
    fingerprint: Fingerprint,
) -> Result<(), GameError> {
    for key in [best_time_key(fingerprint), score_key(fingerprint)] {
        store
            .remove(&key)
            .map_err(|e| GameError::Storage(e.to_string()))?;
    }
    Ok(())
}
