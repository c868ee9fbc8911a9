//! Stats command
//!
//! Reads the records kept for one settings fingerprint.

use crate::error::GameError;
use crate::game::{Fingerprint, GameConfig};
use crate::storage::records::{self, ScoreRecord};
use crate::storage::KeyValueStore;

/// Everything stored for one fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsReport {
    pub fingerprint: Fingerprint,
    pub best_time: Option<u64>,
    pub score: ScoreRecord,
}

#[must_use]
pub fn collect_stats<S: KeyValueStore + ?Sized>(store: &S, config: &GameConfig) -> StatsReport {
    let fingerprint = config.fingerprint();
    StatsReport {
        fingerprint,
        best_time: records::load_best_time(store, fingerprint),
        score: records::load_score(store, fingerprint),
    }
}

/// Clear the records for `config` and return the (now empty) report
///
/// # Errors
/// `Storage` if the store cannot be written.
pub fn reset_stats<S: KeyValueStore + ?Sized>(
    store: &mut S,
    config: &GameConfig,
) -> Result<StatsReport, GameError> {
    records::clear_records(store, config.fingerprint())?;
    Ok(collect_stats(store, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn empty_store_reports_nothing() {
        let report = collect_stats(&MemoryStore::new(), &GameConfig::default());
        assert_eq!(report.best_time, None);
        assert_eq!(report.score, ScoreRecord::default());
        assert_eq!(report.fingerprint.to_string(), "10_5_DA");
    }

    #[test]
    fn report_and_reset() {
        let mut store = MemoryStore::new();
        let config = GameConfig::default();
        records::record_best_time(&mut store, config.fingerprint(), 41).unwrap();
        records::add_score(&mut store, config.fingerprint(), 5).unwrap();

        let report = collect_stats(&store, &config);
        assert_eq!(report.best_time, Some(41));
        assert_eq!(report.score.total_score, 5);

        let cleared = reset_stats(&mut store, &config).unwrap();
        assert_eq!(cleared.best_time, None);
        assert_eq!(cleared.score, ScoreRecord::default());
    }
}
