use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::{FoldReport, Rollup, SummonerEntry};
use crate::cache::sanitize;
use crate::error::AppError;

/// A rollup as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    pub player: String,
    pub puuid: String,
    pub generated_at: DateTime<Utc>,
    pub matches_folded: usize,
    pub matches_skipped: usize,
    pub report: FoldReport,
    pub tree: SummonerEntry,
}

/// Saved reports under `<data_dir>/reports/<player>/<timestamp>.json`.
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(data_dir: &Path) -> Self {
        ReportStore {
            dir: data_dir.join("reports"),
        }
    }

    fn player_dir(&self, player: &str) -> PathBuf {
        self.dir.join(sanitize(player))
    }

    pub fn save(&self, player: &str, rollup: &Rollup, now: DateTime<Utc>) -> Result<PathBuf, AppError> {
        let dir = self.player_dir(player);
        fs::create_dir_all(&dir)?;

        let stored = StoredReport {
            player: player.to_string(),
            puuid: rollup.puuid.clone(),
            generated_at: now,
            matches_folded: rollup.report.folded.len(),
            matches_skipped: rollup.report.skipped.len(),
            report: rollup.report.clone(),
            tree: rollup.tree.clone(),
        };

        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize report: {}", e)))?;
        let path = dir.join(format!("{}.json", now.format("%Y%m%dT%H%M%SZ")));
        fs::write(&path, json)?;

        info!(path = %path.display(), "saved report");
        Ok(path)
    }

    /// The most recent saved report for `player`, if any.
    pub fn load_latest(&self, player: &str) -> Result<Option<StoredReport>, AppError> {
        let dir = self.player_dir(player);
        if !dir.exists() {
            return Ok(None);
        }

        // Timestamped names sort chronologically.
        let latest = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .max();

        let Some(path) = latest else {
            return Ok(None);
        };

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| AppError::JsonError(format!("Failed to parse report {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rollup(puuid: &str) -> Rollup {
        let mut report = FoldReport::default();
        report.folded.push("NA1_1".to_string());
        Rollup {
            puuid: puuid.to_string(),
            tree: SummonerEntry::default(),
            report,
        }
    }

    #[test]
    fn test_save_and_load_latest() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReportStore::new(dir.path());

        let earlier = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap();
        store.save("Faker#KR1", &rollup("old"), earlier).unwrap();
        let path = store.save("Faker#KR1", &rollup("new"), later).unwrap();

        assert!(path.ends_with("Faker_KR1/20260302T093000Z.json"));

        let latest = store.load_latest("Faker#KR1").unwrap().unwrap();
        assert_eq!(latest.puuid, "new");
        assert_eq!(latest.generated_at, later);
        assert_eq!(latest.matches_folded, 1);
    }

    #[test]
    fn test_load_latest_without_reports() {
        let dir = tempfile::tempdir().unwrap();
        let store = ReportStore::new(dir.path());
        assert!(store.load_latest("Nobody#NA1").unwrap().is_none());
    }
}
