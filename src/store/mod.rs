//! JSON snapshot store
//!
//! File-based persistence for everything the pipeline reads and writes:
//! captured odds windows, once-per-day opening lines, manually maintained
//! public betting splits, and generated picks. Optional inputs that are
//! missing on disk load as empty data rather than errors.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feed::OddsSnapshot;
use crate::picks::Pick;

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot not found: {0}")]
    Missing(PathBuf),
    #[error("no odds window files under {0}")]
    NoOddsWindows(PathBuf),
}

/// Opening line captured once per day per game
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningLine {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub spread: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
}

/// Public betting share on the home side of one market
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeSplit {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub home: Option<Decimal>,
}

/// Public betting share on the over
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverSplit {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub over: Option<Decimal>,
}

/// ATS records for both teams, "W-L" strings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtsRecords {
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub away: Option<String>,
}

/// Public betting splits for one game
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSplits {
    #[serde(default)]
    pub spread: Option<HomeSplit>,
    #[serde(default)]
    pub total: Option<OverSplit>,
    #[serde(default)]
    pub ml: Option<HomeSplit>,
    #[serde(default)]
    pub ats: Option<AtsRecords>,
}

/// Envelope written to picks_{date}.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PicksFile {
    pub date: String,
    pub generated_at: DateTime<Utc>,
    pub picks: Vec<Pick>,
}

/// File-backed snapshot store rooted at a data directory
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load a specific odds window file by name
    pub fn load_odds_window(&self, file_name: &str) -> Result<OddsSnapshot, StoreError> {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            return Err(StoreError::Missing(path));
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    /// Load the most recent odds window
    ///
    /// Window file names embed their capture date and hour, so the
    /// lexicographically greatest name is the newest. Name ordering keeps
    /// the choice deterministic where file mtimes are not.
    pub fn latest_odds_window(&self) -> Result<OddsSnapshot, StoreError> {
        let mut names: Vec<String> = fs::read_dir(&self.data_dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with("odds_window_") && name.ends_with(".json"))
            .collect();
        names.sort();
        let latest = names
            .pop()
            .ok_or_else(|| StoreError::NoOddsWindows(self.data_dir.clone()))?;
        tracing::info!(file = %latest, "Using latest odds window");
        self.load_odds_window(&latest)
    }

    /// Save an odds window under odds_window_{label}.json
    pub fn save_odds_window(
        &self,
        label: &str,
        snapshot: &OddsSnapshot,
    ) -> Result<PathBuf, StoreError> {
        self.write_json(&format!("odds_window_{label}.json"), snapshot)
    }

    /// Load opening lines for a date, empty when not yet captured
    pub fn load_opening_lines(
        &self,
        date: &str,
    ) -> Result<HashMap<String, OpeningLine>, StoreError> {
        self.read_json_or_default(&format!("opening_lines_{date}.json"))
    }

    /// Save opening lines for a date
    pub fn save_opening_lines(
        &self,
        date: &str,
        lines: &HashMap<String, OpeningLine>,
    ) -> Result<PathBuf, StoreError> {
        self.write_json(&format!("opening_lines_{date}.json"), lines)
    }

    /// Load public betting splits, empty when the file is absent
    pub fn load_public_splits(&self) -> Result<HashMap<String, GameSplits>, StoreError> {
        self.read_json_or_default("public_splits.json")
    }

    /// Save generated picks for a date
    pub fn save_picks(
        &self,
        date: &str,
        generated_at: DateTime<Utc>,
        picks: &[Pick],
    ) -> Result<PathBuf, StoreError> {
        let file = PicksFile {
            date: date.to_string(),
            generated_at,
            picks: picks.to_vec(),
        };
        let path = self.write_json(&format!("picks_{date}.json"), &file)?;
        tracing::info!(count = picks.len(), path = %path.display(), "Saved picks");
        Ok(path)
    }

    /// Load previously saved picks for a date
    pub fn load_picks(&self, date: &str) -> Result<PicksFile, StoreError> {
        let path = self.data_dir.join(format!("picks_{date}.json"));
        if !path.exists() {
            return Err(StoreError::Missing(path));
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    fn read_json_or_default<T: Default + for<'de> Deserialize<'de>>(
        &self,
        file_name: &str,
    ) -> Result<T, StoreError> {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            tracing::debug!(file = file_name, "Snapshot absent, using empty data");
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    fn write_json<T: Serialize>(&self, file_name: &str, value: &T) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.data_dir.join(file_name);
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::OddsGame;
    use rust_decimal_macros::dec;

    fn snapshot(ids: &[&str]) -> OddsSnapshot {
        OddsSnapshot {
            fetched_at: None,
            games: ids
                .iter()
                .map(|id| OddsGame {
                    id: id.to_string(),
                    home_team: "BKN".to_string(),
                    away_team: "CHI".to_string(),
                    commence_time: None,
                    bookmakers: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_odds_window_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store
            .save_odds_window("19h_20260208", &snapshot(&["g1", "g2"]))
            .unwrap();
        let loaded = store.load_odds_window("odds_window_19h_20260208.json").unwrap();
        assert_eq!(loaded.games.len(), 2);
    }

    #[test]
    fn test_latest_odds_window_picks_greatest_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store.save_odds_window("12h_20260207", &snapshot(&["old"])).unwrap();
        store.save_odds_window("19h_20260208", &snapshot(&["new"])).unwrap();
        let latest = store.latest_odds_window().unwrap();
        assert_eq!(latest.games[0].id, "new");
    }

    #[test]
    fn test_latest_odds_window_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path()).unwrap();
        let store = SnapshotStore::new(dir.path());
        assert!(matches!(
            store.latest_odds_window(),
            Err(StoreError::NoOddsWindows(_))
        ));
    }

    #[test]
    fn test_opening_lines_roundtrip_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());

        assert!(store.load_opening_lines("20260208").unwrap().is_empty());

        let mut lines = HashMap::new();
        lines.insert(
            "g1".to_string(),
            OpeningLine {
                spread: Some(dec!(-4.0)),
                total: Some(dec!(223.5)),
            },
        );
        store.save_opening_lines("20260208", &lines).unwrap();

        let loaded = store.load_opening_lines("20260208").unwrap();
        assert_eq!(loaded["g1"].spread, Some(dec!(-4.0)));
        assert_eq!(loaded["g1"].total, Some(dec!(223.5)));
    }

    #[test]
    fn test_public_splits_parse() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(
            dir.path().join("public_splits.json"),
            r#"{
                "g1": {
                    "spread": {"home": 0.57},
                    "total": {"over": 0.64},
                    "ml": {"home": 0.84},
                    "ats": {"home": "2-8", "away": "5-5"}
                }
            }"#,
        )
        .unwrap();

        let store = SnapshotStore::new(dir.path());
        let splits = store.load_public_splits().unwrap();
        let game = &splits["g1"];
        assert_eq!(game.spread.as_ref().unwrap().home, Some(dec!(0.57)));
        assert_eq!(game.total.as_ref().unwrap().over, Some(dec!(0.64)));
        assert_eq!(game.ats.as_ref().unwrap().home.as_deref(), Some("2-8"));
    }
}
