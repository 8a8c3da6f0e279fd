use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use dotris_engine::GameMode;
use serde::{Deserialize, Serialize};

/// Scores kept per mode.
const MAX_ENTRIES: usize = 10;

/// Persisted high-score table, one descending top-10 list per game mode.
///
/// The on-disk format is a small JSON object:
///
/// ```json
/// { "a_type": [1200, 400], "b_type": [] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HighScores {
    #[serde(default)]
    a_type: Vec<u32>,
    #[serde(default)]
    b_type: Vec<u32>,
}

impl HighScores {
    /// Reads the table from `path`. A missing or unreadable file yields an
    /// empty table; a best-effort store must never block the game.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(file) = File::open(path) else {
            return Self::default();
        };
        serde_json::from_reader(BufReader::new(file)).unwrap_or_default()
    }

    /// Writes the table to `path`.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer(file, self)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Inserts a score, keeping the list sorted descending and trimmed to
    /// the top 10.
    pub fn add(&mut self, mode: GameMode, score: u32) {
        let entries = self.entries_mut(mode);
        entries.push(score);
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.truncate(MAX_ENTRIES);
    }

    /// Loads, inserts, and saves in one step. Persistence failures are
    /// reported to the caller but carry no game state.
    pub fn record(path: &Path, mode: GameMode, score: u32) -> anyhow::Result<()> {
        let mut scores = Self::load(path);
        scores.add(mode, score);
        scores.save(path)
    }

    #[must_use]
    pub fn entries(&self, mode: GameMode) -> &[u32] {
        match mode {
            GameMode::AType => &self.a_type,
            GameMode::BType => &self.b_type,
        }
    }

    fn entries_mut(&mut self, mode: GameMode) -> &mut Vec<u32> {
        match mode {
            GameMode::AType => &mut self.a_type,
            GameMode::BType => &mut self.b_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_descending_top_ten() {
        let mut scores = HighScores::default();
        for score in [300, 1200, 40, 100, 700, 50, 60, 70, 80, 90, 10, 2000] {
            scores.add(GameMode::AType, score);
        }
        let entries = scores.entries(GameMode::AType);
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0], 2000);
        assert!(entries.windows(2).all(|pair| pair[0] >= pair[1]));
        // 10 and 40 fell off the bottom.
        assert!(!entries.contains(&10));
        assert!(scores.entries(GameMode::BType).is_empty());
    }

    #[test]
    fn modes_are_tracked_separately() {
        let mut scores = HighScores::default();
        scores.add(GameMode::AType, 500);
        scores.add(GameMode::BType, 900);
        assert_eq!(scores.entries(GameMode::AType), [500]);
        assert_eq!(scores.entries(GameMode::BType), [900]);
    }

    #[test]
    fn json_round_trip_preserves_the_table() {
        let mut scores = HighScores::default();
        scores.add(GameMode::AType, 1200);
        scores.add(GameMode::AType, 400);
        let json = serde_json::to_string(&scores).unwrap();
        let parsed: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scores);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let parsed: HighScores = serde_json::from_str(r#"{"a_type":[100]}"#).unwrap();
        assert_eq!(parsed.entries(GameMode::AType), [100]);
        assert!(parsed.entries(GameMode::BType).is_empty());
    }

    #[test]
    fn load_tolerates_a_missing_file() {
        let scores = HighScores::load(Path::new("definitely/not/here.json"));
        assert_eq!(scores, HighScores::default());
    }
}
