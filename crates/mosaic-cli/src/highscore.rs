use std::{fs, path::Path};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single high-score record, stored as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highscore {
    pub score: usize,
    pub lines: usize,
    pub date: DateTime<Utc>,
    pub name: String,
}

/// Saves a new record if `score` beats the stored one, returning the saved
/// entry.
///
/// A missing or unreadable file counts as no previous record. Ties do not
/// overwrite.
pub fn record(path: &Path, score: usize, lines: usize) -> anyhow::Result<Option<Highscore>> {
    if let Some(previous) = load(path)
        && previous.score >= score
    {
        return Ok(None);
    }

    let entry = Highscore {
        score,
        lines,
        date: Utc::now(),
        name: player_name(),
    };
    let json = serde_json::to_string_pretty(&entry)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write high score file: {}", path.display()))?;
    Ok(Some(entry))
}

/// Reads the stored record, if the file exists and parses.
pub fn load(path: &Path) -> Option<Highscore> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn player_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "Player".to_owned())
}
