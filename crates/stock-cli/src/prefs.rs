//! User preferences, stored beside the product data.
//!
//! The preferences record is independent of the product store: it shares the
//! JSON-on-disk mechanism but nothing else, so clearing product data never
//! touches it.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Display theme for UI front ends.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// Load preferences from `path`.
///
/// An absent or unreadable file yields the defaults; preferences are never a
/// reason to fail a command.
pub fn load_preferences(path: &Path) -> Preferences {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Preferences::default(),
        Err(e) => {
            warn!("could not read preferences from {}: {e}", path.display());
            return Preferences::default();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!("malformed preferences in {}: {e}", path.display());
            Preferences::default()
        }
    }
}

/// Write preferences to `path`.
pub fn save_preferences(path: &Path, prefs: &Preferences) -> Result<()> {
    let payload = serde_json::to_vec_pretty(prefs).context("serialize preferences")?;
    fs::write(path, payload)
        .with_context(|| format!("write preferences to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn preferences_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = Preferences { theme: Theme::Dark };
        save_preferences(&path, &prefs).unwrap();

        assert_eq!(load_preferences(&path), prefs);
    }

    #[test]
    fn absent_or_malformed_preferences_fall_back_to_defaults() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert_eq!(load_preferences(&missing), Preferences::default());

        let malformed = dir.path().join("prefs.json");
        fs::write(&malformed, "not json").unwrap();
        assert_eq!(load_preferences(&malformed), Preferences::default());
    }

    #[test]
    fn theme_serializes_lowercase() {
        let json = serde_json::to_string(&Preferences { theme: Theme::Dark }).unwrap();
        assert!(json.contains("\"dark\""));
    }
}
