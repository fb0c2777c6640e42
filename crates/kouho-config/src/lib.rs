use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults, overlaid with an optional JSON config file, then env vars.
    /// A missing or unreadable file falls back to defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = path.map(Self::from_file).unwrap_or_default();

        if let Ok(path) = env::var("KOUHO_DICT") {
            config.dictionary.path = Some(path.into());
        }
        if let Some(rows) = env::var("KOUHO_ROWS").ok().and_then(|v| v.parse().ok()) {
            config.ui.rows = rows;
        }

        config
    }

    fn from_file(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
