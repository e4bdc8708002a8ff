use crate::decor::context::DEFAULT_DELETE_TOLERANCE;
use crate::decor::model::{default_decorations, DecorationKind};
use crate::decor::store::DEFAULT_JITTER;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving log output instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Initial inner size of the window.
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
    /// Maximum random offset applied on each axis when a decoration is dropped.
    #[serde(default = "default_placement_jitter")]
    pub placement_jitter: f32,
    /// How far from a decoration a click may land and still remove it.
    #[serde(default = "default_delete_tolerance")]
    pub delete_tolerance: f32,
    #[serde(default = "default_snow_flakes")]
    pub snow_flakes: usize,
    /// Decoration kinds offered in the palette.
    #[serde(default = "default_decorations")]
    pub decorations: Vec<DecorationKind>,
}

fn default_window_size() -> (f32, f32) {
    (800.0, 600.0)
}

fn default_placement_jitter() -> f32 {
    DEFAULT_JITTER
}

fn default_delete_tolerance() -> f32 {
    DEFAULT_DELETE_TOLERANCE
}

fn default_snow_flakes() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            window_size: default_window_size(),
            placement_jitter: default_placement_jitter(),
            delete_tolerance: default_delete_tolerance(),
            snow_flakes: default_snow_flakes(),
            decorations: default_decorations(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing or empty file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"delete_tolerance": 4.5}"#).unwrap();
        assert_eq!(settings.delete_tolerance, 4.5);
        assert_eq!(settings.placement_jitter, DEFAULT_JITTER);
        assert_eq!(settings.decorations.len(), 8);
        assert!(!settings.debug_logging);
    }
}
