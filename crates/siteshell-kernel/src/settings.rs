//! Persisted path settings.
//!
//! Carried over from the original panel's settings page: two tool
//! paths plus an auto-detect switch, stored as one JSON record under
//! the platform config directory. Paths are sanitized on save — any
//! character outside `[A-Za-z0-9/\-._]` is dropped, then `../` and
//! `..\` sequences are removed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the PHP CLI binary.
    pub php_binary: String,
    /// Path to the wp-cli executable.
    pub wp_cli_path: String,
    /// Try to locate the binaries automatically, using the paths above
    /// as fallback.
    pub auto_detect: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            php_binary: "/opt/homebrew/bin/php".to_string(),
            wp_cli_path: "/opt/homebrew/bin/wp".to_string(),
            auto_detect: true,
        }
    }
}

impl Settings {
    /// Default on-disk location: `<config dir>/siteshell/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("siteshell").join("settings.json"))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        serde_json::from_str(&data)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Sanitize and write settings to `path`, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let sanitized = self.sanitized();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(&sanitized)?;
        std::fs::write(path, data)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// A copy with both paths run through the sanitizer.
    pub fn sanitized(&self) -> Self {
        Self {
            php_binary: sanitize_path(&self.php_binary),
            wp_cli_path: sanitize_path(&self.wp_cli_path),
            auto_detect: self.auto_detect,
        }
    }
}

/// Strip characters outside `[A-Za-z0-9/\-._]`, then remove parent
/// directory references.
pub fn sanitize_path(path: &str) -> String {
    let kept: String = path
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '.' | '_'))
        .collect();
    kept.replace("../", "").replace("..\\", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_shell_metacharacters() {
        assert_eq!(sanitize_path("/usr/bin/php; rm -rf /"), "/usr/bin/phprm-rf/");
        assert_eq!(sanitize_path("/usr/local/bin/wp"), "/usr/local/bin/wp");
    }

    #[test]
    fn sanitize_removes_parent_references() {
        assert_eq!(sanitize_path("/opt/../etc/passwd"), "/opt/etc/passwd");
        assert_eq!(sanitize_path("../../secret"), "secret");
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_round_trips_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            php_binary: "/usr/bin/php$(evil)".to_string(),
            wp_cli_path: "/usr/local/bin/wp".to_string(),
            auto_detect: false,
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.php_binary, "/usr/bin/phpevil");
        assert_eq!(loaded.wp_cli_path, "/usr/local/bin/wp");
        assert!(!loaded.auto_detect);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"auto_detect": false}"#).unwrap();
        assert_eq!(settings.php_binary, Settings::default().php_binary);
        assert!(!settings.auto_detect);
    }
}
