//! Engine configuration loading and validation
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{CompletionError, CompletionResult, IndentSettings};

/// Tuning knobs for the post-processing engine
///
/// Every field has a serde default, so partial configuration files are
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cap on the sliding window of recent lines
    #[serde(default = "default_max_window_lines")]
    pub max_window_lines: usize,
    /// Line radius of the neighborhood snapshot around the cursor
    #[serde(default = "default_snapshot_radius")]
    pub snapshot_radius: usize,
    /// Prefix length beyond which a break is forced without a rule match
    #[serde(default = "default_long_line_threshold")]
    pub long_line_threshold: usize,
    /// Editor indentation settings
    #[serde(default)]
    pub indent: IndentSettings,
}

fn default_max_window_lines() -> usize {
    250
}

fn default_snapshot_radius() -> usize {
    25
}

fn default_long_line_threshold() -> usize {
    120
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_window_lines: default_max_window_lines(),
            snapshot_radius: default_snapshot_radius(),
            long_line_threshold: default_long_line_threshold(),
            indent: IndentSettings::default(),
        }
    }
}

/// Supported configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

/// Engine configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub fn load_from_yaml(path: &Path) -> CompletionResult<EngineConfig> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_yaml::from_str(&content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_json(path: &Path) -> CompletionResult<EngineConfig> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a string
    pub fn load_from_string(content: &str, format: ConfigFormat) -> CompletionResult<EngineConfig> {
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration with hierarchy: project, then user, then defaults
    ///
    /// The project level looks under `<project_root>/.ghostline/`, the user
    /// level under `~/.ghostline/`. Unreadable or invalid files at one
    /// level are logged and the next level applies.
    pub fn load_with_hierarchy(project_root: &Path) -> EngineConfig {
        let project_dir = project_root.join(".ghostline");
        match Self::load_from_directory(&project_dir) {
            Ok(config) => return config,
            Err(error) => {
                warn!(
                    directory = %project_dir.display(),
                    error = %ghostline_common::logging::format_error(&error),
                    "project configuration unavailable"
                );
            }
        }

        if let Some(user_dir) = Self::user_config_dir() {
            match Self::load_from_directory(&user_dir) {
                Ok(config) => return config,
                Err(error) => {
                    warn!(
                        directory = %user_dir.display(),
                        error = %ghostline_common::logging::format_error(&error),
                        "user configuration unavailable"
                    );
                }
            }
        }

        EngineConfig::default()
    }

    /// The user-level configuration directory
    pub fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ghostline"))
    }

    /// Load `completion.{yaml,yml,json}` from a directory
    fn load_from_directory(dir: &Path) -> CompletionResult<EngineConfig> {
        if !dir.is_dir() {
            return Err(CompletionError::ConfigError(format!(
                "Configuration directory not found: {}",
                dir.display()
            )));
        }

        let yaml_path = dir.join("completion.yaml");
        if yaml_path.exists() {
            return Self::load_from_yaml(&yaml_path);
        }

        let yml_path = dir.join("completion.yml");
        if yml_path.exists() {
            return Self::load_from_yaml(&yml_path);
        }

        let json_path = dir.join("completion.json");
        if json_path.exists() {
            return Self::load_from_json(&json_path);
        }

        Err(CompletionError::ConfigError(format!(
            "No completion configuration in: {}",
            dir.display()
        )))
    }

    /// Validate configuration values
    fn validate(config: &EngineConfig) -> CompletionResult<()> {
        if config.max_window_lines == 0 {
            return Err(CompletionError::ConfigError(
                "max_window_lines must be positive".to_string(),
            ));
        }
        if config.snapshot_radius == 0 {
            return Err(CompletionError::ConfigError(
                "snapshot_radius must be positive".to_string(),
            ));
        }
        if config.long_line_threshold == 0 {
            return Err(CompletionError::ConfigError(
                "long_line_threshold must be positive".to_string(),
            ));
        }
        if config.indent.tab_size == 0 {
            return Err(CompletionError::ConfigError(
                "indent.tab_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_window_lines, 250);
        assert_eq!(config.snapshot_radius, 25);
        assert_eq!(config.long_line_threshold, 120);
        assert!(config.indent.insert_spaces);
    }

    #[test]
    fn test_load_yaml_string() {
        let yaml = "max_window_lines: 100\nsnapshot_radius: 10\n";
        let config = ConfigLoader::load_from_string(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.max_window_lines, 100);
        assert_eq!(config.snapshot_radius, 10);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.long_line_threshold, 120);
    }

    #[test]
    fn test_load_json_string() {
        let json = r#"{"indent": {"insert_spaces": false, "tab_size": 8}}"#;
        let config = ConfigLoader::load_from_string(json, ConfigFormat::Json).unwrap();
        assert!(!config.indent.insert_spaces);
        assert_eq!(config.indent.tab_size, 8);
    }

    #[test]
    fn test_zero_window_rejected() {
        let yaml = "max_window_lines: 0\n";
        let result = ConfigLoader::load_from_string(yaml, ConfigFormat::Yaml);
        assert!(matches!(result, Err(CompletionError::ConfigError(_))));
    }

    #[test]
    fn test_zero_tab_size_rejected() {
        let json = r#"{"indent": {"insert_spaces": true, "tab_size": 0}}"#;
        let result = ConfigLoader::load_from_string(json, ConfigFormat::Json);
        assert!(matches!(result, Err(CompletionError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("completion.yaml");
        std::fs::write(&path, "snapshot_radius: 5\n").unwrap();

        let config = ConfigLoader::load_from_yaml(&path).unwrap();
        assert_eq!(config.snapshot_radius, 5);
    }

    #[test]
    fn test_hierarchy_prefers_project_config() {
        let root = tempfile::tempdir().unwrap();
        let project_dir = root.path().join(".ghostline");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::write(project_dir.join("completion.yaml"), "max_window_lines: 42\n").unwrap();

        let config = ConfigLoader::load_with_hierarchy(root.path());
        assert_eq!(config.max_window_lines, 42);
    }

    #[test]
    fn test_hierarchy_falls_back_to_defaults() {
        let root = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_with_hierarchy(root.path());
        // No project config present; the result is a valid config either
        // way (user-level files may exist on the machine running tests).
        assert!(config.max_window_lines > 0);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = ConfigLoader::load_from_string(": not yaml :", ConfigFormat::Yaml);
        assert!(result.is_err());
    }
}
