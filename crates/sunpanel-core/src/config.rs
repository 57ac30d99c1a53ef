use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{AppError, ConfigError};

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// How times are rendered
    #[serde(default)]
    pub display: DisplayConfig,

    /// Cosmetic page effects
    #[serde(default)]
    pub effects: EffectsConfig,
}

/// Default display timezone; the dashboard covers Indian cities.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// IANA timezone used when formatting sunrise/sunset and other times
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl DisplayConfig {
    /// Parse the configured timezone.
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(self.timezone.clone()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Delay before the main container's fade-in transition starts
    #[serde(default = "default_fade_delay_ms")]
    pub fade_delay_ms: u64,

    /// CSS transition applied when the fade-in starts
    #[serde(default = "default_transition")]
    pub transition: String,

    /// Initial downward offset of the main container, in pixels
    #[serde(default = "default_fade_offset_px")]
    pub fade_offset_px: u32,

    /// Upward lift applied to interactive elements on hover, in pixels
    #[serde(default = "default_hover_lift_px")]
    pub hover_lift_px: u32,

    /// Register the passive no-op touch listener on touch hosts
    #[serde(default = "default_true")]
    pub touch_noop: bool,

    /// Offline support via service worker. Registration is not implemented;
    /// enabling this only logs that it was requested.
    #[serde(default)]
    pub offline_support: bool,
}

fn default_fade_delay_ms() -> u64 {
    100
}

fn default_transition() -> String {
    "all 0.6s ease".to_string()
}

fn default_fade_offset_px() -> u32 {
    20
}

fn default_hover_lift_px() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: default_fade_delay_ms(),
            transition: default_transition(),
            fade_offset_px: default_fade_offset_px(),
            hover_lift_px: default_hover_lift_px(),
            touch_noop: default_true(),
            offline_support: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sunpanel");

        Self {
            config_dir,
            display: DisplayConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns [`ConfigError::Invalid`] if validation finds errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config_path = Self::config_path()?;
        Self::load_validated_from(&config_path)
    }

    pub fn load_validated_from(path: &Path) -> Result<(Self, ValidationResult)> {
        let config = Self::load_from(path)?;
        let validation = config.validate();

        if !validation.is_valid() {
            let err = ConfigError::Invalid(validation.error_summary());
            return Err(AppError::Config(err).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if let Err(e) = self.display.tz() {
            result.add_error("display.timezone", e.to_string());
        }

        if self.effects.fade_delay_ms == 0 {
            result.add_warning(
                "effects.fade_delay_ms",
                "Fade-in starts immediately (0 ms); the transition may not be visible",
            );
        } else if self.effects.fade_delay_ms > 5000 {
            result.add_warning(
                "effects.fade_delay_ms",
                "Fade-in delay is more than 5 seconds",
            );
        }

        if self.effects.transition.trim().is_empty() {
            result.add_error("effects.transition", "Transition must not be empty");
        }

        if self.effects.hover_lift_px > 50 {
            result.add_warning(
                "effects.hover_lift_px",
                "Hover lift is unusually large (>50px)",
            );
        }

        if self.effects.offline_support {
            result.add_warning(
                "effects.offline_support",
                "Offline support is not implemented; the setting has no effect",
            );
        }

        result
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("sunpanel");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_default_timezone_parses() {
        let tz = DisplayConfig::default().tz().unwrap();
        assert_eq!(tz, chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn test_unknown_timezone_is_error() {
        let mut config = Config::default();
        config.display.timezone = "Mars/Olympus_Mons".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "display.timezone"));
    }

    #[test]
    fn test_empty_transition_is_error() {
        let mut config = Config::default();
        config.effects.transition = "  ".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "effects.transition"));
    }

    #[test]
    fn test_offline_support_is_warning() {
        let mut config = Config::default();
        config.effects.offline_support = true;
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.field == "effects.offline_support"));
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.effects.fade_delay_ms, 100);
        assert_eq!(config.display.timezone, DEFAULT_TIMEZONE);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.display.timezone = "Europe/London".to_string();
        config.effects.hover_lift_px = 4;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.display.timezone, "Europe/London");
        assert_eq!(loaded.effects.hover_lift_px, 4);
        assert_eq!(loaded.effects.transition, "all 0.6s ease");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "config_dir = \"/tmp/sunpanel\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.effects.fade_offset_px, 20);
        assert!(loaded.effects.touch_noop);
        assert!(!loaded.effects.offline_support);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_validated_rejects_bad_timezone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.display.timezone = "Mars/Olympus_Mons".to_string();
        config.save_to(&path).unwrap();

        let err = Config::load_validated_from(&path).unwrap_err();
        let app_err = err.downcast_ref::<AppError>().unwrap();
        assert!(matches!(
            app_err,
            AppError::Config(ConfigError::Invalid(summary)) if summary.contains("display.timezone")
        ));
        assert_eq!(
            app_err.user_message(),
            "Invalid configuration. Check your settings."
        );
    }

    #[test]
    fn test_load_validated_keeps_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.effects.offline_support = true;
        config.save_to(&path).unwrap();

        let (loaded, validation) = Config::load_validated_from(&path).unwrap();
        assert!(loaded.effects.offline_support);
        assert_eq!(validation.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
