use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::VigilError;
use crate::gate::EventGate;
use crate::overlay::LayoutParams;
use crate::scanner::DetectionPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to parse config file '{path}': {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("Invalid config: {reason}")]
    Invalid { reason: String },
}

impl VigilError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED",
            ConfigError::ParseFailed { .. } => "CONFIG_PARSE_FAILED",
            ConfigError::Invalid { .. } => "CONFIG_INVALID",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WatchConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Identifier fragments of the watched application
    #[serde(default = "default_app_fragments")]
    pub app_fragments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    #[serde(default = "default_brand_marker")]
    pub brand_marker: String,
    #[serde(default = "default_status_marker")]
    pub status_marker: String,
    /// Selecting a phrase switches to the deprecated exact-phrase policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_phrase: Option<String>,
    #[serde(default = "default_region_fraction")]
    pub region_fraction: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_screen_height")]
    pub height_px: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// 0 means size to content
    #[serde(default = "default_overlay_width")]
    pub width_px: u32,
    #[serde(default = "default_overlay_height")]
    pub height_px: u32,
}

fn default_app_fragments() -> Vec<String> {
    vec!["telegram".to_string()]
}

fn default_brand_marker() -> String {
    "meduza".to_string()
}

fn default_status_marker() -> String {
    "live".to_string()
}

fn default_region_fraction() -> f32 {
    0.25
}

fn default_screen_height() -> u32 {
    2400
}

fn default_overlay_width() -> u32 {
    900
}

fn default_overlay_height() -> u32 {
    600
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            app_fragments: default_app_fragments(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            brand_marker: default_brand_marker(),
            status_marker: default_status_marker(),
            exact_phrase: None,
            region_fraction: default_region_fraction(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            height_px: default_screen_height(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width_px: default_overlay_width(),
            height_px: default_overlay_height(),
        }
    }
}

impl WatchConfig {
    /// Load and merge the config hierarchy: defaults, then the user config
    /// (`~/.vigil/config.toml`), then the project config
    /// (`./vigil/config.toml`). Missing files are fine; a present but
    /// unreadable or invalid file is an error.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        let mut config = WatchConfig::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = Self::merge(config, user_config);
        }
        if let Some(project_config) = Self::load_project_config()? {
            config = Self::merge(config, project_config);
        }

        config.validate()?;
        Ok(config)
    }

    fn load_user_config() -> Result<Option<WatchConfig>, ConfigError> {
        let Some(home_dir) = dirs::home_dir() else {
            return Ok(None);
        };
        Self::load_config_file(&home_dir.join(".vigil").join("config.toml"))
    }

    fn load_project_config() -> Result<Option<WatchConfig>, ConfigError> {
        let path = PathBuf::from("vigil").join("config.toml");
        Self::load_config_file(&path)
    }

    fn load_config_file(path: &Path) -> Result<Option<WatchConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(config))
    }

    /// Parse a single config file, applying defaults for missing sections
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_config_file(path)?.ok_or_else(|| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: "file not found".to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn merge(base: WatchConfig, over: WatchConfig) -> WatchConfig {
        let defaults = WatchConfig::default();
        WatchConfig {
            target: if over.target != defaults.target {
                over.target
            } else {
                base.target
            },
            detection: if over.detection != defaults.detection {
                over.detection
            } else {
                base.detection
            },
            screen: if over.screen != defaults.screen {
                over.screen
            } else {
                base.screen
            },
            overlay: if over.overlay != defaults.overlay {
                over.overlay
            } else {
                base.overlay
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.app_fragments.iter().all(|f| f.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                reason: "target.app_fragments must contain at least one non-empty fragment"
                    .to_string(),
            });
        }
        if let Some(phrase) = &self.detection.exact_phrase {
            if phrase.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    reason: "detection.exact_phrase must not be blank".to_string(),
                });
            }
        } else if self.detection.brand_marker.trim().is_empty()
            || self.detection.status_marker.trim().is_empty()
        {
            return Err(ConfigError::Invalid {
                reason: "detection markers must not be blank".to_string(),
            });
        }
        if !(self.detection.region_fraction > 0.0 && self.detection.region_fraction <= 1.0) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "detection.region_fraction must be in (0, 1], got {}",
                    self.detection.region_fraction
                ),
            });
        }
        if self.screen.height_px == 0 {
            return Err(ConfigError::Invalid {
                reason: "screen.height_px must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn detection_policy(&self) -> DetectionPolicy {
        match &self.detection.exact_phrase {
            Some(phrase) => DetectionPolicy::ExactPhrase {
                marker: phrase.clone(),
            },
            None => DetectionPolicy::TopRegionMarkers {
                brand: self.detection.brand_marker.clone(),
                status: self.detection.status_marker.clone(),
                region_fraction: self.detection.region_fraction,
            },
        }
    }

    pub fn layout_params(&self) -> LayoutParams {
        if self.overlay.width_px == 0 || self.overlay.height_px == 0 {
            LayoutParams::fit_content()
        } else {
            LayoutParams::fixed(self.overlay.width_px, self.overlay.height_px)
        }
    }

    pub fn event_gate(&self) -> EventGate {
        EventGate::new(self.target.app_fragments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::Dimension;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = WatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target.app_fragments, vec!["telegram"]);
        assert_eq!(config.detection.brand_marker, "meduza");
        assert_eq!(config.detection.status_marker, "live");
        assert_eq!(config.screen.height_px, 2400);
    }

    #[test]
    fn test_default_policy_is_top_region_markers() {
        let config = WatchConfig::default();
        match config.detection_policy() {
            DetectionPolicy::TopRegionMarkers {
                brand,
                status,
                region_fraction,
            } => {
                assert_eq!(brand, "meduza");
                assert_eq!(status, "live");
                assert!((region_fraction - 0.25).abs() < f32::EPSILON);
            }
            other => panic!("Expected TopRegionMarkers, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_phrase_selects_deprecated_policy() {
        let mut config = WatchConfig::default();
        config.detection.exact_phrase = Some("Meduza — LIVE".to_string());
        match config.detection_policy() {
            DetectionPolicy::ExactPhrase { marker } => assert_eq!(marker, "Meduza — LIVE"),
            other => panic!("Expected ExactPhrase, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_params_fixed_by_default() {
        let config = WatchConfig::default();
        let params = config.layout_params();
        assert_eq!(params.width(), Dimension::Fixed(900));
        assert_eq!(params.height(), Dimension::Fixed(600));
    }

    #[test]
    fn test_layout_params_zero_means_fit_content() {
        let mut config = WatchConfig::default();
        config.overlay.width_px = 0;
        assert_eq!(config.layout_params().width(), Dimension::FitContent);
    }

    #[test]
    fn test_event_gate_from_config() {
        let config = WatchConfig::default();
        let gate = config.event_gate();
        assert!(gate.passes("org.telegram.messenger"));
        assert!(!gate.passes("com.whatsapp"));
    }

    #[test]
    fn test_validate_rejects_empty_fragments() {
        let mut config = WatchConfig::default();
        config.target.app_fragments = vec!["  ".to_string()];
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_validate_rejects_blank_markers() {
        let mut config = WatchConfig::default();
        config.detection.status_marker = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_region_fraction() {
        let mut config = WatchConfig::default();
        config.detection.region_fraction = 0.0;
        assert!(config.validate().is_err());
        config.detection.region_fraction = 1.5;
        assert!(config.validate().is_err());
        config.detection.region_fraction = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_screen_height() {
        let mut config = WatchConfig::default();
        config.screen.height_px = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_blank_exact_phrase() {
        let mut config = WatchConfig::default();
        config.detection.exact_phrase = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[detection]\nbrand_marker = \"dozhd\"\n\n[screen]\nheight_px = 1920"
        )
        .unwrap();

        let config = WatchConfig::load_file(file.path()).unwrap();
        assert_eq!(config.detection.brand_marker, "dozhd");
        // untouched fields keep their defaults
        assert_eq!(config.detection.status_marker, "live");
        assert_eq!(config.screen.height_px, 1920);
        assert_eq!(config.target.app_fragments, vec!["telegram"]);
    }

    #[test]
    fn test_load_file_missing_is_error() {
        let err = WatchConfig::load_file(Path::new("/nonexistent/vigil.toml")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_READ_FAILED");
    }

    #[test]
    fn test_load_file_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[").unwrap();
        let err = WatchConfig::load_file(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE_FAILED");
    }

    #[test]
    fn test_merge_override_wins_when_changed() {
        let base = WatchConfig::default();
        let mut over = WatchConfig::default();
        over.screen.height_px = 1080;

        let merged = WatchConfig::merge(base, over);
        assert_eq!(merged.screen.height_px, 1080);
        assert_eq!(merged.overlay.width_px, 900);
    }

    #[test]
    fn test_merge_keeps_base_when_override_is_default() {
        let mut base = WatchConfig::default();
        base.detection.brand_marker = "dozhd".to_string();
        let over = WatchConfig::default();

        let merged = WatchConfig::merge(base, over);
        assert_eq!(merged.detection.brand_marker, "dozhd");
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = WatchConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let back: WatchConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }
}
