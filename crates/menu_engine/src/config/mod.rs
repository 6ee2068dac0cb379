//! Configuration system
//!
//! Menu settings are plain serde structs that can be stored as TOML or RON.

pub use serde::{Serialize, Deserialize};

use crate::menu::MENU_ANIMATION_DURATION;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// # Menu Configuration
///
/// Timing, logging and screen settings shared by the window manager and
/// the frame driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Length of the open and close fades in seconds
    pub animation_duration: f32,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Target FPS for the frame loop (`None` runs unthrottled)
    pub target_fps: Option<u32>,
    /// Screen size in pixels (width, height)
    pub screen_size: (f32, f32),
}

impl MenuConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            animation_duration: MENU_ANIMATION_DURATION,
            log_level: "info".to_string(),
            target_fps: Some(60),
            screen_size: (1280.0, 720.0),
        }
    }

    /// Set the fade duration
    pub fn with_animation_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = seconds;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set target FPS
    pub fn with_target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }

    /// Set the screen size
    pub fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.screen_size = (width, height);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.animation_duration.is_finite() || self.animation_duration <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "animation_duration must be positive, got {}",
                self.animation_duration
            )));
        }

        if self.target_fps == Some(0) {
            return Err(ConfigError::Invalid("target_fps must be at least 1".to_string()));
        }

        let (width, height) = self.screen_size;
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "screen_size must be positive, got {width}x{height}"
            )));
        }

        Ok(())
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for MenuConfig {}
