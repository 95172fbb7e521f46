//! Canvas configuration
//!
//! A canvas can be described by a small TOML table:
//!
//! ```toml
//! width = 400
//! height = 300
//! background = "light gray"
//! auto_repaint = true
//! frame_rate = 30
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use gcanvas_core::{Color, Size};
use serde::{Deserialize, Serialize};

use crate::error::{GraphicsError, Result};

/// Settings for a [`GCanvas`](crate::GCanvas)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Background color, as a name or `#rrggbb`
    #[serde(default = "default_background")]
    pub background: String,
    /// Notify repaint listeners after each mutation
    #[serde(default = "default_true")]
    pub auto_repaint: bool,
    /// Sprite update rate used by animation drivers
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

fn default_width() -> u32 {
    400
}

fn default_height() -> u32 {
    300
}

fn default_background() -> String {
    "white".to_string()
}

fn default_true() -> bool {
    true
}

fn default_frame_rate() -> u32 {
    30
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            auto_repaint: true,
            frame_rate: default_frame_rate(),
        }
    }
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CanvasConfig =
            toml::from_str(content).map_err(|e| GraphicsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| GraphicsError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loading canvas config");
        Self::from_toml_str(&content)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GraphicsError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GraphicsError::Config(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.frame_rate == 0 {
            return Err(GraphicsError::Config("frame_rate must be positive".into()));
        }
        self.background_color()?;
        Ok(())
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    pub fn background_color(&self) -> Result<Color> {
        Color::parse(&self.background).map_err(|e| GraphicsError::Config(e.to_string()))
    }

    /// Time between sprite updates
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = CanvasConfig::from_toml_str("width = 640").unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 300);
        assert_eq!(config.background, "white");
        assert!(config.auto_repaint);
        assert_eq!(config.frame_rate, 30);
    }

    #[test]
    fn test_background_color_parses() {
        let config = CanvasConfig::from_toml_str("background = \"#102030\"").unwrap();
        assert_eq!(config.background_color().unwrap(), Color::from_rgb8(0x10, 0x20, 0x30));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            CanvasConfig::from_toml_str("width = 0"),
            Err(GraphicsError::Config(_))
        ));
        assert!(matches!(
            CanvasConfig::from_toml_str("background = \"not a color\""),
            Err(GraphicsError::Config(_))
        ));
        assert!(matches!(
            CanvasConfig::from_toml_str("width = \"wide\""),
            Err(GraphicsError::Config(_))
        ));
    }

    #[test]
    fn test_frame_interval() {
        let mut config = CanvasConfig::default();
        config.frame_rate = 50;
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_toml_output_reloads() {
        let config = CanvasConfig::new(123, 45);
        let text = config.to_toml().unwrap();
        assert_eq!(CanvasConfig::from_toml_str(&text).unwrap(), config);
    }
}
