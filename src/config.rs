//! Engine configuration
//!
//! Loaded from TOML. Every field has a default so partial files are fine.

use crate::constants::render::{
    DEFAULT_FOV_Y_DEGREES, DEFAULT_RENDER_HEIGHT, DEFAULT_RENDER_WIDTH, DEFAULT_VIEW_DISTANCE,
    FOG_COLOR, MAX_RENDER_DIMENSION,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub render_width: u32,
    pub render_height: u32,
    /// Worker threads for the renderer. `None` uses every available core.
    pub render_threads: Option<usize>,
    pub view_distance: f64,
    pub fov_y_degrees: f64,
    pub fog_color: [f64; 3],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            render_threads: None,
            view_distance: DEFAULT_VIEW_DISTANCE,
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            fog_color: FOG_COLOR,
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.render_width == 0 || self.render_height == 0 {
            return Err(anyhow::anyhow!(
                "EngineConfig: render resolution {}x{} must be non-zero",
                self.render_width,
                self.render_height
            ));
        }

        if self.render_width > MAX_RENDER_DIMENSION || self.render_height > MAX_RENDER_DIMENSION {
            return Err(anyhow::anyhow!(
                "EngineConfig: render resolution too large (max {}x{})",
                MAX_RENDER_DIMENSION,
                MAX_RENDER_DIMENSION
            ));
        }

        if self.render_threads == Some(0) {
            return Err(anyhow::anyhow!("EngineConfig: render_threads cannot be 0"));
        }

        if !self.view_distance.is_finite() || self.view_distance < 0.0 {
            return Err(anyhow::anyhow!(
                "EngineConfig: view_distance {} must be finite and non-negative",
                self.view_distance
            ));
        }

        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(anyhow::anyhow!(
                "EngineConfig: fov_y_degrees {} must be in (0, 180)",
                self.fov_y_degrees
            ));
        }

        if self.fog_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(anyhow::anyhow!(
                "EngineConfig: fog_color {:?} channels must be in [0, 1]",
                self.fog_color
            ));
        }

        log::info!(
            "[EngineConfig] Configuration validated: {}x{}, threads={:?}, view_distance={}",
            self.render_width,
            self.render_height,
            self.render_threads,
            self.view_distance
        );
        Ok(())
    }
}

/// Parse and validate a TOML configuration string
pub fn load_config_from_str(source: &str) -> Result<EngineConfig> {
    let config: EngineConfig =
        toml::from_str(source).context("EngineConfig: failed to parse TOML")?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a TOML configuration file
pub fn load_config_from_file(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("EngineConfig: failed to read {}", path.display()))?;
    load_config_from_str(&source)
        .with_context(|| format!("EngineConfig: invalid config in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = EngineConfig::default();
        config.render_height = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.render_threads = Some(0);
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.fov_y_degrees = 180.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.view_distance = -1.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.fog_color = [0.5, 1.5, 0.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_view_distance_allowed() {
        let mut config = EngineConfig::default();
        config.view_distance = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = load_config_from_str("render_width = 640\nrender_threads = 2\n")
            .expect("partial config should load");
        assert_eq!(config.render_width, 640);
        assert_eq!(config.render_height, DEFAULT_RENDER_HEIGHT);
        assert_eq!(config.render_threads, Some(2));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "render_width = 64").expect("write");
        writeln!(file, "render_height = 48").expect("write");
        writeln!(file, "fov_y_degrees = 75.0").expect("write");

        let config = load_config_from_file(file.path()).expect("config should load");
        assert_eq!(config.render_width, 64);
        assert_eq!(config.render_height, 48);
        assert!((config.fov_y_degrees - 75.0).abs() < 1e-12);
    }

    #[test]
    fn test_load_config_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "render_width = 0").expect("write");
        assert!(load_config_from_file(file.path()).is_err());
        assert!(load_config_from_file("/nonexistent/arena-engine.toml").is_err());
    }
}
