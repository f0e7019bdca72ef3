//! # Viewer Configuration
//!
//! Settings a host application needs to load and show a single mesh:
//! which file to open, where its material libraries live, the colour for
//! faces without a material, and how chatty the log should be.

use serde::{Serialize, Deserialize};
use std::path::Path;

pub use crate::config::{Config, ConfigError};
use crate::assets::materials::FsMaterialSource;
use crate::foundation::logging::LevelFilter;
use crate::foundation::math::Vec3;

/// Where `mtllib` references are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialLookup {
    /// Relative to the process working directory
    #[default]
    WorkingDirectory,
    /// Relative to the directory holding the OBJ file
    ModelDirectory,
}

/// # Viewer Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Path of the OBJ file to load
    pub model_path: String,
    /// How material library names are resolved
    pub material_lookup: MaterialLookup,
    /// RGB colour for triangles without a material colour
    pub default_color: [f32; 3],
    /// Log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl ViewerConfig {
    /// Create a new viewer configuration
    pub fn new() -> Self {
        Self {
            model_path: "model.obj".to_string(),
            material_lookup: MaterialLookup::default(),
            default_color: [1.0, 1.0, 1.0],
            log_level: "info".to_string(),
        }
    }

    /// Set the model path
    pub fn with_model_path(mut self, path: impl Into<String>) -> Self {
        self.model_path = path.into();
        self
    }

    /// Set material resolution
    pub fn with_material_lookup(mut self, lookup: MaterialLookup) -> Self {
        self.material_lookup = lookup;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Material source matching `material_lookup`
    pub fn material_source(&self) -> FsMaterialSource {
        match self.material_lookup {
            MaterialLookup::WorkingDirectory => FsMaterialSource::working_dir(),
            MaterialLookup::ModelDirectory => {
                let dir = Path::new(&self.model_path).parent().unwrap_or_else(|| Path::new(""));
                FsMaterialSource::relative_to(dir)
            }
        }
    }

    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Default draw colour as a vector
    pub fn default_color(&self) -> Vec3 {
        Vec3::from(self.default_color)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_path.trim().is_empty() {
            return Err("model_path is empty".to_string());
        }
        if let Some(c) = self.default_color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(format!("default_color component {c} outside 0.0..=1.0"));
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ViewerConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ViewerConfig = toml::from_str(
            r#"
model_path = "models/forklift.obj"
material_lookup = "model_directory"
"#,
        )
        .unwrap();

        assert_eq!(config.model_path, "models/forklift.obj");
        assert_eq!(config.material_lookup, MaterialLookup::ModelDirectory);
        assert_eq!(config.default_color, [1.0, 1.0, 1.0]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_ron_config() {
        let config: ViewerConfig = ron::from_str(
            r#"(model_path: "cube.obj", default_color: (0.5, 0.5, 0.5), log_level: "debug")"#,
        )
        .unwrap();

        assert_eq!(config.model_path, "cube.obj");
        assert_eq!(config.default_color, [0.5, 0.5, 0.5]);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_level_filter_fallback() {
        let config = ViewerConfig::new().with_log_level("loud");
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_material_source_model_directory() {
        let config = ViewerConfig::new()
            .with_model_path("assets/forklift/forklift.obj")
            .with_material_lookup(MaterialLookup::ModelDirectory);
        assert_eq!(
            config.material_source().resolve("forklift.mtl"),
            PathBuf::from("assets/forklift/forklift.mtl")
        );

        let config = ViewerConfig::new().with_model_path("assets/forklift/forklift.obj");
        assert_eq!(config.material_source().resolve("forklift.mtl"), PathBuf::from("forklift.mtl"));
    }

    #[test]
    fn test_validate() {
        assert!(ViewerConfig::new().validate().is_ok());
        assert!(ViewerConfig::new().with_model_path(" ").validate().is_err());

        let mut config = ViewerConfig::new();
        config.default_color = [1.0, 2.0, 0.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!("objview_config_{}.toml", std::process::id()));
        let config = ViewerConfig::new()
            .with_model_path("scene.obj")
            .with_log_level("warn");

        config.save_to_file(&path).unwrap();
        let loaded = ViewerConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
