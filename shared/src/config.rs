//! On-disk configuration of the water surface, stored as RON.

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use bevy_ecs::resource::Resource;
use bevy_log::{info, warn};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::water::GridDimensions;
use crate::{
    DEFAULT_GIZMO_COLOR, DEFAULT_HEIGHT, DEFAULT_WATER_COLOR, DEFAULT_WIDTH, DEFAULT_X_VERTICES,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Ron(#[from] ron::Error),
}

/// Water surface settings loaded at startup.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterConfig {
    #[serde(default = "default_x_vertices")]
    pub x_vertices: u32,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_gizmo_color")]
    pub gizmo_color: [f32; 4],
    #[serde(default = "default_water_color")]
    pub water_color: [f32; 4],
}

fn default_x_vertices() -> u32 {
    DEFAULT_X_VERTICES
}

fn default_width() -> f32 {
    DEFAULT_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_HEIGHT
}

fn default_gizmo_color() -> [f32; 4] {
    DEFAULT_GIZMO_COLOR
}

fn default_water_color() -> [f32; 4] {
    DEFAULT_WATER_COLOR
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            x_vertices: DEFAULT_X_VERTICES,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gizmo_color: DEFAULT_GIZMO_COLOR,
            water_color: DEFAULT_WATER_COLOR,
        }
    }
}

impl WaterConfig {
    /// Surface dimensions, clamped into the range the editor accepts.
    pub fn dimensions(&self) -> GridDimensions {
        let dimensions = GridDimensions::clamped(self.width, self.height, self.x_vertices);
        if dimensions.width != self.width
            || dimensions.height != self.height
            || dimensions.x_vertices != self.x_vertices
        {
            warn!(
                "Water config out of range ({} x {}, {} columns), using {} x {}, {} columns",
                self.width,
                self.height,
                self.x_vertices,
                dimensions.width,
                dimensions.height,
                dimensions.x_vertices
            );
        }
        dimensions
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(ron::de::from_str(contents)?)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty_config = PrettyConfig::new().with_depth_limit(2);
        Ok(ron::ser::to_string_pretty(self, pretty_config)?)
    }

    /// Loads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(
                "Water config not found: {}. Using defaults.",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::from_ron_str(&contents)?;
        info!("Loaded water config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let serialized = self.to_ron_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        file.write_all(serialized.as_bytes())?;
        Ok(())
    }
}
