use serde::Deserialize;
use thiserror::Error;

use crate::camera::{Camera, CameraError};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    pub canvas_id: String,
    /// Element whose text reports initialization progress. Skipped when `None`.
    pub status_id: Option<String>,
    /// Logs every GL call.
    pub debug: bool,
    pub clear_color: [f32; 4],
    pub camera: Camera,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_string(),
            status_id: Some("ptag".to_string()),
            debug: false,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            camera: Camera::default(),
        }
    }
}

impl RendererConfig {
    pub fn from_json5(src: &str) -> Result<Self, ConfigError> {
        let config: Self = json5::from_str(src).map_err(ConfigError::Format)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_id.is_empty() {
            return Err(ConfigError::Invalid("canvas_id is empty".to_string()));
        }

        if let Some(c) = self.clear_color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(ConfigError::Invalid(format!(
                "clear_color component {c} is outside [0, 1]"
            )));
        }

        self.camera.validate()?;

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not parse config: {0}")]
    Format(json5::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("Invalid camera: {0}")]
    Camera(#[from] CameraError),
}
