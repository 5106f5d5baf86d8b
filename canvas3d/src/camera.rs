use cgmath::{perspective, Deg, Matrix4};
use serde::Deserialize;
use thiserror::Error;

use crate::renderer::Viewport;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn aspect_ratio(viewport: Viewport) -> f32 {
        viewport.width.max(1) as f32 / viewport.height.max(1) as f32
    }

    pub fn projection(&self, viewport: Viewport) -> Matrix4<f32> {
        perspective(
            Deg(self.fov_y),
            Self::aspect_ratio(viewport),
            self.near,
            self.far,
        )
    }

    pub fn validate(&self) -> Result<(), CameraError> {
        if !(self.fov_y > 0.0 && self.fov_y < 180.0) {
            return Err(CameraError::FieldOfView(self.fov_y));
        }

        if self.near <= 0.0 {
            return Err(CameraError::Near(self.near));
        }

        if self.far <= self.near {
            return Err(CameraError::Far {
                near: self.near,
                far: self.far,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    #[error("fov_y must be in (0, 180), got {0}")]
    FieldOfView(f32),
    #[error("near must be positive, got {0}")]
    Near(f32),
    #[error("far ({far}) must be greater than near ({near})")]
    Far { near: f32, far: f32 },
}
