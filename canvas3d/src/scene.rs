use cgmath::{Matrix4, SquareMatrix, Vector3};

use crate::camera::Camera;
use crate::renderer::Viewport;

pub const TRIANGLE_OFFSET: Vector3<f32> = Vector3 {
    x: -1.0,
    y: 0.0,
    z: -7.0,
};
/// Applied on top of the triangle's model-view.
pub const SQUARE_STEP: Vector3<f32> = Vector3 {
    x: 3.0,
    y: 0.0,
    z: 0.0,
};

/// Matrices uploaded for a single frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameTransforms {
    pub projection: Matrix4<f32>,
    pub triangle: Matrix4<f32>,
    pub square: Matrix4<f32>,
}

impl FrameTransforms {
    pub fn new(camera: &Camera, viewport: Viewport) -> Self {
        let mut model_view = Matrix4::identity();

        model_view = model_view * Matrix4::from_translation(TRIANGLE_OFFSET);
        let triangle = model_view;

        model_view = model_view * Matrix4::from_translation(SQUARE_STEP);
        let square = model_view;

        Self {
            projection: camera.projection(viewport),
            triangle,
            square,
        }
    }
}
