use cgmath::Matrix4;
use log::{error, info};
use thiserror::Error;

use gl_wrapper::geometry::{GBError, Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{PBError, Program, ProgramBuilder};
use gl_wrapper::renderer::{DrawError, GlRenderer};
use gl_wrapper::GlContext;

use crate::camera::Camera;
use crate::config::RendererConfig;
use crate::scene::FrameTransforms;
use crate::shapes;

pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
pub const PROJECTION_UNIFORM: &str = "uPMatrix";
pub const MODEL_VIEW_UNIFORM: &str = "uMVMatrix";

/// Backing-store size of the canvas in device pixels (`canvas.width`/`canvas.height`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

pub struct SceneRenderer<G: GlContext> {
    renderer: GlRenderer<G>,
    program: Program<G>,
    triangle: Geometry<G>,
    square: Geometry<G>,
    camera: Camera,
    viewport: Viewport,
}

impl<G: GlContext> SceneRenderer<G> {
    pub fn new(gl: G, viewport: Viewport, config: &RendererConfig) -> Result<Self, RendererError> {
        let program = ProgramBuilder::new(
            include_str!("gl_shaders/position.glsl"),
            include_str!("gl_shaders/white.glsl"),
        )
        .with_attribute(POSITION_ATTRIBUTE)
        .with_uniform(PROJECTION_UNIFORM)
        .with_uniform(MODEL_VIEW_UNIFORM)
        .build(&gl)
        .map_err(|e| {
            error!("Couldn't initialize shaders: {e}");
            RendererError::Program(e)
        })?;

        let triangle = GeometryBuilder::new(&shapes::TRIANGLE)
            .with_attribute(VertexAttribute::Vec3)
            .with_primitive(shapes::TRIANGLE_PRIMITIVE)
            .build(&gl)?;

        let square = GeometryBuilder::new(&shapes::SQUARE)
            .with_attribute(VertexAttribute::Vec3)
            .with_primitive(shapes::SQUARE_PRIMITIVE)
            .build(&gl)?;

        let (buffer_w, buffer_h) = gl.drawing_buffer_size();
        info!("Drawing buffer is ({buffer_w}x{buffer_h})");

        let renderer = GlRenderer::new(gl);

        let [r, g, b, a] = config.clear_color;
        renderer.clear_color(r, g, b, a);
        renderer.enable_depth_test();

        Ok(Self {
            renderer,
            program,
            triangle,
            square,
            camera: config.camera,
            viewport,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Takes effect on the next `draw_scene`.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn draw_scene(&mut self) -> Result<(), RendererError> {
        self.renderer
            .resize(self.viewport.width, self.viewport.height);
        self.renderer.clear();

        let transforms = FrameTransforms::new(&self.camera, self.viewport);
        let projection = to_array(&transforms.projection);

        self.renderer.draw(
            &self.triangle,
            &self.program,
            &[
                (PROJECTION_UNIFORM, projection),
                (MODEL_VIEW_UNIFORM, to_array(&transforms.triangle)),
            ],
        )?;

        self.renderer.draw(
            &self.square,
            &self.program,
            &[
                (PROJECTION_UNIFORM, projection),
                (MODEL_VIEW_UNIFORM, to_array(&transforms.square)),
            ],
        )?;

        Ok(())
    }
}

fn to_array(m: &Matrix4<f32>) -> [f32; 16] {
    let raw: &[f32; 16] = m.as_ref();
    *raw
}

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Couldn't initialize shaders: {0}")]
    Program(PBError),
    #[error("Couldn't upload geometry: {0}")]
    Geometry(#[from] GBError),
    #[error("Draw failed: {0}")]
    Draw(#[from] DrawError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_wrapper::recording::{Call, RecordingContext};
    use gl_wrapper::{Capability, ClearMask, Primitive, ShaderKind};

    const VIEWPORT: Viewport = Viewport {
        width: 640,
        height: 480,
    };

    fn uniform_uploads(gl: &RecordingContext) -> Vec<(String, [f32; 16])> {
        gl.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::UniformMatrix4 { name, data, .. } => Some((name, data)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn init_state() {
        let gl = RecordingContext::new().with_drawing_buffer(640, 480);
        let _renderer = SceneRenderer::new(gl.clone(), VIEWPORT, &RendererConfig::default()).unwrap();

        let calls = gl.calls();
        assert!(calls.contains(&Call::ArrayBufferData(shapes::TRIANGLE.to_vec())));
        assert!(calls.contains(&Call::ArrayBufferData(shapes::SQUARE.to_vec())));
        assert!(calls.contains(&Call::ClearColor(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(calls.last(), Some(&Call::Enable(Capability::DepthTest)));
        assert_eq!(gl.live_buffers(), 2);
        assert_eq!(gl.live_programs(), 1);
        assert!(gl.draw_calls().is_empty());
    }

    #[test]
    fn one_draw_call_per_shape() {
        let gl = RecordingContext::new();
        let mut renderer = SceneRenderer::new(gl.clone(), VIEWPORT, &RendererConfig::default()).unwrap();

        gl.clear_calls();
        renderer.draw_scene().unwrap();

        assert_eq!(
            gl.draw_calls(),
            vec![
                (Primitive::Triangles, 0, 3),
                (Primitive::TriangleStrip, 0, 4),
            ]
        );

        let calls = gl.calls();
        assert_eq!(calls[0], Call::Viewport(0, 0, 640, 480));
        assert_eq!(calls[1], Call::Clear(ClearMask::COLOR_DEPTH));
    }

    #[test]
    fn uniforms_per_shape() {
        let gl = RecordingContext::new();
        let mut renderer = SceneRenderer::new(gl.clone(), VIEWPORT, &RendererConfig::default()).unwrap();

        gl.clear_calls();
        renderer.draw_scene().unwrap();

        let transforms = FrameTransforms::new(&Camera::default(), VIEWPORT);
        let uploads = uniform_uploads(&gl);
        let projection = to_array(&transforms.projection);

        assert_eq!(uploads.len(), 4);
        assert_eq!(uploads[0], (PROJECTION_UNIFORM.to_string(), projection));
        assert_eq!(uploads[2], (PROJECTION_UNIFORM.to_string(), projection));

        assert_eq!(uploads[1].0, MODEL_VIEW_UNIFORM);
        assert_eq!(uploads[1].1[12..], [-1.0, 0.0, -7.0, 1.0]);
        assert_eq!(uploads[3].0, MODEL_VIEW_UNIFORM);
        assert_eq!(uploads[3].1[12..], [2.0, 0.0, -7.0, 1.0]);
    }

    #[test]
    fn redraw_is_identical() {
        let gl = RecordingContext::new();
        let mut renderer = SceneRenderer::new(gl.clone(), VIEWPORT, &RendererConfig::default()).unwrap();

        renderer.draw_scene().unwrap();
        gl.clear_calls();
        renderer.draw_scene().unwrap();
        let second = gl.calls();

        // The program is already current, so the second pass skips useProgram.
        assert!(!second.iter().any(|c| matches!(c, Call::UseProgram(_))));
        assert_eq!(gl.draw_calls().len(), 2);
    }

    #[test]
    fn resize_updates_viewport_and_aspect() {
        let gl = RecordingContext::new();
        let mut renderer = SceneRenderer::new(gl.clone(), VIEWPORT, &RendererConfig::default()).unwrap();

        let wide = Viewport {
            width: 1000,
            height: 250,
        };
        renderer.resize(wide);
        gl.clear_calls();
        renderer.draw_scene().unwrap();

        assert_eq!(gl.calls()[0], Call::Viewport(0, 0, 1000, 250));
        let projection = &uniform_uploads(&gl)[0].1;
        assert!((projection[5] / projection[0] - 4.0).abs() < 1e-4);
    }

    #[test]
    fn zero_sized_canvas_still_draws() {
        let gl = RecordingContext::new();
        let empty = Viewport {
            width: 0,
            height: 0,
        };
        let mut renderer = SceneRenderer::new(gl.clone(), empty, &RendererConfig::default()).unwrap();

        renderer.draw_scene().unwrap();

        assert!(gl.calls().contains(&Call::Viewport(0, 0, 0, 0)));
        assert_eq!(gl.draw_calls().len(), 2);
    }

    #[test]
    fn custom_clear_color() {
        let gl = RecordingContext::new();
        let config = RendererConfig {
            clear_color: [0.2, 0.3, 0.4, 1.0],
            ..Default::default()
        };

        let _renderer = SceneRenderer::new(gl.clone(), VIEWPORT, &config).unwrap();

        assert!(gl.calls().contains(&Call::ClearColor(0.2, 0.3, 0.4, 1.0)));
    }

    #[test]
    fn shader_failure() {
        let gl = RecordingContext::new();
        gl.fail_compile(ShaderKind::Vertex, "bad vertex");

        let res = SceneRenderer::new(gl.clone(), VIEWPORT, &RendererConfig::default());

        assert!(matches!(
            res,
            Err(RendererError::Program(PBError::Compilation { .. }))
        ));
        assert_eq!(gl.live_buffers(), 0);
    }

    #[test]
    fn missing_attribute() {
        let gl = RecordingContext::new();
        gl.hide_location(POSITION_ATTRIBUTE);

        let res = SceneRenderer::new(gl.clone(), VIEWPORT, &RendererConfig::default());

        assert!(matches!(
            res,
            Err(RendererError::Program(PBError::MissingAttribute(_)))
        ));
    }

    #[test]
    fn drop_releases_resources() {
        let gl = RecordingContext::new();
        let renderer = SceneRenderer::new(gl.clone(), VIEWPORT, &RendererConfig::default()).unwrap();

        drop(renderer);

        assert_eq!(gl.live_buffers(), 0);
        assert_eq!(gl.live_programs(), 0);
    }
}
