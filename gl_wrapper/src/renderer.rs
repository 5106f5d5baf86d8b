use thiserror::Error;

use crate::context::{Capability, ClearMask, GlContext};
use crate::geometry::Geometry;
use crate::program::{Program, UniformError};

pub struct GlRenderer<G: GlContext> {
    gl: G,
    current_program: u32,
}

impl<G: GlContext> GlRenderer<G> {
    pub fn new(gl: G) -> Self {
        Self {
            gl,
            current_program: 0,
        }
    }

    pub fn context(&self) -> &G {
        &self.gl
    }

    /// Issues exactly one draw call for `geometry`, after uploading `uniforms`.
    pub fn draw(
        &mut self,
        geometry: &Geometry<G>,
        program: &Program<G>,
        uniforms: &[(&str, [f32; 16])],
    ) -> Result<(), DrawError> {
        let p_id = program.get_id();
        if self.current_program != p_id {
            self.gl.use_program(Some(program.raw()));
            self.current_program = p_id;
        }

        if program.attributes().len() != geometry.attributes().len() {
            return Err(DrawError::AttributeMismatch {
                program: program.attributes().len(),
                geometry: geometry.attributes().len(),
            });
        }

        self.gl.bind_array_buffer(Some(geometry.buffer()));

        // A single attribute is tightly packed; GL takes stride 0 for that.
        let stride = if geometry.attributes().len() > 1 {
            (geometry.item_size() * std::mem::size_of::<f32>()) as i32
        } else {
            0
        };

        let mut offset = 0;

        for (location, attr) in program.attributes().iter().zip(geometry.attributes()) {
            self.gl.vertex_attrib_pointer_f32(
                *location,
                attr.size() as i32,
                false,
                stride,
                (offset * std::mem::size_of::<f32>()) as i32,
            );
            offset += attr.size();
        }

        for (name, value) in uniforms {
            program.set_mat4(name, value)?;
        }

        self.gl
            .draw_arrays(geometry.primitive(), 0, geometry.vertices() as i32);

        Ok(())
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
    }

    pub fn clear(&self) {
        self.gl.clear(ClearMask::COLOR_DEPTH);
    }

    pub fn enable_depth_test(&self) {
        self.gl.enable(Capability::DepthTest);
    }
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("program expects {program} attributes, geometry provides {geometry}")]
    AttributeMismatch { program: usize, geometry: usize },
    #[error(transparent)]
    Uniform(#[from] UniformError),
}
