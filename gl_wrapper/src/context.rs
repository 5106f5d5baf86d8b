use std::fmt::{Display, Formatter};

/// The subset of a GL(ES) context used by the wrappers in this crate.
///
/// Handles are owned by the implementation and released through the matching
/// `delete_*` call. Contexts are expected to be cheap to clone, since every
/// RAII wrapper keeps its own copy to release its object on drop.
pub trait GlContext: Clone {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn use_program(&self, program: Option<&Self::Program>);
    fn delete_program(&self, program: &Self::Program);

    /// `None` when the attribute is not active in the linked program.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn uniform_matrix4fv(&self, location: &Self::UniformLocation, transpose: bool, data: &[f32; 16]);

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: Option<&Self::Buffer>);
    /// Uploads to the currently bound array buffer with `STATIC_DRAW` usage.
    fn array_buffer_data_f32(&self, data: &[f32]);
    fn delete_buffer(&self, buffer: &Self::Buffer);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: ClearMask);
    fn enable(&self, cap: Capability);
    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32);

    fn drawing_buffer_size(&self) -> (i32, i32);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl Display for ShaderKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderKind::Vertex => write!(f, "vertex"),
            ShaderKind::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    TriangleStrip,
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Primitive::Triangles => write!(f, "TRIANGLES"),
            Primitive::TriangleStrip => write!(f, "TRIANGLE_STRIP"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    DepthTest,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClearMask {
    pub color: bool,
    pub depth: bool,
}

impl ClearMask {
    pub const COLOR_DEPTH: Self = Self {
        color: true,
        depth: true,
    };
}

impl Display for ClearMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.color, self.depth) {
            (true, true) => write!(f, "COLOR_BUFFER_BIT | DEPTH_BUFFER_BIT"),
            (true, false) => write!(f, "COLOR_BUFFER_BIT"),
            (false, true) => write!(f, "DEPTH_BUFFER_BIT"),
            (false, false) => write!(f, "0"),
        }
    }
}
