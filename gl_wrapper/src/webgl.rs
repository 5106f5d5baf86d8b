use js_sys::Float32Array;
use web_sys::{
    WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader, WebGlUniformLocation,
};

use crate::context::{Capability, ClearMask, GlContext, Primitive, ShaderKind};

impl GlContext for Gl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, kind: ShaderKind) -> Option<WebGlShader> {
        let kind = match kind {
            ShaderKind::Vertex => Gl::VERTEX_SHADER,
            ShaderKind::Fragment => Gl::FRAGMENT_SHADER,
        };

        Gl::create_shader(self, kind)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        Gl::shader_source(self, shader, source)
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        Gl::compile_shader(self, shader)
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        Gl::delete_shader(self, Some(shader))
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        Gl::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        Gl::attach_shader(self, program, shader)
    }

    fn link_program(&self, program: &WebGlProgram) {
        Gl::link_program(self, program)
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        Gl::use_program(self, program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        Gl::delete_program(self, Some(program))
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        Gl::enable_vertex_attrib_array(self, index)
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_pointer_with_i32(index, size, Gl::FLOAT, normalized, stride, offset)
    }

    fn uniform_matrix4fv(&self, location: &WebGlUniformLocation, transpose: bool, data: &[f32; 16]) {
        self.uniform_matrix4fv_with_f32_array(Some(location), transpose, data)
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        Gl::create_buffer(self)
    }

    fn bind_array_buffer(&self, buffer: Option<&WebGlBuffer>) {
        self.bind_buffer(Gl::ARRAY_BUFFER, buffer)
    }

    fn array_buffer_data_f32(&self, data: &[f32]) {
        // Copies into JS memory, so later wasm allocations can't invalidate the view.
        let array = Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &array, Gl::STATIC_DRAW)
    }

    fn delete_buffer(&self, buffer: &WebGlBuffer) {
        Gl::delete_buffer(self, Some(buffer))
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        Gl::viewport(self, x, y, width, height)
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        Gl::clear_color(self, r, g, b, a)
    }

    fn clear(&self, mask: ClearMask) {
        let mut bits = 0;
        if mask.color {
            bits |= Gl::COLOR_BUFFER_BIT;
        }
        if mask.depth {
            bits |= Gl::DEPTH_BUFFER_BIT;
        }

        Gl::clear(self, bits)
    }

    fn enable(&self, cap: Capability) {
        let cap = match cap {
            Capability::DepthTest => Gl::DEPTH_TEST,
        };

        Gl::enable(self, cap)
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        let mode = match mode {
            Primitive::Triangles => Gl::TRIANGLES,
            Primitive::TriangleStrip => Gl::TRIANGLE_STRIP,
        };

        Gl::draw_arrays(self, mode, first, count)
    }

    fn drawing_buffer_size(&self) -> (i32, i32) {
        (self.drawing_buffer_width(), self.drawing_buffer_height())
    }
}
