use log::debug;

use crate::context::{Capability, ClearMask, GlContext, Primitive, ShaderKind};

/// Logs every call made through the wrapped context at `debug` level.
#[derive(Clone)]
pub struct DebugContext<G: GlContext> {
    inner: G,
}

impl<G: GlContext> DebugContext<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: GlContext> GlContext for DebugContext<G> {
    type Shader = G::Shader;
    type Program = G::Program;
    type Buffer = G::Buffer;
    type UniformLocation = G::UniformLocation;

    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader> {
        debug!("gl.createShader {kind}");
        self.inner.create_shader(kind)
    }

    fn shader_source(&self, shader: &Self::Shader, source: &str) {
        debug!("gl.shaderSource <{} bytes>", source.len());
        self.inner.shader_source(shader, source)
    }

    fn compile_shader(&self, shader: &Self::Shader) {
        debug!("gl.compileShader");
        self.inner.compile_shader(shader)
    }

    fn shader_compile_status(&self, shader: &Self::Shader) -> bool {
        let status = self.inner.shader_compile_status(shader);
        debug!("gl.getShaderParameter COMPILE_STATUS = {status}");
        status
    }

    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String> {
        debug!("gl.getShaderInfoLog");
        self.inner.shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &Self::Shader) {
        debug!("gl.deleteShader");
        self.inner.delete_shader(shader)
    }

    fn create_program(&self) -> Option<Self::Program> {
        debug!("gl.createProgram");
        self.inner.create_program()
    }

    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader) {
        debug!("gl.attachShader");
        self.inner.attach_shader(program, shader)
    }

    fn link_program(&self, program: &Self::Program) {
        debug!("gl.linkProgram");
        self.inner.link_program(program)
    }

    fn program_link_status(&self, program: &Self::Program) -> bool {
        let status = self.inner.program_link_status(program);
        debug!("gl.getProgramParameter LINK_STATUS = {status}");
        status
    }

    fn program_info_log(&self, program: &Self::Program) -> Option<String> {
        debug!("gl.getProgramInfoLog");
        self.inner.program_info_log(program)
    }

    fn use_program(&self, program: Option<&Self::Program>) {
        debug!("gl.useProgram {}", if program.is_some() { "<program>" } else { "null" });
        self.inner.use_program(program)
    }

    fn delete_program(&self, program: &Self::Program) {
        debug!("gl.deleteProgram");
        self.inner.delete_program(program)
    }

    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32> {
        let location = self.inner.attrib_location(program, name);
        debug!("gl.getAttribLocation {name} = {location:?}");
        location
    }

    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        let location = self.inner.uniform_location(program, name);
        debug!("gl.getUniformLocation {name} found: {}", location.is_some());
        location
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        debug!("gl.enableVertexAttribArray {index}");
        self.inner.enable_vertex_attrib_array(index)
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        debug!("gl.vertexAttribPointer {index}, {size}, FLOAT, {normalized}, {stride}, {offset}");
        self.inner
            .vertex_attrib_pointer_f32(index, size, normalized, stride, offset)
    }

    fn uniform_matrix4fv(
        &self,
        location: &Self::UniformLocation,
        transpose: bool,
        data: &[f32; 16],
    ) {
        debug!("gl.uniformMatrix4fv {transpose}, {data:?}");
        self.inner.uniform_matrix4fv(location, transpose, data)
    }

    fn create_buffer(&self) -> Option<Self::Buffer> {
        debug!("gl.createBuffer");
        self.inner.create_buffer()
    }

    fn bind_array_buffer(&self, buffer: Option<&Self::Buffer>) {
        debug!("gl.bindBuffer ARRAY_BUFFER, {}", if buffer.is_some() { "<buffer>" } else { "null" });
        self.inner.bind_array_buffer(buffer)
    }

    fn array_buffer_data_f32(&self, data: &[f32]) {
        debug!("gl.bufferData ARRAY_BUFFER, {data:?}, STATIC_DRAW");
        self.inner.array_buffer_data_f32(data)
    }

    fn delete_buffer(&self, buffer: &Self::Buffer) {
        debug!("gl.deleteBuffer");
        self.inner.delete_buffer(buffer)
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        debug!("gl.viewport {x}, {y}, {width}, {height}");
        self.inner.viewport(x, y, width, height)
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        debug!("gl.clearColor {r}, {g}, {b}, {a}");
        self.inner.clear_color(r, g, b, a)
    }

    fn clear(&self, mask: ClearMask) {
        debug!("gl.clear {mask}");
        self.inner.clear(mask)
    }

    fn enable(&self, cap: Capability) {
        debug!("gl.enable {cap:?}");
        self.inner.enable(cap)
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        debug!("gl.drawArrays {mode}, {first}, {count}");
        self.inner.draw_arrays(mode, first, count)
    }

    fn drawing_buffer_size(&self) -> (i32, i32) {
        self.inner.drawing_buffer_size()
    }
}
