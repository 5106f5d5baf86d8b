//! A [`GlContext`] that records calls instead of talking to a GPU.
//!
//! Handles are plain integers, allocated per object kind starting at 1.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::context::{Capability, ClearMask, GlContext, Primitive, ShaderKind};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateShader(ShaderKind, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    UniformMatrix4 {
        name: String,
        transpose: bool,
        data: [f32; 16],
    },
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    ArrayBufferData(Vec<f32>),
    DeleteBuffer(u32),
    Viewport(i32, i32, i32, i32),
    ClearColor(f32, f32, f32, f32),
    Clear(ClearMask),
    Enable(Capability),
    DrawArrays(Primitive, i32, i32),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    next_handle: u32,
    shader_kinds: Vec<(u32, ShaderKind)>,
    live_shaders: HashSet<u32>,
    live_programs: HashSet<u32>,
    live_buffers: HashSet<u32>,
    attributes: Vec<String>,
    failing_shader: Option<(ShaderKind, String)>,
    failing_link: Option<String>,
    failing_program: bool,
    hidden: HashSet<String>,
    drawing_buffer: (i32, i32),
}

impl State {
    fn handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }
}

#[derive(Clone, Default)]
pub struct RecordingContext {
    state: Rc<RefCell<State>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        let ctx = Self::default();
        ctx.state.borrow_mut().drawing_buffer = (300, 150);
        ctx
    }

    pub fn with_drawing_buffer(self, width: i32, height: i32) -> Self {
        self.state.borrow_mut().drawing_buffer = (width, height);
        self
    }

    pub fn fail_compile(&self, kind: ShaderKind, log: &str) {
        self.state.borrow_mut().failing_shader = Some((kind, log.to_string()));
    }

    pub fn fail_link(&self, log: &str) {
        self.state.borrow_mut().failing_link = Some(log.to_string());
    }

    pub fn fail_create_program(&self) {
        self.state.borrow_mut().failing_program = true;
    }

    /// Makes attribute and uniform lookups for `name` fail.
    pub fn hide_location(&self, name: &str) {
        self.state.borrow_mut().hidden.insert(name.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn draw_calls(&self) -> Vec<(Primitive, i32, i32)> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::DrawArrays(mode, first, count) => Some((*mode, *first, *count)),
                _ => None,
            })
            .collect()
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().live_shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().live_programs.len()
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().live_buffers.len()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl GlContext for RecordingContext {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn create_shader(&self, kind: ShaderKind) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        let id = state.handle();
        state.shader_kinds.push((id, kind));
        state.live_shaders.insert(id);
        state.calls.push(Call::CreateShader(kind, id));
        Some(id)
    }

    fn shader_source(&self, _shader: &u32, _source: &str) {}

    fn compile_shader(&self, shader: &u32) {
        self.record(Call::CompileShader(*shader));
    }

    fn shader_compile_status(&self, shader: &u32) -> bool {
        let state = self.state.borrow();
        let kind = state
            .shader_kinds
            .iter()
            .find(|(id, _)| id == shader)
            .map(|(_, kind)| *kind);

        !matches!((&state.failing_shader, kind), (Some((failing, _)), Some(kind)) if *failing == kind)
    }

    fn shader_info_log(&self, _shader: &u32) -> Option<String> {
        self.state
            .borrow()
            .failing_shader
            .as_ref()
            .map(|(_, log)| log.clone())
    }

    fn delete_shader(&self, shader: &u32) {
        let mut state = self.state.borrow_mut();
        state.live_shaders.remove(shader);
        state.calls.push(Call::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        if state.failing_program {
            return None;
        }

        let id = state.handle();
        state.live_programs.insert(id);
        state.calls.push(Call::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.record(Call::AttachShader(*program, *shader));
    }

    fn link_program(&self, program: &u32) {
        self.record(Call::LinkProgram(*program));
    }

    fn program_link_status(&self, _program: &u32) -> bool {
        self.state.borrow().failing_link.is_none()
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        self.state.borrow().failing_link.clone()
    }

    fn use_program(&self, program: Option<&u32>) {
        self.record(Call::UseProgram(program.copied()));
    }

    fn delete_program(&self, program: &u32) {
        let mut state = self.state.borrow_mut();
        state.live_programs.remove(program);
        state.calls.push(Call::DeleteProgram(*program));
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        if state.hidden.contains(name) {
            return None;
        }

        let index = match state.attributes.iter().position(|a| a == name) {
            Some(i) => i,
            None => {
                state.attributes.push(name.to_string());
                state.attributes.len() - 1
            }
        };

        Some(index as u32)
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<String> {
        if self.state.borrow().hidden.contains(name) {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::VertexAttribPointer {
            index,
            size,
            normalized,
            stride,
            offset,
        });
    }

    fn uniform_matrix4fv(&self, location: &String, transpose: bool, data: &[f32; 16]) {
        self.record(Call::UniformMatrix4 {
            name: location.clone(),
            transpose,
            data: *data,
        });
    }

    fn create_buffer(&self) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        let id = state.handle();
        state.live_buffers.insert(id);
        state.calls.push(Call::CreateBuffer(id));
        Some(id)
    }

    fn bind_array_buffer(&self, buffer: Option<&u32>) {
        self.record(Call::BindArrayBuffer(buffer.copied()));
    }

    fn array_buffer_data_f32(&self, data: &[f32]) {
        self.record(Call::ArrayBufferData(data.to_vec()));
    }

    fn delete_buffer(&self, buffer: &u32) {
        let mut state = self.state.borrow_mut();
        state.live_buffers.remove(buffer);
        state.calls.push(Call::DeleteBuffer(*buffer));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor(r, g, b, a));
    }

    fn clear(&self, mask: ClearMask) {
        self.record(Call::Clear(mask));
    }

    fn enable(&self, cap: Capability) {
        self.record(Call::Enable(cap));
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        self.record(Call::DrawArrays(mode, first, count));
    }

    fn drawing_buffer_size(&self) -> (i32, i32) {
        self.state.borrow().drawing_buffer
    }
}
