use std::sync::atomic::{AtomicU32, Ordering};

use thiserror::Error;

use crate::context::{GlContext, ShaderKind};

static NEXT_PROGRAM_ID: AtomicU32 = AtomicU32::new(1);

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
    attributes: Vec<&'a str>,
    uniforms: Vec<&'a str>,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
            attributes: Vec::new(),
            uniforms: Vec::new(),
        }
    }

    /// Attributes are bound to vertex data in the order they are added.
    pub fn with_attribute(mut self, name: &'a str) -> Self {
        self.attributes.push(name);
        self
    }

    pub fn with_uniform(mut self, name: &'a str) -> Self {
        self.uniforms.push(name);
        self
    }

    pub fn build<G: GlContext>(self, gl: &G) -> Result<Program<G>, PBError> {
        let vert = compile(gl, ShaderKind::Vertex, self.vert)?;
        let frag = match compile(gl, ShaderKind::Fragment, self.frag) {
            Ok(frag) => frag,
            Err(e) => {
                gl.delete_shader(&vert);
                return Err(e);
            }
        };

        let program = match gl.create_program() {
            Some(program) => program,
            None => {
                gl.delete_shader(&vert);
                gl.delete_shader(&frag);
                return Err(PBError::Allocation);
            }
        };
        gl.attach_shader(&program, &vert);
        gl.attach_shader(&program, &frag);
        gl.link_program(&program);

        gl.delete_shader(&vert);
        gl.delete_shader(&frag);

        if !gl.program_link_status(&program) {
            let log = gl.program_info_log(&program).unwrap_or_default();
            gl.delete_program(&program);
            return Err(PBError::Linking(log));
        }

        // From here on the program is owned, so early returns release it.
        let mut program = Program {
            gl: gl.clone(),
            id: NEXT_PROGRAM_ID.fetch_add(1, Ordering::Relaxed),
            program,
            attributes: Vec::with_capacity(self.attributes.len()),
            uniforms: Vec::with_capacity(self.uniforms.len()),
        };

        gl.use_program(Some(&program.program));

        for name in self.attributes {
            let location = gl
                .attrib_location(&program.program, name)
                .ok_or_else(|| PBError::MissingAttribute(name.to_string()))?;
            gl.enable_vertex_attrib_array(location);
            program.attributes.push(location);
        }

        for name in self.uniforms {
            let location = gl
                .uniform_location(&program.program, name)
                .ok_or_else(|| PBError::MissingUniform(name.to_string()))?;
            program.uniforms.push((name.to_string(), location));
        }

        Ok(program)
    }
}

fn compile<G: GlContext>(gl: &G, kind: ShaderKind, source: &str) -> Result<G::Shader, PBError> {
    let shader = gl.create_shader(kind).ok_or(PBError::Allocation)?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl.shader_compile_status(&shader) {
        let log = gl.shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(&shader);
        return Err(PBError::Compilation { kind, log });
    }

    Ok(shader)
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("could not allocate GL object")]
    Allocation,
    #[error("{kind} shader: {log}")]
    Compilation { kind: ShaderKind, log: String },
    #[error("{0}")]
    Linking(String),
    #[error("attribute `{0}` is not active in program")]
    MissingAttribute(String),
    #[error("uniform `{0}` is not active in program")]
    MissingUniform(String),
}

#[derive(Debug, Error)]
pub enum UniformError {
    #[error("unknown uniform `{0}`")]
    Unknown(String),
}

pub struct Program<G: GlContext> {
    gl: G,
    id: u32,
    program: G::Program,
    attributes: Vec<u32>,
    uniforms: Vec<(String, G::UniformLocation)>,
}

impl<G: GlContext> Program<G> {
    pub fn get_id(&self) -> u32 {
        self.id
    }

    pub fn raw(&self) -> &G::Program {
        &self.program
    }

    pub fn attributes(&self) -> &[u32] {
        &self.attributes
    }

    pub fn attribute(&self, index: usize) -> Option<u32> {
        self.attributes.get(index).copied()
    }

    /// Uploads a column-major 4x4 matrix. The program must be current.
    pub fn set_mat4(&self, name: &str, value: &[f32; 16]) -> Result<(), UniformError> {
        let (_, location) = self
            .uniforms
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| UniformError::Unknown(name.to_string()))?;

        self.gl.uniform_matrix4fv(location, false, value);
        Ok(())
    }
}

impl<G: GlContext> Drop for Program<G> {
    fn drop(&mut self) {
        self.gl.delete_program(&self.program);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Call, RecordingContext};

    const VERT: &str = "attribute vec3 aPos; uniform mat4 uM; void main() {}";
    const FRAG: &str = "void main() {}";

    #[test]
    fn build_resolves_locations() {
        let gl = RecordingContext::new();
        let program = ProgramBuilder::new(VERT, FRAG)
            .with_attribute("aPos")
            .with_uniform("uM")
            .build(&gl)
            .unwrap();

        assert_eq!(program.attributes().len(), 1);
        let location = program.attribute(0).unwrap();
        assert!(gl
            .calls()
            .contains(&Call::EnableVertexAttribArray(location)));
        assert!(gl
            .calls()
            .contains(&Call::UseProgram(Some(*program.raw()))));
        assert_eq!(gl.live_shaders(), 0);
    }

    #[test]
    fn compile_error_carries_log() {
        let gl = RecordingContext::new();
        gl.fail_compile(ShaderKind::Fragment, "ERROR: 0:1: syntax error");

        let err = ProgramBuilder::new(VERT, FRAG).build(&gl).err().unwrap();

        match err {
            PBError::Compilation { kind, log } => {
                assert_eq!(kind, ShaderKind::Fragment);
                assert_eq!(log, "ERROR: 0:1: syntax error");
            }
            e => panic!("unexpected error {e:?}"),
        }
        assert_eq!(gl.live_shaders(), 0);
        assert_eq!(gl.live_programs(), 0);
    }

    #[test]
    fn link_error() {
        let gl = RecordingContext::new();
        gl.fail_link("varying mismatch");

        let err = ProgramBuilder::new(VERT, FRAG).build(&gl).err().unwrap();

        assert!(matches!(err, PBError::Linking(log) if log == "varying mismatch"));
        assert_eq!(gl.live_programs(), 0);
        assert_eq!(gl.live_shaders(), 0);
    }

    #[test]
    fn program_allocation_failure_releases_shaders() {
        let gl = RecordingContext::new();
        gl.fail_create_program();

        let err = ProgramBuilder::new(VERT, FRAG).build(&gl).err().unwrap();

        assert!(matches!(err, PBError::Allocation));
        assert_eq!(gl.live_shaders(), 0);
        assert_eq!(gl.live_programs(), 0);
    }

    #[test]
    fn missing_uniform_releases_program() {
        let gl = RecordingContext::new();
        gl.hide_location("uM");

        let err = ProgramBuilder::new(VERT, FRAG)
            .with_uniform("uM")
            .build(&gl)
            .err()
            .unwrap();

        assert!(matches!(err, PBError::MissingUniform(name) if name == "uM"));
        assert_eq!(gl.live_programs(), 0);
    }

    #[test]
    fn set_unknown_uniform() {
        let gl = RecordingContext::new();
        let program = ProgramBuilder::new(VERT, FRAG).build(&gl).unwrap();

        assert!(program.set_mat4("uNope", &[0.0; 16]).is_err());
    }

    #[test]
    fn ids_are_unique() {
        let gl = RecordingContext::new();
        let a = ProgramBuilder::new(VERT, FRAG).build(&gl).unwrap();
        let b = ProgramBuilder::new(VERT, FRAG).build(&gl).unwrap();

        assert_ne!(a.get_id(), b.get_id());
    }

    #[test]
    fn drop_deletes_program() {
        let gl = RecordingContext::new();
        let program = ProgramBuilder::new(VERT, FRAG).build(&gl).unwrap();
        assert_eq!(gl.live_programs(), 1);

        drop(program);
        assert_eq!(gl.live_programs(), 0);
    }
}
