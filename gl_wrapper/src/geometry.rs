use thiserror::Error;

use crate::context::{GlContext, Primitive};

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    primitive: Primitive,
    data: &'a [f32],
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            data,
            attributes: Vec::new(),
            primitive: Primitive::Triangles,
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = primitive;
        self
    }

    pub fn build<G: GlContext>(self, gl: &G) -> Result<Geometry<G>, GBError> {
        let total_len: usize = self.attributes.iter().map(|a| a.size()).sum();

        if total_len == 0 || self.data.len() % total_len != 0 {
            return Err(GBError::InvalidDataLength);
        }

        if self.data.is_empty() {
            return Err(GBError::Empty);
        }

        let buffer = gl.create_buffer().ok_or(GBError::Allocation)?;

        gl.bind_array_buffer(Some(&buffer));
        gl.array_buffer_data_f32(self.data);

        let vertices = self.data.len() / total_len;

        Ok(Geometry {
            gl: gl.clone(),
            buffer,
            attributes: self.attributes,
            primitive: self.primitive,
            vertices,
        })
    }
}

#[derive(Debug, Error)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Geometry has no vertices")]
    Empty,
    #[error("could not allocate GL buffer")]
    Allocation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexAttribute {
    Float,
    Vec2,
    Vec3,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Float => 1,
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
        }
    }
}

pub struct Geometry<G: GlContext> {
    gl: G,
    buffer: G::Buffer,
    attributes: Vec<VertexAttribute>,
    primitive: Primitive,
    vertices: usize,
}

impl<G: GlContext> Geometry<G> {
    pub fn buffer(&self) -> &G::Buffer {
        &self.buffer
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Float components per vertex, across all attributes.
    pub fn item_size(&self) -> usize {
        self.attributes.iter().map(|a| a.size()).sum()
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }
}

impl<G: GlContext> Drop for Geometry<G> {
    fn drop(&mut self) {
        self.gl.delete_buffer(&self.buffer);
    }
}
