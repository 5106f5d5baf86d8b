use gl_wrapper::Primitive;

pub const COMPONENTS: usize = 3;

#[rustfmt::skip]
pub const TRIANGLE: [f32; 9] = [
    0.0, 1.0, 0.0,
    -1.0, -1.0, 0.0,
    1.0, -1.0, 0.0,
];

pub const TRIANGLE_PRIMITIVE: Primitive = Primitive::Triangles;

#[rustfmt::skip]
pub const SQUARE: [f32; 12] = [
    1.0, 1.0, 0.0,
    -1.0, 1.0, 0.0,
    1.0, -1.0, 0.0,
    -1.0, -1.0, 0.0,
];

pub const SQUARE_PRIMITIVE: Primitive = Primitive::TriangleStrip;
