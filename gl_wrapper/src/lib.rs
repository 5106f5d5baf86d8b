pub mod context;
pub mod debug;
pub mod geometry;
pub mod program;
pub mod renderer;

#[cfg(any(test, feature = "recording"))]
pub mod recording;

#[cfg(feature = "webgl")]
pub mod webgl;

pub use context::{Capability, ClearMask, GlContext, Primitive, ShaderKind};
