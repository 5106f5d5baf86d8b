//! A fixed WebGL scene: one white triangle and one white square, seen through
//! a perspective camera. Everything GPU-facing goes through
//! [`gl_wrapper::GlContext`], so the same code drives the browser context and
//! the recording context used in tests.

pub mod camera;
pub mod config;
pub mod renderer;
pub mod scene;
pub mod shapes;

pub use config::{ConfigError, RendererConfig};
pub use renderer::{RendererError, SceneRenderer, Viewport};
