//! Browser entry point for the canvas3d demo.
//!
//! ```js
//! import init, { CanvasApp } from './pkg/canvas3d_web.js';
//!
//! await init();
//! const app = new CanvasApp(`{ canvas_id: 'canvas', debug: false }`);
//! app.draw();
//! ```

use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::WebGlRenderingContext;

use canvas3d::{RendererConfig, RendererError, SceneRenderer, Viewport};
use gl_wrapper::debug::DebugContext;

mod dom;

pub use dom::WebError;

use dom::StatusLine;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only when a logger is already installed.
    console_log::init_with_level(level).ok();
}

enum AppRenderer {
    Plain(SceneRenderer<WebGlRenderingContext>),
    Debug(SceneRenderer<DebugContext<WebGlRenderingContext>>),
}

impl AppRenderer {
    fn new(
        gl: WebGlRenderingContext,
        viewport: Viewport,
        config: &RendererConfig,
    ) -> Result<Self, RendererError> {
        Ok(if config.debug {
            Self::Debug(SceneRenderer::new(
                DebugContext::new(gl),
                viewport,
                config,
            )?)
        } else {
            Self::Plain(SceneRenderer::new(gl, viewport, config)?)
        })
    }

    fn draw_scene(&mut self) -> Result<(), RendererError> {
        match self {
            Self::Plain(r) => r.draw_scene(),
            Self::Debug(r) => r.draw_scene(),
        }
    }
}

#[wasm_bindgen]
pub struct CanvasApp {
    renderer: AppRenderer,
}

#[wasm_bindgen]
impl CanvasApp {
    /// Initializes WebGL on the configured canvas and draws the scene once.
    ///
    /// `config` is optional JSON5 text; missing fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<CanvasApp, JsValue> {
        let config = match config {
            Some(src) => RendererConfig::from_json5(&src).map_err(|e| {
                error!("{e}");
                JsValue::from_str(&e.to_string())
            })?,
            None => RendererConfig::default(),
        };

        let document = dom::document()?;
        let status = StatusLine::find(&document, config.status_id.as_deref());
        status.set("Initializing...");

        let (gl, viewport) = match init_gl(&document, &config) {
            Ok(v) => v,
            Err(e) => {
                error!("{e}");
                status.set("WebGL initialization failed :(");
                return Err(e.into());
            }
        };

        info!("WebGL initialized on #{}", config.canvas_id);
        status.set("WebGL initialized!");

        let mut renderer = AppRenderer::new(gl, viewport, &config).map_err(|e| {
            error!("{e}");
            JsValue::from_str(&e.to_string())
        })?;

        renderer.draw_scene().map_err(|e| {
            error!("{e}");
            JsValue::from_str(&e.to_string())
        })?;

        Ok(Self { renderer })
    }

    /// Re-issues the render pass.
    pub fn draw(&mut self) -> Result<(), JsValue> {
        self.renderer.draw_scene().map_err(|e| {
            error!("{e}");
            JsValue::from_str(&e.to_string())
        })
    }
}

fn init_gl(
    document: &web_sys::Document,
    config: &RendererConfig,
) -> Result<(WebGlRenderingContext, Viewport), WebError> {
    let canvas = dom::canvas(document, &config.canvas_id)?;
    let gl = dom::webgl_context(&canvas)?;

    let viewport = Viewport {
        width: canvas.width(),
        height: canvas.height(),
    };

    Ok((gl, viewport))
}
