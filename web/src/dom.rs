use log::warn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, WebGlRenderingContext};

pub fn document() -> Result<Document, WebError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(WebError::NoDocument)
}

pub fn canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, WebError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::MissingCanvas(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| WebError::NotACanvas(id.to_string()))
}

pub fn webgl_context(canvas: &HtmlCanvasElement) -> Result<WebGlRenderingContext, WebError> {
    canvas
        .get_context("webgl")
        .map_err(|e| WebError::Js(format!("{e:?}")))?
        .ok_or(WebError::NoContext)?
        .dyn_into::<WebGlRenderingContext>()
        .map_err(|_| WebError::NoContext)
}

/// Text element reporting initialization progress to the page.
pub struct StatusLine {
    element: Option<Element>,
}

impl StatusLine {
    pub fn find(document: &Document, id: Option<&str>) -> Self {
        let element = id.and_then(|id| {
            let element = document.get_element_by_id(id);
            if element.is_none() {
                warn!("Status element #{id} not found");
            }
            element
        });

        Self { element }
    }

    pub fn set(&self, text: &str) {
        if let Some(element) = &self.element {
            element.set_text_content(Some(text));
        }
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("No document available")]
    NoDocument,
    #[error("Couldn't retrieve canvas #{0} from DOM")]
    MissingCanvas(String),
    #[error("Element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("Couldn't retrieve WebGL context")]
    NoContext,
    #[error("{0}")]
    Js(String),
}

impl From<WebError> for JsValue {
    fn from(e: WebError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
