#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use canvas3d_web::CanvasApp;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(320);
    canvas.set_height(240);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn draws_on_named_canvas() {
    add_canvas("draws");

    let mut app = CanvasApp::new(Some("{ canvas_id: 'draws', status_id: null }".into())).unwrap();

    assert!(app.draw().is_ok());
}

#[wasm_bindgen_test]
fn debug_context() {
    add_canvas("debug");

    let app = CanvasApp::new(Some("{ canvas_id: 'debug', debug: true }".into()));

    assert!(app.is_ok());
}

#[wasm_bindgen_test]
fn zero_width_canvas() {
    add_canvas("collapsed").set_width(0);

    let mut app =
        CanvasApp::new(Some("{ canvas_id: 'collapsed', status_id: null }".into())).unwrap();

    assert!(app.draw().is_ok());
}

#[wasm_bindgen_test]
fn missing_canvas() {
    let err = CanvasApp::new(Some("{ canvas_id: 'nope' }".into())).err().unwrap();

    assert_eq!(
        err.as_string().unwrap(),
        "Couldn't retrieve canvas #nope from DOM"
    );
}

#[wasm_bindgen_test]
fn bad_config() {
    assert!(CanvasApp::new(Some("{ fov: 3 }".into())).is_err());
}
