//! Browser tests for the DOM renderer: `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use pangrid_engine::{Content, DomRenderer, Footprint, RectId, Rectangle, Renderer};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn rect(id: u32, content: Content) -> Rectangle {
    Rectangle {
        id: RectId::from_raw(id),
        x: 4.0,
        y: 4.0,
        width: 168.0,
        height: 80.0,
        footprint: Footprint::new(0, 0, 2, 1),
        color: "#7C4DFF".into(),
        content,
    }
}

#[wasm_bindgen_test]
fn create_builds_cell_markup() {
    let container = mount("pangrid-create");
    let mut renderer = DomRenderer::new("pangrid-create", None, None, 10).unwrap();

    renderer.create(&rect(1, Content::Text("Tile".into()))).unwrap();
    renderer.position(RectId::from_raw(1), 12.0, 34.0);

    let cell = container.first_element_child().unwrap();
    assert_eq!(cell.class_name(), "grid-cell");
    assert_eq!(cell.get_attribute("data-rect-id").as_deref(), Some("1"));
    assert_eq!(cell.text_content().as_deref(), Some("Tile"));
    assert_eq!(renderer.live_elements(), 1);
}

#[wasm_bindgen_test]
fn retire_forgets_the_element() {
    mount("pangrid-retire");
    let mut renderer = DomRenderer::new("pangrid-retire", None, None, 10).unwrap();
    renderer.create(&rect(2, Content::Image("x.png".into()))).unwrap();
    renderer.retire(RectId::from_raw(2), 0);
    assert_eq!(renderer.live_elements(), 0);
}

#[wasm_bindgen_test]
fn missing_container_is_an_error() {
    assert!(DomRenderer::new("pangrid-nowhere", None, None, 10).is_err());
}

#[wasm_bindgen_test]
fn marker_and_cursor_follow_the_session() {
    use wasm_bindgen::JsCast;

    let container = mount("pangrid-cursor");
    let marker = mount("pangrid-marker");
    let mut renderer =
        DomRenderer::new("pangrid-cursor", None, Some("pangrid-marker"), 10).unwrap();

    renderer.place_center_marker(640.0, 360.0);
    let marker_style = marker.dyn_into::<web_sys::HtmlElement>().unwrap().style();
    assert_eq!(marker_style.get_property_value("left").unwrap(), "640px");
    assert_eq!(marker_style.get_property_value("top").unwrap(), "360px");

    renderer.set_dragging(true);
    let style = container.dyn_into::<web_sys::HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("cursor").unwrap(), "grabbing");
    renderer.set_dragging(false);
    assert_eq!(style.get_property_value("cursor").unwrap(), "grab");
}
