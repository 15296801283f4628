//! DOM renderer: one absolutely positioned `div.grid-cell` per rectangle.
//!
//! Markup per rectangle:
//! ```text
//! <div class="grid-cell [visible]" data-rect-id="N" style="left/top/width/height/background-color">
//!   <div class="rectangle-content"><p>Label</p> | <img src=".." alt="Grid item"></div>
//! </div>
//! ```
//! The host's CSS animates the `visible` class; the host reads `data-rect-id`
//! on click and asks the engine for details.

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{RenderError, Renderer};
use crate::domain::rectangle::{Content, RectId, Rectangle};

pub struct DomRenderer {
    document: Document,
    container: HtmlElement,
    count: Option<Element>,
    marker: Option<HtmlElement>,
    elements: HashMap<RectId, HtmlElement>,
    fade_in_ms: i32,
}

impl DomRenderer {
    pub fn new(
        container_id: &str,
        count_id: Option<&str>,
        marker_id: Option<&str>,
        fade_in_ms: u32,
    ) -> Result<Self, RenderError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(RenderError::Unavailable("document"))?;
        let container = html_element_by_id(&document, container_id)?;
        let count = count_id.and_then(|id| document.get_element_by_id(id));
        let marker = match marker_id {
            Some(id) => Some(html_element_by_id(&document, id)?),
            None => None,
        };

        Ok(Self {
            document,
            container,
            count,
            marker,
            elements: HashMap::new(),
            fade_in_ms: i32::try_from(fade_in_ms).unwrap_or(i32::MAX),
        })
    }

    /// Visuals currently attached (not yet retired).
    pub fn live_elements(&self) -> usize {
        self.elements.len()
    }

    fn build_content(&self, content: &Content) -> Result<Element, RenderError> {
        let wrapper = self.document.create_element("div")?;
        wrapper.set_class_name("rectangle-content");
        match content {
            Content::Text(label) => {
                let p = self.document.create_element("p")?;
                p.set_text_content(Some(label.as_str()));
                wrapper.append_child(&p)?;
            }
            Content::Image(url) => {
                let img = self.document.create_element("img")?;
                img.set_attribute("src", url)?;
                img.set_attribute("alt", "Grid item")?;
                wrapper.append_child(&img)?;
            }
        }
        Ok(wrapper)
    }
}

impl Renderer for DomRenderer {
    fn create(&mut self, rect: &Rectangle) -> Result<(), RenderError> {
        let el: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| RenderError::Dom("created div is not an HtmlElement".into()))?;
        el.set_class_name("grid-cell");
        el.set_attribute("data-rect-id", &rect.id.raw().to_string())?;

        let style = el.style();
        style.set_property("width", &px(rect.width))?;
        style.set_property("height", &px(rect.height))?;
        style.set_property("background-color", &rect.color)?;

        let content = self.build_content(&rect.content)?;
        el.append_child(&content)?;
        self.container.append_child(&el)?;
        self.elements.insert(rect.id, el);
        Ok(())
    }

    fn position(&mut self, id: RectId, screen_x: f64, screen_y: f64) {
        let Some(el) = self.elements.get(&id) else {
            return;
        };
        let style = el.style();
        let moved = style
            .set_property("left", &px(screen_x))
            .and_then(|_| style.set_property("top", &px(screen_y)));
        if let Err(err) = moved {
            console_warn!("pangrid: positioning rectangle {} failed: {:?}", id.raw(), err);
        }
    }

    fn show(&mut self, id: RectId) {
        let Some(el) = self.elements.get(&id).cloned() else {
            return;
        };
        let scheduled = set_timeout(self.fade_in_ms, move || {
            let _ = el.class_list().add_1("visible");
        });
        if let Err(err) = scheduled {
            console_warn!("pangrid: fade-in for rectangle {} not scheduled: {}", id.raw(), err);
        }
    }

    fn retire(&mut self, id: RectId, delay_ms: u32) {
        let Some(el) = self.elements.remove(&id) else {
            return;
        };
        let _ = el.class_list().remove_1("visible");
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let detach = el.clone();
        if let Err(err) = set_timeout(delay, move || detach.remove()) {
            console_warn!("pangrid: deferred removal failed ({}), removing now", err);
            el.remove();
        }
    }

    fn set_count(&mut self, count: usize) {
        if let Some(el) = &self.count {
            el.set_text_content(Some(count.to_string().as_str()));
        }
    }

    fn place_center_marker(&mut self, x: f64, y: f64) {
        if let Some(marker) = &self.marker {
            let style = marker.style();
            let moved = style
                .set_property("left", &px(x))
                .and_then(|_| style.set_property("top", &px(y)));
            if let Err(err) = moved {
                console_warn!("pangrid: moving the centre marker failed: {:?}", err);
            }
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        let cursor = if dragging { "grabbing" } else { "grab" };
        if let Err(err) = self.container.style().set_property("cursor", cursor) {
            console_warn!("pangrid: setting the {} cursor failed: {:?}", cursor, err);
        }
    }
}

fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, RenderError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| RenderError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| RenderError::MissingElement(id.to_string()))
}

fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<(), RenderError> {
    let window = web_sys::window().ok_or(RenderError::Unavailable("window"))?;
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    )?;
    Ok(())
}

fn px(value: f64) -> String {
    format!("{}px", value)
}
