use wasm_bindgen::JsCast;
use web_sys as web;

use crate::toggle::{ContentElement, ElementRegistry, ToggleControl, ACTIVE_CLASS};

/// Snippet container backed by a live DOM element.
pub struct DomContent(web::Element);

impl ContentElement for DomContent {
    fn toggle_marker(&mut self) {
        let _ = self.0.class_list().toggle(ACTIVE_CLASS);
    }

    fn has_marker(&self) -> bool {
        self.0.class_list().contains(ACTIVE_CLASS)
    }
}

/// Toggle button backed by a live DOM element.
pub struct DomControl(web::HtmlElement);

impl ToggleControl for DomControl {
    fn set_label(&mut self, label: &str) {
        self.0.set_text_content(Some(label));
    }
}

impl DomControl {
    /// Event target for wiring the click handler.
    pub fn target(&self) -> web::EventTarget {
        self.0.clone().into()
    }
}

impl ElementRegistry for web::Document {
    type Content = DomContent;
    type Control = DomControl;

    fn content(&self, id: &str) -> Option<DomContent> {
        self.get_element_by_id(id).map(DomContent)
    }

    fn control(&self, id: &str) -> Option<DomControl> {
        // A non-HTML node under the button id counts as unresolved.
        self.get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(DomControl)
    }
}
