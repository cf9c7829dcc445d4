//! Live DOM page host (WASM only)

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Document, Element, HtmlElement, Window};

use crate::domain::services::{HeaderMarkup, PageHost};
use crate::shared::errors::{AppError, Result};

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(AppError::NoWindow)?;
        let document = window.document().ok_or(AppError::NoDocument)?;
        Ok(Self { window, document })
    }

    fn body(&self) -> Result<HtmlElement> {
        self.document.body().ok_or(AppError::NoBody)
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl PageHost for BrowserHost {
    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn mount_header(&self, header: &HeaderMarkup) -> Result<bool> {
        let body = self.body()?;

        // Removing the node drops the listeners bound inside it
        let existing = self.element(header.id());
        let replaced = existing.is_some();
        if let Some(existing) = existing {
            existing.remove();
        }

        body.insert_adjacent_html("afterbegin", &header.html)?;
        Ok(replaced)
    }

    fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn toggle_class(&self, id: &str, class: &str) -> Option<bool> {
        self.element(id)
            .and_then(|el| el.class_list().toggle(class).ok())
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.element(id) {
            let _ = el.set_attribute(name, value);
        }
    }

    fn on_click(&self, id: &str, mut handler: Box<dyn FnMut()>) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };

        let onclick = Closure::wrap(Box::new(move |_: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(_)>);
        let bound = el
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .is_ok();
        // Listener lives as long as the page
        onclick.forget();
        bound
    }

    fn broadcast(&self, event: &str) {
        if let Ok(event) = CustomEvent::new(event) {
            let _ = self.window.dispatch_event(&event);
        }
    }
}
