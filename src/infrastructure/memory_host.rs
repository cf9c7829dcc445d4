//! In-memory page host
//!
//! Holds the body as an index of id'd elements, records click handlers per
//! element id and keeps a log of broadcast events. Used by tests and by the
//! native pre-render CLI.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::element_index::IndexedElement;
use crate::domain::services::{HeaderMarkup, PageHost};
use crate::shared::errors::Result;

type ClickHandler = Box<dyn FnMut()>;

pub struct MemoryHost {
    path: String,
    body: RefCell<Vec<IndexedElement>>,
    /// HTML of each mounted header, keyed by its id
    html: RefCell<HashMap<String, String>>,
    handlers: RefCell<HashMap<String, Vec<ClickHandler>>>,
    broadcasts: RefCell<Vec<String>>,
}

impl MemoryHost {
    /// Empty body at `path`
    pub fn new(path: &str) -> Self {
        Self::with_body(path, Vec::new())
    }

    pub fn with_body(path: &str, body: Vec<IndexedElement>) -> Self {
        Self {
            path: path.to_string(),
            body: RefCell::new(body),
            html: RefCell::new(HashMap::new()),
            handlers: RefCell::new(HashMap::new()),
            broadcasts: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of the body's children
    pub fn body(&self) -> Vec<IndexedElement> {
        self.body.borrow().clone()
    }

    /// Markup last mounted under `id`
    pub fn html(&self, id: &str) -> Option<String> {
        self.html.borrow().get(id).cloned()
    }

    /// Snapshot of the element with `id`
    pub fn element(&self, id: &str) -> Option<IndexedElement> {
        self.body
            .borrow()
            .iter()
            .find_map(|el| el.find_by_id(id))
            .cloned()
    }

    /// Events broadcast so far, in order
    pub fn broadcasts(&self) -> Vec<String> {
        self.broadcasts.borrow().clone()
    }

    /// Run the click handlers bound to `id`. Clicking an element without
    /// handlers (or a missing one) does nothing.
    pub fn click(&self, id: &str) {
        let running = self.handlers.borrow_mut().remove(id);
        let Some(mut running) = running else {
            return;
        };
        for handler in running.iter_mut() {
            handler();
        }
        // A handler may have replaced the element; its listeners go with it
        if !self.contains(id) {
            return;
        }
        let mut handlers = self.handlers.borrow_mut();
        let added = handlers.remove(id).unwrap_or_default();
        running.extend(added);
        handlers.insert(id.to_string(), running);
    }

    /// Detach the element with `id` from wherever it sits in the body
    fn detach(&self, id: &str) -> Option<IndexedElement> {
        let mut body = self.body.borrow_mut();
        if let Some(pos) = body.iter().position(|el| el.id == id) {
            return Some(body.remove(pos));
        }
        body.iter_mut().find_map(|el| el.remove_descendant(id))
    }

    fn with_element_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut IndexedElement) -> T,
    ) -> Option<T> {
        self.body
            .borrow_mut()
            .iter_mut()
            .find_map(|el| el.find_by_id_mut(id))
            .map(f)
    }
}

impl PageHost for MemoryHost {
    fn location_path(&self) -> String {
        self.path.clone()
    }

    fn mount_header(&self, header: &HeaderMarkup) -> Result<bool> {
        let removed = self.detach(header.id());
        if let Some(removed) = &removed {
            let mut handlers = self.handlers.borrow_mut();
            for id in removed.ids() {
                handlers.remove(&id);
            }
        }

        self.body.borrow_mut().insert(0, header.index.clone());
        self.html
            .borrow_mut()
            .insert(header.id().to_string(), header.html.clone());
        Ok(removed.is_some())
    }

    fn contains(&self, id: &str) -> bool {
        self.body.borrow().iter().any(|el| el.find_by_id(id).is_some())
    }

    fn toggle_class(&self, id: &str, class: &str) -> Option<bool> {
        self.with_element_mut(id, |el| el.toggle_class(class))
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) {
        self.with_element_mut(id, |el| el.set_attr(name, value));
    }

    fn on_click(&self, id: &str, handler: Box<dyn FnMut()>) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.handlers
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .push(handler);
        true
    }

    fn broadcast(&self, event: &str) {
        self.broadcasts.borrow_mut().push(event.to_string());
    }
}
