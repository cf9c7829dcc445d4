//! Pre-render the shared header for a page path without a browser.
//!
//! Runs the same controller lifecycle as a page load against a
//! [`MemoryHost`], so static pages can embed the markup the browser would
//! inject.

use std::path::Path;
use std::rc::Rc;

use crate::domain::services::header::{HEADER_ID, MENU_TOGGLE_ID};
use crate::domain::services::{NavbarController, PageHost};
use crate::infrastructure::MemoryHost;
use crate::shared::errors::{AppError, Result};

/// Header HTML for `path`. With `menu_open`, the toggle is clicked once after
/// binding so the markup shows the expanded menu.
pub fn prerender_header(path: &str, menu_open: bool) -> Result<String> {
    let host = Rc::new(MemoryHost::new(path));
    let controller = NavbarController::mount(host.clone())?;
    tracing::info!(
        path = path,
        page = controller.current_page().as_str(),
        "Pre-rendering navigation header"
    );

    if menu_open {
        host.click(MENU_TOGGLE_ID);
    }

    if !host.contains(HEADER_ID) {
        return Err(AppError::Dom("header was not mounted".to_string()));
    }
    Ok(controller.header().html)
}

/// Write to `output`, or stdout when absent
pub fn write_output(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!(path = %path.display(), bytes = html.len(), "Header written");
        }
        None => println!("{}", html),
    }
    Ok(())
}
