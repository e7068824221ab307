//! Page lifecycle hooks

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::error::{DashboardError, Result};

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DashboardError::Dom("no document".into()))
}

/// Run `f` once the DOM is parsed (immediately if it already is)
pub fn when_dom_ready<F: FnOnce() + 'static>(f: F) -> Result<()> {
    let document = document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let callback = Closure::once_into_js(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}

/// Attach a click handler to the first element matching `selector`
pub fn on_click<F: FnMut() + 'static>(selector: &str, handler: F) -> Result<()> {
    let target = document()?
        .query_selector(selector)?
        .ok_or_else(|| DashboardError::Dom(format!("{selector} not found")))?;
    let callback = Closure::<dyn FnMut()>::new(handler);
    target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    // handlers live as long as the page
    callback.forget();
    Ok(())
}
