use crate::constants::{LOADING_HIDE_MS, LOADING_REMOVE_MS};
use crate::dom;
use web_sys as web;

/// Adds the full-page loading overlay. Called before anything else so it
/// covers initialisation.
pub fn show_loading(document: &web::Document) -> anyhow::Result<web::Element> {
    let overlay = dom::append_to_body(document, "div", "loading")?;
    overlay.set_inner_html("<div class=\"loader\"></div>");
    Ok(overlay)
}

/// Fades the overlay out, then drops it from the document.
pub fn hide_loading_later(overlay: web::Element) {
    dom::set_timeout(LOADING_HIDE_MS, move || {
        _ = overlay.class_list().add_1("hidden");
        dom::set_timeout(LOADING_REMOVE_MS, move || overlay.remove());
    });
}

