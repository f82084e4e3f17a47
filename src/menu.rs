use crate::constants::{ANCHOR_PRESS_MS, BUTTON_PRESS_MS};
use crate::core::menu::{anchor_target, menu_icon_class, stagger_delay};
use crate::core::viewport::anchor_scroll_top;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn is_open(document: &web::Document) -> bool {
    dom::query(document, ".nav-menu")
        .map(|m| m.class_list().contains("active"))
        .unwrap_or(false)
}

fn set_menu_icon(document: &web::Document, open: bool) {
    if let Ok(icon) = dom::query(document, "#menu-toggle i") {
        icon.set_class_name(menu_icon_class(open));
    }
}

pub fn toggle(document: &web::Document) {
    let Ok(menu) = dom::query(document, ".nav-menu") else {
        return;
    };
    let open = menu.class_list().toggle("active").unwrap_or(false);
    set_menu_icon(document, open);

    for (i, link) in dom::query_all_in(document, ".nav-link").iter().enumerate() {
        if open {
            dom::set_style(link, "animation-delay", &stagger_delay(i));
            _ = link.class_list().add_1("slide-in");
        } else {
            _ = link.class_list().remove_1("slide-in");
        }
    }

    if let Some(button) = document.get_element_by_id("menu-toggle") {
        dom::pulse_transform(&button, "scale(0.9)", "scale(1)", BUTTON_PRESS_MS);
    }
}

pub fn close(document: &web::Document) {
    if let Ok(menu) = dom::query(document, ".nav-menu") {
        _ = menu.class_list().remove_1("active");
    }
    set_menu_icon(document, false);
    for link in dom::query_all_in(document, ".nav-link") {
        _ = link.class_list().remove_1("slide-in");
    }
}

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    dom::query(document, ".nav-menu")?;
    let doc = document.clone();
    dom::add_click_listener(document, "menu-toggle", move |_| toggle(&doc))?;

    for link in dom::query_all_in(document, ".nav-link") {
        let doc = document.clone();
        dom::add_listener(&link, "click", move |_| close(&doc));
    }
    Ok(())
}

fn scroll_window_to(top: f64) {
    if let Some(window) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smooth-scrolls every in-page anchor to its target, leaving room for the
/// fixed navbar. Anchors whose target does not exist are left alone.
pub fn wire_smooth_scrolling(document: &web::Document) {
    for anchor in dom::query_all_in(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let this = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev| {
            ev.prevent_default();
            let href = this.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = doc
                .get_element_by_id(id)
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            close(&doc);
            scroll_window_to(anchor_scroll_top(f64::from(target.offset_top())));
            dom::pulse_transform(&this, "scale(0.95)", "", ANCHOR_PRESS_MS);
        });
    }
}

pub fn scroll_to_top(document: &web::Document) {
    scroll_window_to(0.0);
    if let Some(button) = document.get_element_by_id("back-to-top") {
        dom::pulse_transform(&button, "scale(0.9)", "scale(1)", BUTTON_PRESS_MS);
    }
}

pub fn wire_back_to_top(document: &web::Document) -> anyhow::Result<()> {
    let doc = document.clone();
    dom::add_click_listener(document, "back-to-top", move |_| scroll_to_top(&doc))
}
