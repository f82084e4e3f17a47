use crate::constants::{
    BUTTON_PRESS_MS, THEME_CHANGING_MS, THEME_STORAGE_KEY, THEME_TRANSITION_ENABLE_MS,
};
use crate::core::Theme;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

pub fn read_stored_theme() -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-theme", theme.as_str());
    }
    update_icon(document, theme);
}

fn update_icon(document: &web::Document, theme: Theme) {
    let Ok(icon) = dom::query(document, "#theme-toggle i") else {
        return;
    };
    icon.set_class_name(theme.icon_class());
    dom::set_style(&icon, "transform", theme.icon_rotation());
}

/// Applies the stored theme and enables colour transitions shortly after,
/// so the first paint does not animate.
pub fn init(document: &web::Document) -> Theme {
    let theme = read_stored_theme();
    apply_theme(document, theme);
    if let Some(body) = document.body() {
        dom::set_timeout(THEME_TRANSITION_ENABLE_MS, move || {
            _ = body
                .style()
                .set_property("transition", "background-color 0.3s ease, color 0.3s ease");
        });
    }
    log::info!("[theme] initial={}", theme.as_str());
    theme
}

pub fn toggle(document: &web::Document, current: &Rc<RefCell<Theme>>) {
    let next = current.borrow().toggled();
    *current.borrow_mut() = next;

    if let Some(body) = document.body() {
        _ = body.class_list().add_1("theme-changing");
        dom::set_timeout(THEME_CHANGING_MS, move || {
            _ = body.class_list().remove_1("theme-changing");
        });
    }
    apply_theme(document, next);
    persist_theme(next);

    if let Some(button) = document.get_element_by_id("theme-toggle") {
        dom::pulse_transform(&button, "scale(0.9)", "scale(1)", BUTTON_PRESS_MS);
    }
    log::info!("[theme] now {}", next.as_str());
}

pub fn wire(document: &web::Document, current: Rc<RefCell<Theme>>) -> anyhow::Result<()> {
    let doc = document.clone();
    dom::add_click_listener(document, "theme-toggle", move |_| toggle(&doc, &current))
}
