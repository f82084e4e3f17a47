use crate::constants::{
    NOTIFICATION_AUTO_DISMISS_MS, NOTIFICATION_REMOVE_MS, NOTIFICATION_SHOW_MS,
};
use crate::core::notify::notification_markup;
use crate::core::NotificationKind;
use crate::dom;
use web_sys as web;

fn dismiss(toast: &web::Element) {
    _ = toast.class_list().remove_1("show");
    let toast = toast.clone();
    dom::set_timeout(NOTIFICATION_REMOVE_MS, move || toast.remove());
}

/// Shows a toast, replacing any toast already on screen.
pub fn show(document: &web::Document, message: &str, kind: NotificationKind) {
    if let Ok(Some(existing)) = document.query_selector(".notification") {
        existing.remove();
    }

    let toast = match dom::append_to_body(document, "div", &kind.class_name()) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("[notify] {e}");
            return;
        }
    };
    toast.set_inner_html(&notification_markup(kind, message));

    let shown = toast.clone();
    dom::set_timeout(NOTIFICATION_SHOW_MS, move || {
        _ = shown.class_list().add_1("show");
    });

    if let Ok(Some(close)) = toast.query_selector(".notification-close") {
        let t = toast.clone();
        dom::add_listener(&close, "click", move |_| dismiss(&t));
    }

    dom::set_timeout(NOTIFICATION_AUTO_DISMISS_MS, move || {
        if toast.parent_element().is_some() {
            dismiss(&toast);
        }
    });
}
