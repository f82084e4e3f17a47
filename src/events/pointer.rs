use crate::core::menu::tooltip_position;
use crate::dom;
use web_sys as web;

const HOVER_CARDS: &str = ".project-card, .stat-card, .skill-category";

/// Lift-and-shadow hover on the content cards.
pub fn wire_card_hover(document: &web::Document) {
    for card in dom::query_all_in(document, HOVER_CARDS) {
        let c = card.clone();
        dom::add_listener(&card, "mouseenter", move |_| {
            dom::set_style(&c, "transform", "translateY(-10px) scale(1.02)");
            dom::set_style(&c, "box-shadow", "var(--shadow-hover)");
        });
        let c = card.clone();
        dom::add_listener(&card, "mouseleave", move |_| {
            dom::clear_style(&c, "transform");
            dom::clear_style(&c, "box-shadow");
        });
    }
}

/// One floating tooltip per `[data-tooltip]` element, shown on hover.
pub fn wire_tooltips(document: &web::Document) {
    let anchors = dom::query_all_in(document, "[data-tooltip]");
    for anchor in anchors {
        let tooltip = match dom::append_to_body(document, "div", "tooltip") {
            Ok(t) => t,
            Err(e) => {
                log::warn!("[tooltip] {e}");
                continue;
            }
        };
        tooltip.set_text_content(anchor.get_attribute("data-tooltip").as_deref());

        let (a, t) = (anchor.clone(), tooltip.clone());
        dom::add_listener(&anchor, "mouseenter", move |_| {
            let rect = a.get_bounding_client_rect();
            let (left, top) = tooltip_position(rect.left(), rect.top(), rect.width());
            dom::set_style(&t, "left", &format!("{left}px"));
            dom::set_style(&t, "top", &format!("{top}px"));
            dom::set_style(&t, "transform", "translateX(-50%) translateY(-100%)");
            _ = t.class_list().add_1("visible");
        });
        dom::add_listener(&anchor, "mouseleave", move |_| {
            _ = tooltip.class_list().remove_1("visible");
        });
    }
}
