use crate::constants::{STAGGER_STEP_SEC, TOOLTIP_GAP_PX};

pub const MENU_OPEN_ICON: &str = "fas fa-times";
pub const MENU_CLOSED_ICON: &str = "fas fa-bars";

#[inline]
pub fn menu_icon_class(open: bool) -> &'static str {
    if open {
        MENU_OPEN_ICON
    } else {
        MENU_CLOSED_ICON
    }
}

/// CSS `animation-delay` for the nth item of a staggered group.
#[inline]
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * STAGGER_STEP_SEC)
}

/// In-page anchor target id from an `href`, or None for a bare `#` or a
/// link that leaves the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

#[inline]
pub fn nav_href_for(section_id: &str) -> String {
    format!("#{section_id}")
}

/// For each nav link `href`, whether it should carry `active` while
/// `section_id` is current. Every link pointing at the section matches.
pub fn nav_link_mask<S: AsRef<str>>(hrefs: &[S], section_id: &str) -> Vec<bool> {
    let target = nav_href_for(section_id);
    hrefs.iter().map(|h| h.as_ref() == target).collect()
}

/// Viewport position (left, top) of a tooltip centred above an anchor rect.
#[inline]
pub fn tooltip_position(rect_left: f64, rect_top: f64, rect_width: f64) -> (f64, f64) {
    (rect_left + rect_width / 2.0, rect_top - TOOLTIP_GAP_PX)
}
