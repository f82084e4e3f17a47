use crate::constants::{
    ACTIVE_SECTION_LOOKAHEAD_PX, ANCHOR_SCROLL_OFFSET_PX, BACK_TO_TOP_THRESHOLD_PX,
    MAX_PARTICLES, MOBILE_BREAKPOINT_PX, NAVBAR_SCROLLED_THRESHOLD_PX, SKILL_BAR_BOTTOM_MARGIN_PX,
    SKILL_BAR_STAGGER_MS, VIEWPORT_PX_PER_PARTICLE,
};
use fnv::FnvHashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Geometry read once per scroll/resize tick. Every derived flag for that
/// tick comes from the same snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportSnapshot {
    pub scroll_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub sections: Vec<SectionGeometry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewportFlags {
    pub active_section_id: Option<String>,
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
    pub desired_particle_count: usize,
}

pub fn recompute(snapshot: &ViewportSnapshot, prior_active: Option<&str>) -> ViewportFlags {
    let active_section_id = active_section(&snapshot.sections, snapshot.scroll_y)
        .map(str::to_string)
        .or_else(|| prior_active.map(str::to_string));
    ViewportFlags {
        active_section_id,
        navbar_scrolled: snapshot.scroll_y > NAVBAR_SCROLLED_THRESHOLD_PX,
        back_to_top_visible: snapshot.scroll_y > BACK_TO_TOP_THRESHOLD_PX,
        desired_particle_count: desired_particle_count(snapshot.viewport_width),
    }
}

/// First section in document order containing the lookahead point, if any.
pub fn active_section(sections: &[SectionGeometry], scroll_y: f64) -> Option<&str> {
    let lookahead = scroll_y + ACTIVE_SECTION_LOOKAHEAD_PX;
    sections
        .iter()
        .find(|s| s.contains(lookahead))
        .map(|s| s.id.as_str())
}

#[inline]
pub fn desired_particle_count(viewport_width: f64) -> usize {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return 0;
    }
    let n = (viewport_width / VIEWPORT_PX_PER_PARTICLE).floor() as usize;
    n.min(MAX_PARTICLES)
}

#[inline]
pub fn should_close_menu_on_resize(viewport_width: f64, menu_open: bool) -> bool {
    menu_open && viewport_width > MOBILE_BREAKPOINT_PX
}

/// Scroll destination for an in-page anchor whose target sits at `offset_top`.
#[inline]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_SCROLL_OFFSET_PX
}

// ---------------- Skill bars ----------------

#[inline]
pub fn skill_bar_visible(rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
    rect_top <= viewport_height - SKILL_BAR_BOTTOM_MARGIN_PX && rect_bottom >= 0.0
}

/// Target fill percentage from a `data-width` attribute. Missing or
/// unparseable values fill nothing.
pub fn parse_skill_width(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().trim_end_matches('%').parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

#[inline]
pub fn skill_bar_delay_ms(index: usize) -> i32 {
    (index as i32).saturating_mul(SKILL_BAR_STAGGER_MS)
}

/// Skill bars whose fill has already been scheduled. A bar is scheduled at
/// most once, however many scroll ticks see it before its delay elapses.
#[derive(Debug, Default)]
pub struct RevealQueue {
    scheduled: FnvHashSet<usize>,
}

impl RevealQueue {
    #[inline]
    pub fn is_scheduled(&self, index: usize) -> bool {
        self.scheduled.contains(&index)
    }

    /// Marks `index` as scheduled; false if it already was.
    pub fn schedule(&mut self, index: usize) -> bool {
        self.scheduled.insert(index)
    }
}
