use crate::constants::NAV_LINK_LIFT_MS;
use crate::core::menu::nav_link_mask;
use crate::core::viewport::{
    parse_skill_width, recompute, should_close_menu_on_resize, skill_bar_delay_ms,
    skill_bar_visible, RevealQueue,
};
use crate::core::{SectionGeometry, ViewportFlags, ViewportSnapshot};
use crate::dom;
use crate::menu;
use crate::particles::ParticleLayer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements the scroll controller reads and writes, looked up once at init.
/// Any of them may be missing; the matching flag is then computed but not
/// applied.
pub struct ScrollController {
    document: web::Document,
    sections: Vec<web::HtmlElement>,
    nav_hrefs: Vec<String>,
    nav_links: Vec<web::Element>,
    navbar: Option<web::Element>,
    back_to_top: Option<web::Element>,
    skill_bars: Vec<web::Element>,
    skill_reveals: RevealQueue,
    active: Option<String>,
    particles: Rc<RefCell<ParticleLayer>>,
}

impl ScrollController {
    pub fn new(document: &web::Document, particles: Rc<RefCell<ParticleLayer>>) -> Self {
        let sections = dom::query_all_in(document, "section")
            .into_iter()
            .filter_map(|s| s.dyn_into::<web::HtmlElement>().ok())
            .collect();
        let nav_links = dom::query_all_in(document, ".nav-link");
        let nav_hrefs = nav_links
            .iter()
            .map(|l| l.get_attribute("href").unwrap_or_default())
            .collect();
        Self {
            document: document.clone(),
            sections,
            nav_hrefs,
            nav_links,
            navbar: dom::query(document, ".navbar").ok(),
            back_to_top: document.get_element_by_id("back-to-top"),
            skill_bars: dom::query_all_in(document, ".skill-progress"),
            skill_reveals: RevealQueue::default(),
            active: None,
            particles,
        }
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn snapshot(&self, window: &web::Window) -> ViewportSnapshot {
        let (viewport_width, viewport_height) = dom::viewport_size(window);
        ViewportSnapshot {
            scroll_y: window.scroll_y().unwrap_or(0.0),
            viewport_width,
            viewport_height,
            sections: self
                .sections
                .iter()
                .map(|s| SectionGeometry {
                    id: s.id(),
                    top: f64::from(s.offset_top()),
                    height: f64::from(s.client_height()),
                })
                .collect(),
        }
    }

    pub fn on_scroll(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let snap = self.snapshot(&window);
        let flags = recompute(&snap, self.active.as_deref());
        self.apply_flags(&flags);
        self.reveal_skill_bars(snap.viewport_height);
    }

    pub fn on_resize(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let snap = self.snapshot(&window);
        let flags = recompute(&snap, self.active.as_deref());
        self.particles
            .borrow_mut()
            .resize_to(flags.desired_particle_count);
        if should_close_menu_on_resize(snap.viewport_width, menu::is_open(&self.document)) {
            menu::close(&self.document);
        }
    }

    fn apply_flags(&mut self, flags: &ViewportFlags) {
        if let Some(btn) = &self.back_to_top {
            toggle_class(btn, "visible", flags.back_to_top_visible);
        }
        if let Some(nav) = &self.navbar {
            toggle_class(nav, "scrolled", flags.navbar_scrolled);
        }
        if let Some(id) = &flags.active_section_id {
            if self.active.as_deref() != Some(id.as_str()) {
                log::info!("[scroll] active section {}", id);
            }
            self.highlight_nav(id);
        }
        self.active = flags.active_section_id.clone();
    }

    fn highlight_nav(&self, section_id: &str) {
        let mask = nav_link_mask(&self.nav_hrefs, section_id);
        for (link, is_active) in self.nav_links.iter().zip(mask) {
            if is_active {
                if !link.class_list().contains("active") {
                    _ = link.class_list().add_1("active");
                    dom::pulse_transform(link, "translateY(-3px)", "", NAV_LINK_LIFT_MS);
                }
            } else {
                _ = link.class_list().remove_1("active");
            }
        }
    }

    fn reveal_skill_bars(&mut self, viewport_height: f64) {
        for (i, bar) in self.skill_bars.iter().enumerate() {
            if self.skill_reveals.is_scheduled(i) {
                continue;
            }
            let rect = bar.get_bounding_client_rect();
            if !skill_bar_visible(rect.top(), rect.bottom(), viewport_height) {
                continue;
            }
            self.skill_reveals.schedule(i);
            let width = parse_skill_width(bar.get_attribute("data-width").as_deref());
            let bar = bar.clone();
            dom::set_timeout(skill_bar_delay_ms(i), move || {
                dom::set_style(&bar, "width", &format!("{width}%"));
                _ = bar.class_list().add_1("animated");
                dom::set_style(&bar, "transform", "scaleX(1)");
            });
        }
    }
}

fn toggle_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

pub fn wire(controller: Rc<RefCell<ScrollController>>) {
    let on_scroll = controller.clone();
    dom::add_window_listener("scroll", move |_| on_scroll.borrow_mut().on_scroll());
    let on_resize = controller.clone();
    dom::add_window_listener("resize", move |_| on_resize.borrow_mut().on_resize());
    controller.borrow_mut().on_scroll();
}
