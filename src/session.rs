use crate::constants::{CARD_HOVER_INIT_MS, MAX_PARTICLES, TOOLTIP_INIT_MS};
use crate::core::{KonamiMatcher, Theme, TypewriterConfig};
use crate::particles::{self, ParticleLayer};
use crate::scroll::{self, ScrollController};
use crate::{dom, events, form, menu, overlay, reveal, styles, theme, typewriter};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// All mutable state of one page view. Created on load and kept alive by the
/// listeners that capture its parts; there is no teardown.
pub struct PageSession {
    pub theme: Rc<RefCell<Theme>>,
    pub konami: Rc<RefCell<KonamiMatcher>>,
    pub particles: Rc<RefCell<ParticleLayer>>,
    pub scroll: Rc<RefCell<ScrollController>>,
}

/// Logs and moves on; one missing element must not stop other features.
fn guarded(feature: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::warn!("[init] {feature} skipped: {e}");
    }
}

impl PageSession {
    pub fn start(document: &web::Document) -> Self {
        guarded("styles", styles::inject_all(document));
        match overlay::show_loading(document) {
            Ok(el) => overlay::hide_loading_later(el),
            Err(e) => log::warn!("[init] loading overlay skipped: {e}"),
        }

        let theme = Rc::new(RefCell::new(theme::init(document)));
        guarded("typewriter", typewriter::start(document, &TypewriterConfig::default()));
        menu::wire_smooth_scrolling(document);

        let particles = Rc::new(RefCell::new(ParticleLayer::new(document, MAX_PARTICLES)));
        particles::start_drift(particles.clone());

        guarded("scroll reveal", reveal::wire(document));
        guarded("theme toggle", theme::wire(document, theme.clone()));
        guarded("mobile menu", menu::wire(document));
        guarded("back to top", menu::wire_back_to_top(document));
        guarded("contact form", form::wire_submit(document));
        form::wire_field_animations(document);

        let scroll = Rc::new(RefCell::new(ScrollController::new(
            document,
            particles.clone(),
        )));
        scroll::wire(scroll.clone());

        let konami = Rc::new(RefCell::new(KonamiMatcher::new()));
        events::wire_global_keydown(document, konami.clone());

        let doc = document.clone();
        dom::set_timeout(CARD_HOVER_INIT_MS, move || events::wire_card_hover(&doc));
        let doc = document.clone();
        dom::set_timeout(TOOLTIP_INIT_MS, move || events::wire_tooltips(&doc));

        log::info!("[init] page session ready");
        Self {
            theme,
            konami,
            particles,
            scroll,
        }
    }
}
