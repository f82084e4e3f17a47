use crate::core::ParticleSet;
use crate::dom;
use crate::frame;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The `.particles` container and one `.particle` node per entry of the set.
pub struct ParticleLayer {
    document: web::Document,
    set: ParticleSet,
    container: Option<web::Element>,
    nodes: Vec<(usize, web::Element)>,
}

impl ParticleLayer {
    pub fn new(document: &web::Document, count: usize) -> Self {
        let mut layer = Self {
            document: document.clone(),
            set: ParticleSet::new(count, StdRng::from_entropy()),
            container: None,
            nodes: Vec::new(),
        };
        layer.rebuild_dom();
        layer
    }

    pub fn count(&self) -> usize {
        self.set.len()
    }

    /// Replaces the whole layer when the desired count differs.
    pub fn resize_to(&mut self, count: usize) {
        if self.set.regenerate_if_changed(count) {
            log::info!("[particles] regenerated count={}", count);
            self.rebuild_dom();
        }
    }

    fn rebuild_dom(&mut self) {
        if let Some(old) = self.container.take() {
            old.remove();
        }
        self.nodes.clear();
        let container = match dom::append_to_body(&self.document, "div", "particles") {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[particles] {e}");
                return;
            }
        };
        if self.set.is_empty() {
            log::info!("[particles] viewport too narrow, layer left empty");
        }
        for (i, p) in self.set.particles().iter().enumerate() {
            let Ok(node) = self.document.create_element("div") else {
                continue;
            };
            node.set_class_name("particle");
            _ = node.set_attribute("style", &p.inline_style());
            if container.append_child(&node).is_ok() {
                self.nodes.push((i, node));
            }
        }
        if self.nodes.len() < self.set.len() {
            log::warn!(
                "[particles] {} of {} nodes created",
                self.nodes.len(),
                self.set.len()
            );
        }
        self.container = Some(container);
    }

    pub fn drift(&mut self) {
        self.set.drift_all();
        for (i, node) in &self.nodes {
            if let Some(p) = self.set.get(*i) {
                dom::set_style(node, "left", &format!("{:.3}%", p.left_percent));
            }
        }
    }
}

pub fn start_drift(layer: Rc<RefCell<ParticleLayer>>) {
    frame::start_loop(move || layer.borrow_mut().drift());
}
