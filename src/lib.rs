#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod form;
mod frame;
mod menu;
mod notify;
mod overlay;
mod particles;
mod reveal;
mod scroll;
mod session;
mod styles;
mod theme;
mod typewriter;

use session::PageSession;

thread_local! {
    static SESSION: RefCell<Option<PageSession>> = const { RefCell::new(None) };
}

fn init(document: &web::Document) {
    SESSION.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let session = PageSession::start(document);
        log::info!(
            "[init] theme={} particles={} active={:?} keys_buffered={}",
            session.theme.borrow().as_str(),
            session.particles.borrow().count(),
            session.scroll.borrow().active_section(),
            session.konami.borrow().buffered()
        );
        *slot.borrow_mut() = Some(session);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::add_listener(&document, "DOMContentLoaded", move |_| init(&doc));
    } else {
        init(&document);
    }
    Ok(())
}
