use crate::constants::KONAMI_EFFECT_MS;
use crate::core::notify::KONAMI_MESSAGE;
use crate::core::{KonamiMatcher, NotificationKind};
use crate::dom;
use crate::notify;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn celebrate(document: &web::Document) {
    notify::show(document, KONAMI_MESSAGE, NotificationKind::Success);
    for card in dom::query_all_in(document, ".card") {
        _ = card.class_list().add_1("konami");
    }
    let doc = document.clone();
    dom::set_timeout(KONAMI_EFFECT_MS, move || {
        for card in dom::query_all_in(&doc, ".card") {
            _ = card.class_list().remove_1("konami");
        }
    });
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    konami: &Rc<RefCell<KonamiMatcher>>,
) {
    let key = ev.key();
    if konami.borrow_mut().push(&key) {
        log::info!("[konami] sequence entered");
        celebrate(document);
    }
}

pub fn wire_global_keydown(document: &web::Document, konami: Rc<RefCell<KonamiMatcher>>) {
    let doc = document.clone();
    dom::add_listener(document, "keydown", move |ev| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_global_keydown(kev, &doc, &konami);
        }
    });
}
