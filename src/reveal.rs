use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::core::menu::stagger_delay;
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn reveal(target: &web::Element) {
    _ = target.class_list().add_1("visible");
    for (i, child) in dom::query_all(target, ".fade-in-child").iter().enumerate() {
        dom::set_style(child, "animation-delay", &stagger_delay(i));
        _ = child.class_list().add_1("visible");
    }
}

/// Fades sections and `.fade-in` elements in as they enter the viewport.
/// Elements are not unobserved; revealing twice is harmless.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                reveal(&entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow!("IntersectionObserver: {e:?}"))?;
    callback.forget();

    let targets = dom::query_all_in(document, "section")
        .into_iter()
        .chain(dom::query_all_in(document, ".fade-in"));
    for el in targets {
        observer.observe(&el);
    }
    Ok(())
}
