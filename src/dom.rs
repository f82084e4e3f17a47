use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))
}

pub fn query(document: &web::Document, selector: &str) -> anyhow::Result<web::Element> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {selector}: {e:?}"))?
        .ok_or_else(|| anyhow!("missing {selector}"))
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Registers a listener that lives for the rest of the page session.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<()> {
    let el = element_by_id(document, element_id)?;
    add_listener(&el, "click", handler);
    Ok(())
}

pub fn add_window_listener(event: &str, handler: impl FnMut(web::Event) + 'static) {
    if let Some(window) = web::window() {
        add_listener(&window, event, handler);
    }
}

/// Fire-and-forget delayed callback. Abandoned if the page goes away first.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.max(0),
        );
    }
}

/// Resolves after `delay_ms`; for use inside `spawn_local`.
pub async fn sleep(delay_ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web::window() {
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay_ms);
        }
    });
    _ = JsFuture::from(promise).await;
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn clear_style(el: &web::Element, property: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().remove_property(property);
    }
}

/// Sets `transform` now and clears it back to `reset` after `ms`.
pub fn pulse_transform(el: &web::Element, transform: &str, reset: &'static str, ms: i32) {
    set_style(el, "transform", transform);
    let el = el.clone();
    set_timeout(ms, move || {
        if reset.is_empty() {
            clear_style(&el, "transform");
        } else {
            set_style(&el, "transform", reset);
        }
    });
}

pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Appends a fresh element with `class` to `<body>`.
pub fn append_to_body(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{tag}>: {e:?}"))?;
    el.set_class_name(class);
    body.append_child(&el)
        .map_err(|e| anyhow!("append <{tag}>: {e:?}"))?;
    Ok(el)
}
