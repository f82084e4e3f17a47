use crate::constants::{FORM_SUBMIT_SIMULATED_MS, FORM_SUCCESS_PULSE_MS};
use crate::core::notify::{has_value, keeps_focus_on_blur, CONTACT_SUCCESS_MESSAGE};
use crate::core::{ContactMessage, NotificationKind};
use crate::dom;
use crate::notify;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const SENDING_MARKUP: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";

fn read_message(form: &web::HtmlFormElement) -> ContactMessage {
    let data = web::FormData::new_with_form(form).ok();
    ContactMessage::from_fields(|name| data.as_ref().and_then(|d| d.get(name).as_string()))
}

/// There is no backend: submission waits, then reports success and resets.
async fn simulate_submit(document: web::Document, form: web::HtmlFormElement) {
    let message = read_message(&form);
    log::info!(
        "[form] submitting name_len={} email_len={} subject_len={} message_len={}",
        message.name.len(),
        message.email.len(),
        message.subject.len(),
        message.message.len()
    );

    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());
    let original = button.as_ref().map(|b| b.inner_html());
    if let Some(b) = &button {
        b.set_inner_html(SENDING_MARKUP);
        b.set_disabled(true);
    }

    dom::sleep(FORM_SUBMIT_SIMULATED_MS).await;

    notify::show(&document, CONTACT_SUCCESS_MESSAGE, NotificationKind::Success);
    form.reset();
    if let (Some(b), Some(html)) = (&button, original) {
        b.set_inner_html(&html);
        b.set_disabled(false);
    }

    _ = form.class_list().add_1("success");
    dom::sleep(FORM_SUCCESS_PULSE_MS).await;
    _ = form.class_list().remove_1("success");
}

pub fn wire_submit(document: &web::Document) -> anyhow::Result<()> {
    let form = dom::element_by_id(document, "contact-form")?
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|_| anyhow!("#contact-form is not a form"))?;
    let doc = document.clone();
    let target = form.clone();
    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        spawn_local(simulate_submit(doc.clone(), target.clone()));
    });
    Ok(())
}

fn field_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Floating-label classes on each field's `.form-group`.
pub fn wire_field_animations(document: &web::Document) {
    for field in dom::query_all_in(document, ".form-group input, .form-group textarea") {
        let Some(group) = field.parent_element() else {
            continue;
        };

        let (f, g) = (field.clone(), group.clone());
        dom::add_listener(&field, "focus", move |_| {
            _ = g.class_list().add_1("focused");
            dom::set_style(&f, "transform", "translateY(-2px)");
        });

        let (f, g) = (field.clone(), group.clone());
        dom::add_listener(&field, "blur", move |_| {
            if !keeps_focus_on_blur(&field_value(&f)) {
                _ = g.class_list().remove_1("focused");
            }
            dom::clear_style(&f, "transform");
        });

        let f = field.clone();
        dom::add_listener(&field, "input", move |_| {
            let cl = group.class_list();
            if has_value(&field_value(&f)) {
                _ = cl.add_1("has-value");
            } else {
                _ = cl.remove_1("has-value");
            }
        });
    }
}
