//! WhatsApp deep links from service buttons, quick-contact buttons and the
//! contact form.

use crate::constants::*;
use crate::dom;
use portfolio_core::contact::{Feedback, Submission};
use portfolio_core::{ContactForm, Interaction, InteractionKind, InteractionLog, WhatsApp};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn open(url: &str) {
    let Some(window) = web::window() else {
        return;
    };
    if window.open_with_url_and_target(url, "_blank").is_err() {
        log::warn!("[contact] popup blocked for {url}");
    }
}

/// Append to the persisted interaction log.
fn track(kind: InteractionKind, service: &str) {
    let user_agent = web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());

    let mut log = InteractionLog::load(dom::storage_get(STORAGE_INTERACTIONS).as_deref());
    log.record(Interaction {
        kind,
        service: service.to_string(),
        timestamp,
        user_agent,
    });
    match log.to_json() {
        Ok(json) => dom::storage_set(STORAGE_INTERACTIONS, &json),
        Err(e) => log::error!("[contact] {e}"),
    }
}

fn open_quick_contact(whatsapp: &WhatsApp) {
    open(&whatsapp.quick_contact_url());
    track(InteractionKind::QuickContact, "general");
}

fn wire_service_buttons(document: &web::Document, whatsapp: &Rc<WhatsApp>) {
    for button in dom::query_document(document, SEL_SERVICE_BUTTONS) {
        let whatsapp = whatsapp.clone();
        let target = button.clone();
        dom::add_listener(&button, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(service) = target.get_attribute("data-service") else {
                return;
            };
            dom::pulse(&target, BUTTON_PULSE_ANIMATION, BUTTON_PULSE_MS);
            open(&whatsapp.service_url(&service));
            track(InteractionKind::Service, &service);
        });
    }
}

fn add_quick_contact_buttons(document: &web::Document, whatsapp: &Rc<WhatsApp>) {
    for item in dom::query_document(document, SEL_CONTACT_ITEMS) {
        let is_phone = item
            .query_selector(SEL_CONTACT_ICON)
            .ok()
            .flatten()
            .and_then(|icon| icon.text_content())
            .is_some_and(|text| text.contains(QUICK_CONTACT_ICON));
        if !is_phone {
            continue;
        }
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        button.set_class_name(CLASS_QUICK_CONTACT);
        button.set_inner_html(QUICK_CONTACT_HTML);
        let whatsapp = whatsapp.clone();
        dom::add_listener(&button, "click", move |_: web::Event| {
            open_quick_contact(&whatsapp);
        });
        _ = item.append_child(&button);
    }
}

fn add_floating_button(document: &web::Document, whatsapp: &Rc<WhatsApp>) {
    let (Ok(button), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    button.set_class_name(CLASS_FLOATING_CONTACT);
    button.set_inner_html(FLOATING_CONTACT_HTML);
    let whatsapp = whatsapp.clone();
    dom::add_listener(&button, "click", move |_: web::Event| {
        open_quick_contact(&whatsapp);
    });
    _ = body.append_child(&button);
}

fn read_form(form: &web::HtmlFormElement) -> ContactForm {
    let Ok(data) = web::FormData::new_with_form(form) else {
        return ContactForm::default();
    };
    let get = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactForm {
        name: get("name"),
        email: get("email"),
        service: get("service"),
        message: get("message"),
    }
}

fn hide_feedback(form: &web::HtmlFormElement) {
    if let Ok(Some(existing)) = form.query_selector(SEL_FORM_FEEDBACK) {
        existing.remove();
    }
}

fn show_feedback(document: &web::Document, form: &web::HtmlFormElement, feedback: &Feedback) {
    hide_feedback(form);
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(feedback.class_name());
    el.set_text_content(Some(feedback.text));
    _ = form.append_child(&el);

    let shown = el.clone();
    dom::set_timeout(FEEDBACK_SHOW_DELAY_MS, move || {
        _ = shown.class_list().add_1(CLASS_SHOW);
    });

    let form = form.clone();
    let reset = feedback.reset_form;
    let dismiss_ms = i32::try_from(feedback.dismiss_after.as_millis()).unwrap_or(i32::MAX);
    dom::set_timeout(dismiss_ms, move || {
        if reset {
            form.reset();
        }
        el.remove();
    });
}

fn wire_form(document: &web::Document, whatsapp: &Rc<WhatsApp>) {
    let Some(form) = document
        .get_element_by_id(ID_CONTACT_FORM)
        .and_then(|f| f.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let doc = document.clone();
    let whatsapp = whatsapp.clone();
    let target = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let contact = read_form(&target);
        let submission = contact.submit(&whatsapp);
        show_feedback(&doc, &target, submission.feedback());
        if let Submission::Accepted { url, .. } = submission {
            dom::set_timeout(CONTACT_OPEN_DELAY_MS, move || open(&url));
            track(InteractionKind::ContactForm, contact.tracked_service());
        }
    });
}

/// Wire every contact entry point. Call after content population so the
/// service buttons exist.
pub fn init(document: &web::Document) {
    let whatsapp = Rc::new(WhatsApp::new(CONTACT_PHONE));
    wire_service_buttons(document, &whatsapp);
    wire_form(document, &whatsapp);
    add_quick_contact_buttons(document, &whatsapp);
    add_floating_button(document, &whatsapp);
    log::info!("[contact] ready for +{}", whatsapp.digits());
}
