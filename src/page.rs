//! Scans the populated document into the element sets the host animates.

use crate::constants::*;
use crate::dom;
use crate::visuals::DomRegistry;
use portfolio_core::host::{Page, RevealTarget, SkillBar};
use portfolio_core::visual::seconds;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn scan(document: &web::Document, registry: &mut DomRegistry, profile_name: &str) -> Page {
    let mut ids = |els: Vec<web::Element>| -> Vec<_> { els.iter().map(|e| registry.id_of(e)).collect() };
    let glitch_text = ids(dom::query_document(document, SEL_GLITCH_TEXT));
    let glitch_pool = ids(dom::query_document(document, SEL_GLITCH_POOL));
    let parallax = ids(dom::query_document(document, SEL_PARALLAX));

    let reveal = dom::query_document(document, SEL_REVEAL)
        .iter()
        .map(|el| RevealTarget {
            id: registry.id_of(el),
            children: dom::query_all(el, SEL_REVEAL_CHILDREN)
                .iter()
                .map(|c| registry.id_of(c))
                .collect(),
        })
        .collect();

    let counters = dom::query_document(document, SEL_COUNTERS)
        .iter()
        .map(|el| (registry.id_of(el), el.text_content().unwrap_or_default()))
        .collect();

    let skills = dom::query_document(document, SEL_SKILL_ITEMS)
        .iter()
        .filter_map(|item| {
            let bar = item.query_selector(SEL_SKILL_BAR).ok().flatten()?;
            Some(SkillBar {
                item: registry.id_of(item),
                bar: registry.id_of(&bar),
                level: item.get_attribute("data-level").unwrap_or_default(),
            })
        })
        .collect();

    let title = document
        .query_selector(SEL_HERO_TITLE)
        .ok()
        .flatten()
        .filter(|_| !profile_name.is_empty())
        .map(|el| (registry.id_of(&el), profile_name.to_string()));

    Page {
        reveal,
        counters,
        skills,
        glitch_text,
        glitch_pool,
        parallax,
        title,
        scroll_y: dom::scroll_y(),
    }
}

fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property(property, value);
    }
}

/// Static page dressing: the noise overlay, floating decorations at their
/// `data-speed`, and staggered delays for cards and skill categories.
pub fn decorate(document: &web::Document) {
    if let (Ok(noise), Some(body)) = (document.create_element("div"), document.body()) {
        noise.set_class_name(CLASS_NOISE_OVERLAY);
        _ = body.append_child(&noise);
    }
    for (index, el) in dom::query_document(document, SEL_PARALLAX).iter().enumerate() {
        let speed = el
            .get_attribute("data-speed")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|s| *s > 0.0)
            .unwrap_or(FLOATING_DEFAULT_SPEED);
        set_style(el, "animation-duration", &seconds(FLOATING_BASE_DURATION_SEC / speed));
        set_style(el, "animation-delay", &seconds(index as f64 * FLOATING_DELAY_STEP_SEC));
    }
    for (selector, step) in [
        (SEL_SERVICE_CARDS, CARD_DELAY_STEP_SEC),
        (SEL_SKILL_CATEGORIES, CATEGORY_DELAY_STEP_SEC),
    ] {
        for (index, el) in dom::query_document(document, selector).iter().enumerate() {
            set_style(el, "animation-delay", &seconds(index as f64 * step));
        }
    }
}
