// Host-side tests for the page wiring constants.
// The main crate is wasm-only, so the pure-Rust module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use portfolio_core::constants as fx;
use portfolio_core::contact::WhatsApp;

#[test]
fn api_endpoints_are_rooted() {
    for endpoint in [API_INFO, API_SERVICES, API_SKILLS] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}

#[test]
fn contact_phone_normalises_to_digits() {
    let whatsapp = WhatsApp::new(CONTACT_PHONE);
    assert_eq!(whatsapp.digits(), "966547540321");
}

#[test]
fn every_profile_field_has_a_target() {
    use ProfileField::*;
    for field in [
        Title,
        Tagline,
        Experience,
        Projects,
        Clients,
        Bio,
        Location,
        Email,
        Phone,
        Availability,
    ] {
        assert!(
            PROFILE_TEXT_FIELDS.iter().any(|(_, f)| *f == field),
            "{field:?} is never displayed"
        );
    }
    let mut ids: Vec<_> = PROFILE_TEXT_FIELDS.iter().map(|(id, _)| *id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PROFILE_TEXT_FIELDS.len(), "duplicate element id");
}

#[test]
fn reveal_children_are_revealable_or_nested() {
    // skill items are revealed through their category, not on their own
    for sel in SEL_REVEAL_CHILDREN.split(", ") {
        assert!(sel.starts_with('.'));
    }
    assert!(SEL_REVEAL.split(", ").any(|s| s == ".skill-category"));
    assert!(SEL_GLITCH_POOL
        .split(", ")
        .all(|s| SEL_REVEAL.split(", ").any(|r| r == s)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn static_timings_are_positive() {
    assert!(FLOATING_BASE_DURATION_SEC > 0.0);
    assert!(FLOATING_DEFAULT_SPEED > 0.0);
    assert!(FLOATING_DELAY_STEP_SEC > 0.0);
    assert!(CARD_DELAY_STEP_SEC > 0.0);
    assert!(CATEGORY_DELAY_STEP_SEC > CARD_DELAY_STEP_SEC);
    assert!(FEEDBACK_SHOW_DELAY_MS > 0);
    assert!(CONTACT_OPEN_DELAY_MS > FEEDBACK_SHOW_DELAY_MS);
    assert!(VIEWPORT_WIDTH_FALLBACK_PX > fx::MOBILE_MAX_WIDTH_PX);
}

#[test]
fn page_overlays_do_not_reuse_effect_layer_classes() {
    use portfolio_core::ambient::{CLASS_GLYPH_LAYER, CLASS_PARTICLE_LAYER};
    for layer in [CLASS_PARTICLE_LAYER, CLASS_GLYPH_LAYER] {
        assert_ne!(CLASS_NOISE_OVERLAY, layer);
        assert_ne!(CLASS_FLOATING_CONTACT, layer);
    }
    assert_eq!(CLASS_NOISE_OVERLAY, "noise-overlay");
}

#[test]
fn button_pulse_matches_animation_length() {
    let secs: f64 = BUTTON_PULSE_ANIMATION
        .split_whitespace()
        .nth(1)
        .and_then(|d| d.strip_suffix('s'))
        .and_then(|d| d.parse().ok())
        .expect("animation duration");
    assert_eq!((secs * 1000.0).round() as i32, BUTTON_PULSE_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_timings_keep_their_ordering() {
    assert!(fx::GLITCH_TEXT_DURATION < fx::GLITCH_TEXT_INTERVAL);
    assert!(fx::GLITCH_DISTORT_DURATION < fx::GLITCH_POOL_INTERVAL);
    assert!(fx::PARTICLE_LIFETIME < fx::PARTICLE_INTERVAL);
    assert!(fx::PARTICLE_BATCH_MOBILE < fx::PARTICLE_BATCH_DESKTOP);
    assert!(fx::PARTICLE_DURATION_SEC.0 < fx::PARTICLE_DURATION_SEC.1);
    assert!(fx::GLYPH_DURATION_SEC.0 < fx::GLYPH_DURATION_SEC.1);
    assert!(fx::CURSOR_SMOOTHING > 0.0 && fx::CURSOR_SMOOTHING < 1.0);
    assert!(fx::NAVBAR_SCROLLED_PX < fx::FLOATING_CONTACT_SHOW_PX);
    assert!(fx::FEEDBACK_SUCCESS_DISMISS < fx::FEEDBACK_ERROR_DISMISS);
}
