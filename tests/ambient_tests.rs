// Host-side tests for the particle generator and glyph rain.

use portfolio_core::ambient::{
    GlyphRain, GlyphRainParams, ParticleGenerator, ParticleParams, CLASS_GLYPH_COLUMN,
    CLASS_GLYPH_LAYER, CLASS_PARTICLE, CLASS_PARTICLE_LAYER,
};
use portfolio_core::engine::Effect;
use portfolio_core::visual::{Node, VisualOp};
use std::time::Duration;

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

fn spawned_with_class(ops: &[VisualOp], class: &str) -> usize {
    ops.iter()
        .filter(|op| matches!(op, VisualOp::Spawn { class: c, .. } if *c == class))
        .count()
}

#[test]
fn start_spawns_layer_and_first_batch() {
    let mut particles = ParticleGenerator::new(ParticleParams::for_device(false), 42);
    let mut out = Vec::new();
    particles.start(secs(0), &mut out);
    assert_eq!(spawned_with_class(&out, CLASS_PARTICLE_LAYER), 1);
    assert_eq!(spawned_with_class(&out, CLASS_PARTICLE), 10);
    assert_eq!(particles.live_count(), 10);

    let mut mobile = ParticleGenerator::new(ParticleParams::for_device(true), 42);
    out.clear();
    mobile.start(secs(0), &mut out);
    assert_eq!(spawned_with_class(&out, CLASS_PARTICLE), 5);
}

#[test]
fn particle_attributes_are_within_ranges() {
    let mut particles = ParticleGenerator::new(ParticleParams::default(), 7);
    let mut out = Vec::new();
    particles.start(secs(0), &mut out);
    particles.advance(secs(60), &mut out);
    for p in particles.live_particles() {
        assert!((0.0..100.0).contains(&p.horizontal_position));
        assert!((3.0..7.0).contains(&p.lifetime_seconds));
        assert!((0.0..3.0).contains(&p.delay_seconds));
    }
    for op in &out {
        if let VisualOp::Spawn {
            class: CLASS_PARTICLE,
            styles,
            parent,
            ..
        } = op
        {
            assert!(matches!(parent, Some(Node::Spawned(_))));
            let names: Vec<_> = styles.iter().map(|(k, _)| *k).collect();
            assert_eq!(names, vec!["left", "animation-duration", "animation-delay"]);
        }
    }
}

#[test]
fn particles_expire_after_8s_and_respawn_every_15s() {
    let mut particles = ParticleGenerator::new(ParticleParams::default(), 1);
    let mut out = Vec::new();
    particles.start(secs(0), &mut out);
    out.clear();
    particles.advance(secs(8), &mut out);
    let despawned = out
        .iter()
        .filter(|op| matches!(op, VisualOp::Despawn { .. }))
        .count();
    assert_eq!(despawned, 10);
    assert_eq!(particles.live_count(), 0);

    out.clear();
    particles.advance(secs(15), &mut out);
    assert_eq!(spawned_with_class(&out, CLASS_PARTICLE), 10);
    assert_eq!(particles.spawned_total(), 20);
}

#[test]
fn population_stays_bounded() {
    for mobile in [false, true] {
        let params = ParticleParams::for_device(mobile);
        let bound = params.population_bound();
        assert!(bound <= if mobile { 10 } else { 20 });
        let mut particles = ParticleGenerator::new(params, 3);
        let mut out = Vec::new();
        particles.start(Duration::ZERO, &mut out);
        for step in 1..=1_200u64 {
            particles.advance(Duration::from_millis(step * 250), &mut out);
            assert!(particles.live_count() <= bound);
        }
    }
}

#[test]
fn teardown_removes_layer_and_cancels_timers() {
    let mut particles = ParticleGenerator::new(ParticleParams::default(), 5);
    let mut out = Vec::new();
    particles.start(secs(0), &mut out);
    let layer = match &out[0] {
        VisualOp::Spawn { id, .. } => *id,
        other => panic!("expected layer spawn, got {other:?}"),
    };
    out.clear();
    particles.teardown(&mut out);
    assert_eq!(out, vec![VisualOp::Despawn { id: layer }]);
    assert_eq!(particles.pending_timers(), 0);
    out.clear();
    particles.advance(secs(120), &mut out);
    particles.start(secs(120), &mut out);
    assert!(out.is_empty());
}

#[test]
fn glyph_rain_builds_fifty_columns_of_twenty_glyphs() {
    let params = GlyphRainParams::default();
    let charset: Vec<char> = params.charset.chars().collect();
    let mut rain = GlyphRain::new(params, 11);
    let mut out = Vec::new();
    rain.start(&mut out);
    assert_eq!(spawned_with_class(&out, CLASS_GLYPH_LAYER), 1);
    assert_eq!(spawned_with_class(&out, CLASS_GLYPH_COLUMN), 50);
    assert_eq!(rain.column_count(), 50);
    for op in &out {
        if let VisualOp::Spawn {
            class: CLASS_GLYPH_COLUMN,
            html: Some(html),
            ..
        } = op
        {
            let glyphs: Vec<&str> = html.split("<br>").filter(|s| !s.is_empty()).collect();
            assert_eq!(glyphs.len(), 20);
            for g in glyphs {
                let mut chars = g.chars();
                let c = chars.next().expect("one glyph");
                assert!(chars.next().is_none());
                assert!(charset.contains(&c));
            }
        }
    }
    // never regenerated
    out.clear();
    rain.start(&mut out);
    rain.advance(secs(600), &mut out);
    assert!(out.is_empty());
}
