//! Snapshot to triangle list
//!
//! Everything is drawn back to front in surface pixels; `RenderState` maps
//! the result to clip space.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors, with_alpha};
use crate::sim::{GamePhase, Snapshot};

const BALL_SEGMENTS: u32 = 32;
const KNOB_SEGMENTS: u32 = 16;
const PARTICLE_SEGMENTS: u32 = 8;

/// Elastic band width at rest and at full stretch, in reference pixels
const BAND_WIDTH_REST: f32 = 2.0;
const BAND_WIDTH_FULL: f32 = 6.0;

const PARTICLE_RADIUS: f32 = 3.0;
const GLOW_PADDING: f32 = 6.0;
const VEIL_ALPHA: f32 = 0.6;

/// Build the frame's triangles from a snapshot
pub fn build(snap: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(1024);
    let scale = snap.scale.max(f32::EPSILON);

    // Pole
    vertices.extend(shapes::line(
        snap.pole_base,
        snap.pole_top,
        snap.pole_thickness,
        colors::POLE,
    ));
    vertices.extend(shapes::circle(
        snap.pole_top,
        snap.pole_thickness,
        colors::POLE_ACCENT,
        KNOB_SEGMENTS,
    ));

    // Target with a soft halo
    let pad = Vec2::splat(GLOW_PADDING * scale);
    vertices.extend(shapes::rect(
        snap.target_pos - pad,
        snap.target_size + pad * 2.0,
        with_alpha(colors::TARGET_GLOW, 0.35),
    ));
    vertices.extend(shapes::rect(snap.target_pos, snap.target_size, colors::TARGET));

    if snap.phase == GamePhase::Aiming {
        let t = snap.stretch_ratio.clamp(0.0, 1.0);
        let width = (BAND_WIDTH_REST + (BAND_WIDTH_FULL - BAND_WIDTH_REST) * t) * scale;
        vertices.extend(shapes::line(snap.anchor, snap.ball_pos, width, colors::ELASTIC));
    }

    vertices.extend(shapes::circle(
        snap.anchor,
        (snap.pole_thickness * 0.75).max(1.0),
        colors::SUBTLE_GLOW,
        KNOB_SEGMENTS,
    ));

    if snap.phase != GamePhase::Exploding {
        let glow = if snap.ball_held { 0.45 } else { 0.2 };
        vertices.extend(shapes::radial_glow(
            snap.ball_pos,
            snap.ball_radius * 1.5,
            with_alpha(colors::BALL_GLOW, glow),
            with_alpha(colors::BALL_GLOW, 0.0),
            BALL_SEGMENTS,
        ));
        vertices.extend(shapes::circle(
            snap.ball_pos,
            snap.ball_radius,
            colors::BALL,
            BALL_SEGMENTS,
        ));
    }

    for particle in &snap.particles {
        vertices.extend(shapes::circle(
            particle.pos,
            PARTICLE_RADIUS * scale,
            with_alpha(colors::BURST, particle.life),
            PARTICLE_SEGMENTS,
        ));
    }

    vertices.extend(shapes::frame(snap.surface, snap.border_weight, colors::BORDER));

    if snap.phase == GamePhase::GameOver {
        vertices.extend(shapes::rect(
            Vec2::ZERO,
            snap.surface,
            with_alpha(colors::BACKGROUND, VEIL_ALPHA),
        ));
    }

    vertices
}
