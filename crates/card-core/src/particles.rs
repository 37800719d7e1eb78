//! Confetti burst simulation.
//!
//! One burst is a fixed set of particles spawned near the viewport center
//! and stepped once per animation frame. Lifetimes are capped below the
//! frame budget, so a burst always dies out before the render loop stops.

use crate::constants::{BURST_COUNT, FADE_FRAMES, SPAWN_JITTER_X, SPAWN_JITTER_Y};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Rect,
    Heart,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub gravity: f32,
    pub size: Vec2,
    pub rotation: f32,
    pub spin: f32,
    /// Remaining lifetime in frames; strictly decreasing.
    pub life: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// One simulation frame.
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.vel.y += self.gravity;
        self.rotation += self.spin;
        self.life -= 1.0;
    }

    /// Render opacity: fades linearly over the last `FADE_FRAMES` of life.
    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.life / FADE_FRAMES).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Cubic control points of the heart outline, in a unit-ish local frame.
/// Drawn as moveTo(HEART_TOP), two mirrored bezier segments, close, fill.
pub const HEART_TOP: [f32; 2] = [0.0, 0.3];
pub const HEART_LEFT: [[f32; 2]; 3] = [[-0.6, -0.1], [-0.5, -0.8], [0.0, -0.5]];
pub const HEART_RIGHT: [[f32; 2]; 3] = [[0.5, -0.8], [0.6, -0.1], [0.0, 0.3]];
/// Local-frame scale applied when drawing a heart particle.
pub const HEART_SCALE: f32 = 10.0 / 18.0;

/// Spawn one burst's worth of particles around `center`.
pub fn spawn_burst<R: Rng>(rng: &mut R, center: Vec2) -> Vec<Particle> {
    (0..BURST_COUNT)
        .map(|_| Particle {
            pos: center
                + Vec2::new(
                    rng.gen::<f32>() * 2.0 * SPAWN_JITTER_X - SPAWN_JITTER_X,
                    rng.gen::<f32>() * 2.0 * SPAWN_JITTER_Y - SPAWN_JITTER_Y,
                ),
            vel: Vec2::new(
                rng.gen::<f32>() * 8.0 - 4.0,
                rng.gen::<f32>() * -10.0 - 3.0,
            ),
            gravity: 0.25 + rng.gen::<f32>() * 0.2,
            size: Vec2::new(6.0 + rng.gen::<f32>() * 6.0, 6.0 + rng.gen::<f32>() * 10.0),
            rotation: rng.gen::<f32>() * std::f32::consts::PI,
            spin: rng.gen::<f32>() * 0.2 - 0.1,
            life: 140.0 + rng.gen::<f32>() * 40.0,
            kind: if rng.gen::<f32>() < 0.35 {
                ParticleKind::Heart
            } else {
                ParticleKind::Rect
            },
        })
        .collect()
}
