//! Drift Rocks - A wrap-around asteroid field arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, spawning, ship state)
//! - `renderer`: Draw command generation and line tessellation
//! - `platform`: Held-key input, viewport and the per-frame host
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;
use rand::Rng;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Simulation rate the per-tick constants are tuned for
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Ship handling
    pub const FRICTION: f32 = 0.99;
    pub const SHIP_ROT_FRICTION: f32 = 0.92;
    pub const SHIP_SIZE: f32 = 20.0;
    pub const SHIP_THRUST: f32 = 0.15;
    pub const SHIP_ROT_ACCEL: f32 = 0.008;
    /// Initial heading (pointing up on screen)
    pub const SHIP_START_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;

    /// Bullets
    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_LIFE: u32 = 60; // 1 second
    pub const BULLET_COOLDOWN: u32 = 15;
    pub const BULLET_RADIUS: f32 = 2.0;

    /// Asteroids
    pub const ASTEROID_MAX_SPEED: f32 = 2.0;
    pub const ASTEROID_MAX_ROT_SPEED: f32 = 0.02;
    pub const ASTEROID_POINTS_LARGE: u64 = 20;
    pub const ASTEROID_POINTS_MEDIUM: u64 = 50;
    pub const ASTEROID_POINTS_SMALL: u64 = 100;
    /// Fraction of bullet velocity added to an asteroid on hit
    pub const MOMENTUM_TRANSFER: f32 = 0.05;
    /// Multiplier on the killer's velocity for the fragment left by a dead ship
    pub const FRAGMENT_INHERIT: f32 = 1.2;

    /// Session
    pub const START_LIVES: u32 = 3;
    pub const INVINCIBILITY_TIME: u32 = 90; // 1.5 seconds
    pub const RESPAWN_DELAY: u32 = 60; // 1 second
    pub const SPAWN_INTERVAL: u32 = 270; // 4.5 seconds
    pub const INITIAL_ASTEROIDS: u32 = 4;
    /// Initial asteroids never start closer than this to the ship
    pub const SPAWN_SAFE_RADIUS: f32 = 150.0;

    /// Particles
    pub const PARTICLE_LIFE: u32 = 60;
    pub const PARTICLE_FADE_START: u32 = 30;
}

/// Uniform float in `[min, max)`
#[inline]
pub fn random_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Map a position back onto the `[0, width] x [0, height]` torus.
///
/// Only positions strictly outside the bounds move; a coordinate that sits
/// exactly on an edge is left alone.
#[inline]
pub fn wrap_around(pos: Vec2, width: f32, height: f32) -> Vec2 {
    let mut out = pos;
    if pos.x < 0.0 {
        out.x = width;
    } else if pos.x > width {
        out.x = 0.0;
    }
    if pos.y < 0.0 {
        out.y = height;
    } else if pos.y > height {
        out.y = 0.0;
    }
    out
}

/// Euclidean distance between two points
#[inline]
pub fn distance_between(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector for a heading angle
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Generate a jagged outline around the local origin.
///
/// One point per equal angular slice, each at a distance sampled uniformly
/// from `[0.7, 1.3] * radius`.
pub fn generate_asteroid_points<R: Rng>(
    rng: &mut R,
    radius: f32,
    segments: usize,
) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            let offset = random_range(rng, radius * 0.7, radius * 1.3);
            heading_vector(angle) * offset
        })
        .collect()
}
