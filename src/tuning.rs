//! Data-driven game balance
//!
//! Every per-tick constant the simulation reads lives here so a session can be
//! replayed with different numbers. Defaults match [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning errors
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value outside its allowed range
    #[error("Invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Particle burst sizes and spread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    /// Ticks a particle lives
    pub life: u32,
    /// Remaining life below which a particle fades out
    pub fade_start: u32,
    /// Hit burst size range (inclusive)
    pub hit_min: u32,
    pub hit_max: u32,
    pub hit_speed: f32,
    /// Bursts when an asteroid breaks apart
    pub split_large: u32,
    pub split_medium: u32,
    pub split_small: u32,
    pub split_speed: f32,
    /// Burst when the ship is destroyed
    pub ship_death: u32,
    pub ship_death_speed: f32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            life: PARTICLE_LIFE,
            fade_start: PARTICLE_FADE_START,
            hit_min: 2,
            hit_max: 4,
            hit_speed: 0.5,
            split_large: 16,
            split_medium: 6,
            split_small: 9,
            split_speed: 1.0,
            ship_death: 5,
            ship_death_speed: 1.5,
        }
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    pub friction: f32,
    pub rot_friction: f32,
    pub ship_size: f32,
    pub thrust: f32,
    pub rot_accel: f32,

    // === Weapons ===
    pub bullet_speed: f32,
    pub bullet_life: u32,
    pub bullet_cooldown: u32,
    pub bullet_radius: f32,

    // === Asteroids ===
    pub asteroid_max_speed: f32,
    pub asteroid_max_rot_speed: f32,
    pub points_large: u64,
    pub points_medium: u64,
    pub points_small: u64,
    pub momentum_transfer: f32,
    pub fragment_inherit: f32,

    // === Session ===
    pub start_lives: u32,
    pub invincibility_ticks: u32,
    pub respawn_ticks: u32,
    pub spawn_interval: u32,
    pub initial_asteroids: u32,
    pub spawn_safe_radius: f32,

    pub particles: ParticleTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            rot_friction: SHIP_ROT_FRICTION,
            ship_size: SHIP_SIZE,
            thrust: SHIP_THRUST,
            rot_accel: SHIP_ROT_ACCEL,

            bullet_speed: BULLET_SPEED,
            bullet_life: BULLET_LIFE,
            bullet_cooldown: BULLET_COOLDOWN,
            bullet_radius: BULLET_RADIUS,

            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_max_rot_speed: ASTEROID_MAX_ROT_SPEED,
            points_large: ASTEROID_POINTS_LARGE,
            points_medium: ASTEROID_POINTS_MEDIUM,
            points_small: ASTEROID_POINTS_SMALL,
            momentum_transfer: MOMENTUM_TRANSFER,
            fragment_inherit: FRAGMENT_INHERIT,

            start_lives: START_LIVES,
            invincibility_ticks: INVINCIBILITY_TIME,
            respawn_ticks: RESPAWN_DELAY,
            spawn_interval: SPAWN_INTERVAL,
            initial_asteroids: INITIAL_ASTEROIDS,
            spawn_safe_radius: SPAWN_SAFE_RADIUS,

            particles: ParticleTuning::default(),
        }
    }
}

impl Tuning {
    /// Ship collision radius
    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&contents)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the session invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        if self.start_lives == 0 {
            return invalid("start_lives", "must be at least 1");
        }
        if self.respawn_ticks == 0 {
            return invalid("respawn_ticks", "must be at least 1");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval", "must be at least 1");
        }
        if self.ship_size <= 0.0 {
            return invalid("ship_size", "must be positive");
        }
        if self.bullet_radius <= 0.0 {
            return invalid("bullet_radius", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.friction) || !(0.0..=1.0).contains(&self.rot_friction) {
            return invalid("friction", "must be within [0, 1]");
        }
        if self.asteroid_max_speed < 0.0 || self.asteroid_max_rot_speed < 0.0 {
            return invalid("asteroid_max_speed", "must not be negative");
        }
        if self.spawn_safe_radius < 0.0 {
            return invalid("spawn_safe_radius", "must not be negative");
        }
        if self.particles.hit_min > self.particles.hit_max {
            return invalid("particles.hit_min", "must not exceed hit_max");
        }
        Ok(())
    }
}
