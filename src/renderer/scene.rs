//! World state to draw commands
//!
//! Pure read of the world; the only randomness (thrust flame flicker) comes
//! from a caller-supplied RNG so the simulation's own stream is untouched.

use glam::Vec2;
use rand::Rng;

use super::vertex::colors;
use crate::sim::{Asteroid, GameStatus, Particle, Ship, Tint, World};

/// Ticks per on/off phase of the invincibility blink
pub const BLINK_PERIOD: u32 = 5;

/// Chance a thrusting ship shows its flame on a given frame
const FLAME_CHANCE: f32 = 0.8;

/// One drawing primitive, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Closed outline through `points`
    StrokePolygon { points: Vec<Vec2>, color: [f32; 4] },
    Line {
        from: Vec2,
        to: Vec2,
        color: [f32; 4],
    },
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCmd>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the frame: particles, bullets, asteroids, then the ship
pub fn build_scene<R, F: Rng>(world: &World<R>, fx: &mut F) -> Scene {
    let mut commands = Vec::with_capacity(
        world.particles.len() + world.bullets.len() + world.asteroids.len() + 2,
    );

    let fade_start = world.tuning.particles.fade_start;
    commands.extend(world.particles.iter().map(|p| particle_cmd(p, fade_start)));

    commands.extend(world.bullets.iter().map(|b| DrawCmd::StrokeCircle {
        center: b.pos,
        radius: b.radius,
        color: colors::BULLET,
    }));

    commands.extend(world.asteroids.iter().map(asteroid_cmd));

    if world.status == GameStatus::Playing && ship_visible(&world.ship) {
        push_ship(&mut commands, &world.ship, fx);
    }

    Scene { commands }
}

/// Particle alpha: full until `fade_start` ticks remain, then linear to zero
pub fn particle_alpha(life: u32, fade_start: u32) -> f32 {
    if life < fade_start {
        life as f32 / fade_start as f32
    } else {
        1.0
    }
}

fn particle_cmd(particle: &Particle, fade_start: u32) -> DrawCmd {
    let base = match particle.tint {
        Tint::Damaged => colors::ASTEROID_STURDY,
        Tint::Shard => colors::ASTEROID_CRACKED,
        Tint::Ship => colors::SHIP,
    };
    DrawCmd::FillCircle {
        center: particle.pos,
        radius: particle.radius,
        color: colors::faded(base, particle_alpha(particle.life, fade_start)),
    }
}

fn asteroid_cmd(asteroid: &Asteroid) -> DrawCmd {
    let rotation = Vec2::from_angle(asteroid.rotation);
    let points = asteroid
        .points
        .iter()
        .map(|&p| asteroid.pos + rotation.rotate(p))
        .collect();
    let color = if asteroid.health > 1 {
        colors::ASTEROID_STURDY
    } else {
        colors::ASTEROID_CRACKED
    };
    DrawCmd::StrokePolygon { points, color }
}

/// Hidden while respawning, and on alternate blink phases while invincible
pub fn ship_visible(ship: &Ship) -> bool {
    if ship.is_respawning() {
        return false;
    }
    !(ship.is_invincible() && (ship.invincible_ticks / BLINK_PERIOD) % 2 == 0)
}

fn push_ship<F: Rng>(commands: &mut Vec<DrawCmd>, ship: &Ship, fx: &mut F) {
    let r = ship.radius;
    let facing = Vec2::from_angle(ship.angle);
    let to_world = |local: Vec2| ship.pos + facing.rotate(local);

    let color = if ship.is_invincible() {
        colors::SHIP_INVINCIBLE
    } else {
        colors::SHIP
    };
    let hull = [
        Vec2::new(r, 0.0),
        Vec2::new(-r, r * 0.7),
        Vec2::new(-r * 0.5, 0.0),
        Vec2::new(-r, -r * 0.7),
    ];
    commands.push(DrawCmd::StrokePolygon {
        points: hull.into_iter().map(to_world).collect(),
        color,
    });

    if ship.thrusting && fx.random::<f32>() < FLAME_CHANCE {
        commands.push(DrawCmd::Line {
            from: to_world(Vec2::new(-r * 0.6, 0.0)),
            to: to_world(Vec2::new(-r * 1.5, 0.0)),
            color: colors::THRUST_FLAME,
        });
    }
}
