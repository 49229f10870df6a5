//! One simulation step
//!
//! Phase order per tick: periodic spawn, motion, ship, collisions. Each phase
//! takes the world by exclusive reference.

use rand::Rng;

use super::collision::resolve_collisions;
use super::motion::integrate;
use super::ship::update_ship;
use super::spawn::periodic_spawn;
use super::state::{GameEvent, GameStatus, World};

/// Controls held during this tick (sampled once, never queued)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Rotate counter-clockwise
    pub left: bool,
    /// Rotate clockwise
    pub right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Advance the world by one tick and return what happened.
///
/// Does nothing outside [`GameStatus::Playing`] or while the viewport is
/// unknown.
pub fn tick<R: Rng>(world: &mut World<R>, input: &TickInput) -> Vec<GameEvent> {
    if world.status != GameStatus::Playing {
        return world.drain_events();
    }
    let Some(viewport) = world.viewport else {
        log::debug!("Tick skipped: viewport not ready");
        return world.drain_events();
    };

    world.time_ticks += 1;

    periodic_spawn(world, viewport);
    integrate(world, viewport);
    update_ship(world, viewport, input);

    // The ship may have spent its last life above
    if world.status == GameStatus::Playing {
        resolve_collisions(world);
    }

    world.drain_events()
}
