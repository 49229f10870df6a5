//! Collision detection and combat resolution
//!
//! Bullets chip and split asteroids; an asteroid touching the ship wrecks it.
//! Removal is done by compaction: consumed bullets are left out of the
//! rebuilt list and broken asteroids are marked dead (health 0) and dropped
//! after the scan.

use rand::Rng;

use super::ship::destroy_ship;
use super::state::{Asteroid, Bullet, GameEvent, Tint, World};
use crate::distance_between;

/// Run both collision passes unless the ship is waiting to respawn
pub fn resolve_collisions<R: Rng>(world: &mut World<R>) {
    if world.ship.is_respawning() {
        return;
    }
    bullets_vs_asteroids(world);
    ship_vs_asteroids(world);
}

/// Each bullet hits at most one asteroid; a hit always consumes the bullet.
///
/// Bullets are checked newest first, and each scans the asteroid list from
/// the back, so pieces from a split earlier in the pass are already targets.
fn bullets_vs_asteroids<R: Rng>(world: &mut World<R>) {
    let bullets = std::mem::take(&mut world.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());

    for bullet in bullets.into_iter().rev() {
        let target = world
            .asteroids
            .iter()
            .rposition(|a| a.is_alive() && distance_between(bullet.pos, a.pos) < a.radius);

        match target {
            Some(index) => hit_asteroid(world, index, &bullet),
            None => survivors.push(bullet),
        }
    }

    survivors.reverse();
    world.bullets = survivors;
    world.asteroids.retain(Asteroid::is_alive);
}

/// Knock the asteroid along the bullet's path, chip it, and break it at zero
fn hit_asteroid<R: Rng>(world: &mut World<R>, index: usize, bullet: &Bullet) {
    let transfer = world.tuning.momentum_transfer;
    let asteroid = &mut world.asteroids[index];
    asteroid.vel += bullet.vel * transfer;

    let tint = if asteroid.health > 1 {
        Tint::Damaged
    } else {
        Tint::Shard
    };
    let particles = &world.tuning.particles;
    let (min, max, speed) = (particles.hit_min, particles.hit_max, particles.hit_speed);
    let count = world.rng.random_range(min..=max);
    world.spawn_particles(bullet.pos, count, tint, speed);

    let asteroid = &mut world.asteroids[index];
    asteroid.health = asteroid.health.saturating_sub(1);
    let (id, remaining) = (asteroid.id, asteroid.health);
    world.events.push(GameEvent::AsteroidHit { id, remaining });

    if remaining == 0 {
        break_asteroid(world, index);
    }
}

/// Score a destroyed asteroid and replace it with its children, if any
fn break_asteroid<R: Rng>(world: &mut World<R>, index: usize) {
    let asteroid = &world.asteroids[index];
    let (id, pos, size) = (asteroid.id, asteroid.pos, asteroid.size);

    let points = size.points(&world.tuning);
    let debris = size.debris(&world.tuning);
    let speed = world.tuning.particles.split_speed;

    world.spawn_particles(pos, debris, Tint::Shard, speed);
    if let Some(child) = size.child() {
        world.spawn_asteroid(pos, child);
        world.spawn_asteroid(pos, child);
    }
    world.award(points);

    world.events.push(GameEvent::AsteroidDestroyed { id, size, points });
    log::debug!("Asteroid {id} ({size:?}) destroyed for {points} points");
}

/// First asteroid (in list order) overlapping the ship kills it
fn ship_vs_asteroids<R: Rng>(world: &mut World<R>) {
    if world.ship.is_invincible() {
        return;
    }

    let ship = &world.ship;
    let killer = world
        .asteroids
        .iter()
        .find(|a| distance_between(ship.pos, a.pos) < ship.radius + a.radius)
        .map(|a| (a.id, a.vel));

    if let Some((killer_id, killer_vel)) = killer {
        destroy_ship(world, killer_id, killer_vel);
    }
}
