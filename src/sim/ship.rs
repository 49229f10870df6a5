//! Ship control, death and respawn
//!
//! Death and life loss are separate steps: a collision only starts the
//! respawn countdown, and the life is taken when that countdown runs out.

use glam::Vec2;
use rand::Rng;

use super::state::{AsteroidSize, Bullet, GameEvent, GameStatus, Tint, Viewport, World};
use super::tick::TickInput;

/// Advance the ship one tick: respawn countdown, or steering and firing
pub fn update_ship<R: Rng>(world: &mut World<R>, viewport: Viewport, input: &TickInput) {
    if world.ship.respawn_ticks > 0 {
        world.ship.respawn_ticks -= 1;
        if world.ship.respawn_ticks == 0 {
            lose_life(world, viewport);
        }
        return;
    }

    let tuning = &world.tuning;
    let ship = &mut world.ship;

    if ship.invincible_ticks > 0 {
        ship.invincible_ticks -= 1;
    }

    // Momentum turning: input accelerates, friction always bleeds it off
    match (input.left, input.right) {
        (true, false) => ship.rot_vel -= tuning.rot_accel,
        (false, true) => ship.rot_vel += tuning.rot_accel,
        _ => {}
    }
    ship.rot_vel *= tuning.rot_friction;
    ship.angle += ship.rot_vel;

    ship.thrusting = input.thrust;

    if input.fire {
        fire(world);
    }

    let tuning = &world.tuning;
    let ship = &mut world.ship;
    if ship.thrusting {
        ship.vel += ship.heading() * tuning.thrust;
    }
    ship.vel *= tuning.friction;
    ship.pos = viewport.wrap(ship.pos + ship.vel);

    if ship.shoot_cooldown > 0 {
        ship.shoot_cooldown -= 1;
    }
}

/// Launch a bullet from the nose if the gun is ready.
///
/// The bullet carries the ship's velocity on top of its muzzle speed.
pub fn fire<R: Rng>(world: &mut World<R>) -> Option<u32> {
    if world.ship.is_respawning() || world.ship.shoot_cooldown > 0 {
        return None;
    }

    let id = world.next_entity_id();
    let ship = &mut world.ship;
    world.bullets.push(Bullet {
        id,
        pos: ship.nose(),
        vel: ship.heading() * world.tuning.bullet_speed + ship.vel,
        radius: world.tuning.bullet_radius,
        life: world.tuning.bullet_life,
    });
    ship.shoot_cooldown = world.tuning.bullet_cooldown;
    world.events.push(GameEvent::BulletFired { id });
    Some(id)
}

/// Ship hit an asteroid: wreck it and start the respawn countdown.
///
/// A small asteroid is left where the ship was, thrown along the killer's
/// path. Lives are untouched here.
pub fn destroy_ship<R: Rng>(world: &mut World<R>, killer_id: u32, killer_vel: Vec2) {
    let pos = world.ship.pos;
    let particles = &world.tuning.particles;
    let (count, speed) = (particles.ship_death, particles.ship_death_speed);
    world.spawn_particles(pos, count, Tint::Ship, speed);

    let fragment_vel = killer_vel * world.tuning.fragment_inherit;
    let fragment_id = world.spawn_asteroid(pos, AsteroidSize::Small);
    if let Some(fragment) = world.asteroids.iter_mut().rev().find(|a| a.id == fragment_id) {
        fragment.vel = fragment_vel;
    }

    let ship = &mut world.ship;
    ship.respawn_ticks = world.tuning.respawn_ticks;
    ship.thrusting = false;
    ship.rot_vel = 0.0;

    world.events.push(GameEvent::ShipDestroyed {
        pos,
        killer: killer_id,
    });
    log::debug!("Ship destroyed at ({:.0}, {:.0}) by asteroid {killer_id}", pos.x, pos.y);
}

/// Respawn countdown finished: spend a life, then reappear or end the game
fn lose_life<R: Rng>(world: &mut World<R>, viewport: Viewport) {
    world.lives = world.lives.saturating_sub(1);
    world.events.push(GameEvent::LifeLost {
        remaining: world.lives,
    });

    if world.lives == 0 {
        world.status = GameStatus::GameOver;
        world.events.push(GameEvent::GameOver { score: world.score });
        log::info!("Game over with score {} (high {})", world.score, world.high_score);
        return;
    }

    let ship = &mut world.ship;
    ship.pos = viewport.center();
    ship.vel = Vec2::ZERO;
    ship.rot_vel = 0.0;
    ship.invincible_ticks = world.tuning.invincibility_ticks;
    world.events.push(GameEvent::Respawned);
    log::info!("Life lost, {} remaining", world.lives);
}
