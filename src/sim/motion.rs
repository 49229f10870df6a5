//! Per-tick motion for particles, bullets and asteroids
//!
//! The ship is integrated by its own state machine in `ship.rs` since its
//! motion depends on control input.

use super::state::{Viewport, World};

/// Age particles and bullets, drop the expired, move and wrap everything else
pub fn integrate<R>(world: &mut World<R>, viewport: Viewport) {
    for particle in &mut world.particles {
        particle.life = particle.life.saturating_sub(1);
    }
    world.particles.retain(|p| p.life > 0);
    for particle in &mut world.particles {
        particle.pos = viewport.wrap(particle.pos + particle.vel);
    }

    for bullet in &mut world.bullets {
        bullet.life = bullet.life.saturating_sub(1);
    }
    world.bullets.retain(|b| b.life > 0);
    for bullet in &mut world.bullets {
        bullet.pos = viewport.wrap(bullet.pos + bullet.vel);
    }

    for asteroid in &mut world.asteroids {
        asteroid.pos = viewport.wrap(asteroid.pos + asteroid.vel);
        asteroid.rotation += asteroid.rot_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{AsteroidSize, Bullet, Tint};
    use glam::Vec2;

    fn world() -> (World, Viewport) {
        let mut world = World::new(1);
        world.resize(800.0, 600.0);
        let viewport = world.viewport.expect("viewport set");
        (world, viewport)
    }

    #[test]
    fn test_bullet_moves_and_expires() {
        let (mut world, viewport) = world();
        world.bullets.push(Bullet {
            id: 1,
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(7.0, 0.0),
            radius: 2.0,
            life: 2,
        });

        integrate(&mut world, viewport);
        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].pos, Vec2::new(107.0, 100.0));
        assert_eq!(world.bullets[0].life, 1);

        integrate(&mut world, viewport);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn test_particles_expire() {
        let (mut world, viewport) = world();
        world.spawn_particles(Vec2::new(10.0, 10.0), 3, Tint::Shard, 1.0);
        for _ in 0..59 {
            integrate(&mut world, viewport);
        }
        assert_eq!(world.particles.len(), 3);
        integrate(&mut world, viewport);
        assert!(world.particles.is_empty());
    }

    #[test]
    fn test_asteroid_wraps_and_rotates() {
        let (mut world, viewport) = world();
        let id = world.spawn_asteroid(Vec2::new(799.0, 300.0), AsteroidSize::Small);
        let asteroid = world.asteroids.iter_mut().find(|a| a.id == id).expect("spawned");
        asteroid.vel = Vec2::new(2.0, 0.0);
        asteroid.rot_speed = 0.01;
        asteroid.rotation = 0.0;

        integrate(&mut world, viewport);
        let asteroid = &world.asteroids[0];
        assert_eq!(asteroid.pos, Vec2::new(0.0, 300.0));
        assert!((asteroid.rotation - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_asteroids_never_expire() {
        let (mut world, viewport) = world();
        world.spawn_asteroid(Vec2::new(400.0, 300.0), AsteroidSize::Large);
        for _ in 0..10_000 {
            integrate(&mut world, viewport);
        }
        assert_eq!(world.asteroids.len(), 1);
        let pos = world.asteroids[0].pos;
        assert!((0.0..=800.0).contains(&pos.x) && (0.0..=600.0).contains(&pos.y));
    }
}
