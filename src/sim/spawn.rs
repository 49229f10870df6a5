//! Asteroid and particle creation
//!
//! Three asteroid triggers: the initial field at game start, the periodic
//! edge spawn, and the pieces left by a split or a dead ship.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, AsteroidSize, GameEvent, Particle, Tint, Viewport, World};
use crate::{distance_between, generate_asteroid_points, random_range};

/// Give up on rejection sampling after this many draws
const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

impl<R: Rng> World<R> {
    /// Build and register an asteroid with randomized motion and outline
    pub fn spawn_asteroid(&mut self, pos: Vec2, size: AsteroidSize) -> u32 {
        let id = self.next_entity_id();
        let max_speed = self.tuning.asteroid_max_speed;
        let max_rot = self.tuning.asteroid_max_rot_speed;
        let radius = size.radius();

        let vel = Vec2::new(
            random_range(&mut self.rng, -max_speed, max_speed),
            random_range(&mut self.rng, -max_speed, max_speed),
        );
        let points = generate_asteroid_points(&mut self.rng, radius, size.segments());
        let rotation = random_range(&mut self.rng, 0.0, std::f32::consts::TAU);
        let rot_speed = random_range(&mut self.rng, -max_rot, max_rot);

        self.asteroids.push(Asteroid {
            id,
            pos,
            vel,
            radius,
            size,
            health: size.initial_health(),
            points,
            rotation,
            rot_speed,
        });
        self.events.push(GameEvent::AsteroidSpawned { id, size });
        id
    }

    fn random_size(&mut self) -> AsteroidSize {
        AsteroidSize::ALL[self.rng.random_range(0..AsteroidSize::ALL.len())]
    }

    /// Anywhere on the canvas, but not on top of the ship
    pub(crate) fn spawn_initial_asteroid(&mut self, viewport: Viewport) -> u32 {
        let safe = self.tuning.spawn_safe_radius;
        let ship_pos = self.ship.pos;

        let mut pos = Vec2::ZERO;
        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            pos = Vec2::new(
                random_range(&mut self.rng, 0.0, viewport.width),
                random_range(&mut self.rng, 0.0, viewport.height),
            );
            if distance_between(pos, ship_pos) >= safe {
                break;
            }
            if attempt + 1 == MAX_PLACEMENT_ATTEMPTS {
                log::warn!("No spawn point {safe}px clear of the ship; placing anyway");
            }
        }

        let size = self.random_size();
        self.spawn_asteroid(pos, size)
    }

    /// On a uniformly chosen screen edge
    pub(crate) fn spawn_edge_asteroid(&mut self, viewport: Viewport) -> u32 {
        let side = self.rng.random_range(0..4);
        let along_x = random_range(&mut self.rng, 0.0, viewport.width);
        let along_y = random_range(&mut self.rng, 0.0, viewport.height);
        let pos = match side {
            0 => Vec2::new(0.0, along_y),
            1 => Vec2::new(viewport.width, along_y),
            2 => Vec2::new(along_x, 0.0),
            _ => Vec2::new(along_x, viewport.height),
        };

        let size = self.random_size();
        self.spawn_asteroid(pos, size)
    }

    /// Burst of `count` particles scattering from `pos`
    pub fn spawn_particles(&mut self, pos: Vec2, count: u32, tint: Tint, speed: f32) {
        let life = self.tuning.particles.life;
        for _ in 0..count {
            let id = self.next_entity_id();
            let radius = random_range(&mut self.rng, 1.0, 2.5);
            let vel = Vec2::new(
                random_range(&mut self.rng, -1.0, 1.0) * 2.0 * speed,
                random_range(&mut self.rng, -1.0, 1.0) * 2.0 * speed,
            );
            self.particles.push(Particle {
                id,
                pos,
                vel,
                radius,
                life,
                tint,
            });
        }
    }
}

/// Advance the periodic spawn clock, releasing an asteroid when it fills
pub fn periodic_spawn<R: Rng>(world: &mut World<R>, viewport: Viewport) {
    world.spawn_timer += 1;
    if world.spawn_timer >= world.tuning.spawn_interval {
        world.spawn_timer = 0;
        let id = world.spawn_edge_asteroid(viewport);
        log::debug!("Periodic asteroid {id} at tick {}", world.time_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameStatus;

    fn started(seed: u64) -> World {
        let mut world = World::new(seed);
        world.resize(800.0, 600.0);
        world.start_game();
        world
    }

    #[test]
    fn test_spawned_asteroid_follows_size_rules() {
        let mut world = started(11);
        world.asteroids.clear();
        for size in AsteroidSize::ALL {
            world.spawn_asteroid(Vec2::new(100.0, 100.0), size);
        }
        for asteroid in &world.asteroids {
            assert_eq!(asteroid.radius, asteroid.size.radius());
            assert_eq!(asteroid.health, asteroid.size.initial_health());
            assert_eq!(asteroid.points.len(), asteroid.size.segments());
            assert!(asteroid.vel.x.abs() <= 2.0 && asteroid.vel.y.abs() <= 2.0);
            assert!((0.0..=std::f32::consts::TAU).contains(&asteroid.rotation));
            assert!(asteroid.rot_speed.abs() <= 0.02);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut world = started(5);
        for _ in 0..10 {
            world.spawn_asteroid(Vec2::ZERO, AsteroidSize::Small);
        }
        world.spawn_particles(Vec2::ZERO, 10, Tint::Shard, 1.0);
        let mut ids: Vec<u32> = world
            .asteroids
            .iter()
            .map(|a| a.id)
            .chain(world.particles.iter().map(|p| p.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_periodic_spawn_on_interval() {
        let mut world = started(8);
        assert_eq!(world.status, GameStatus::Playing);
        let viewport = world.viewport.expect("viewport set");
        let before = world.asteroids.len();

        for _ in 0..269 {
            periodic_spawn(&mut world, viewport);
        }
        assert_eq!(world.asteroids.len(), before);
        assert_eq!(world.spawn_timer, 269);

        periodic_spawn(&mut world, viewport);
        assert_eq!(world.asteroids.len(), before + 1);
        assert_eq!(world.spawn_timer, 0);

        let edge = world.asteroids.last().expect("spawned").pos;
        let on_edge = edge.x == 0.0 || edge.x == 800.0 || edge.y == 0.0 || edge.y == 600.0;
        assert!(on_edge, "periodic spawn at {edge:?} is not on an edge");
    }

    #[test]
    fn test_particle_burst() {
        let mut world = started(2);
        world.spawn_particles(Vec2::new(50.0, 60.0), 16, Tint::Shard, 1.0);
        assert_eq!(world.particles.len(), 16);
        for p in &world.particles {
            assert_eq!(p.pos, Vec2::new(50.0, 60.0));
            assert_eq!(p.life, 60);
            assert!(p.radius >= 1.0 && p.radius <= 2.5);
            assert!(p.vel.x.abs() <= 2.0 && p.vel.y.abs() <= 2.0);
        }
    }

    #[test]
    fn test_tiny_viewport_still_places_initial_field() {
        let mut world = World::new(4);
        world.resize(50.0, 50.0);
        assert!(world.start_game());
        assert_eq!(world.asteroids.len(), 4);
    }
}
