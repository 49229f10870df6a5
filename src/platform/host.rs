//! Frame-driven game host
//!
//! One `frame()` per display refresh runs exactly one tick. The host owns
//! the world outright, so nothing else can mutate it mid-tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::input::HeldKeys;
use crate::renderer::{Scene, build_scene};
use crate::sim::{GameEvent, Hud, World, tick};
use crate::tuning::Tuning;

/// Stream for cosmetic randomness, kept apart from the simulation's
const FX_STREAM: u64 = 0x5eed_f1a3;

pub struct GameHost {
    world: World,
    keys: HeldKeys,
    /// Render-only randomness (flame flicker)
    fx_rng: Pcg32,
    running: bool,
}

impl GameHost {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("Host created with seed: {seed}");
        Self {
            world: World::with_rng(Pcg32::seed_from_u64(seed), tuning),
            keys: HeldKeys::new(),
            fx_rng: Pcg32::new(seed, FX_STREAM),
            running: true,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Test and debug access
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn hud(&self) -> Hud {
        self.world.hud()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Canvas resized; every later wrap uses the new bounds
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resize(width, height);
        log::debug!("Viewport resized to {width}x{height}");
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.key_up(key);
    }

    /// Window lost focus
    pub fn blur(&mut self) {
        self.keys.release_all();
    }

    /// Start (or restart) a session from the overlay button
    pub fn start_game(&mut self) -> bool {
        self.running && self.world.start_game()
    }

    /// Run one tick with the keys held right now
    pub fn frame(&mut self) -> Vec<GameEvent> {
        if !self.running {
            return Vec::new();
        }
        let input = self.keys.sample();
        tick(&mut self.world, &input)
    }

    /// Draw commands for the current state
    pub fn render(&mut self) -> Scene {
        if !self.running {
            return Scene::default();
        }
        build_scene(&self.world, &mut self.fx_rng)
    }

    /// Host view discarded: stop the frame chain and forget held keys
    pub fn shutdown(&mut self) {
        if self.running {
            self.running = false;
            self.keys.release_all();
            log::info!("Host shut down at tick {}", self.world.time_ticks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameStatus;

    fn host() -> GameHost {
        let mut host = GameHost::new(17, Tuning::default());
        host.resize(800.0, 600.0);
        host
    }

    #[test]
    fn test_frames_before_start_are_idle() {
        let mut host = host();
        assert!(host.frame().is_empty());
        assert_eq!(host.hud().status, GameStatus::Start);
    }

    #[test]
    fn test_held_fire_shoots() {
        let mut host = host();
        assert!(host.start_game());
        host.key_down(" ");
        let events = host.frame();
        assert!(events.iter().any(|e| matches!(e, GameEvent::BulletFired { .. })));
        host.key_up(" ");
        host.frame();
        assert_eq!(host.world().bullets.len(), 1);
    }

    #[test]
    fn test_blur_releases_thrust() {
        let mut host = host();
        host.start_game();
        host.key_down("ArrowUp");
        host.frame();
        assert!(host.world().ship.thrusting);
        host.blur();
        host.frame();
        assert!(!host.world().ship.thrusting);
    }

    #[test]
    fn test_shutdown_stops_frames() {
        let mut host = host();
        host.start_game();
        host.frame();
        let ticks = host.world().time_ticks;
        host.shutdown();
        assert!(host.frame().is_empty());
        assert!(host.render().is_empty());
        assert_eq!(host.world().time_ticks, ticks);
        assert!(!host.start_game());
    }

    #[test]
    fn test_render_shows_field() {
        let mut host = host();
        host.start_game();
        host.frame();
        let scene = host.render();
        assert!(scene.commands.len() >= host.world().asteroids.len());
    }
}
