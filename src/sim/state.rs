//! Game state and core simulation types
//!
//! The [`World`] aggregate owns every entity and all session counters. Tick
//! phases borrow it exclusively, one after another.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::SHIP_START_ANGLE;
use crate::heading_vector;
use crate::tuning::Tuning;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Title screen, nothing simulates
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Lives exhausted (terminal until the next start)
    GameOver,
}

/// Asteroid size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 3] = [AsteroidSize::Large, AsteroidSize::Medium, AsteroidSize::Small];

    /// Collision radius
    pub const fn radius(self) -> f32 {
        match self {
            AsteroidSize::Large => 50.0,
            AsteroidSize::Medium => 25.0,
            AsteroidSize::Small => 12.0,
        }
    }

    /// Hits needed to break it
    pub const fn initial_health(self) -> u32 {
        match self {
            AsteroidSize::Large => 4,
            AsteroidSize::Medium => 2,
            AsteroidSize::Small => 1,
        }
    }

    /// Outline vertex count
    pub const fn segments(self) -> usize {
        match self {
            AsteroidSize::Large => 12,
            _ => 8,
        }
    }

    /// Size of the two pieces left behind, if any
    pub const fn child(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Score for destroying one (smallest pays most)
    pub fn points(self, tuning: &Tuning) -> u64 {
        match self {
            AsteroidSize::Large => tuning.points_large,
            AsteroidSize::Medium => tuning.points_medium,
            AsteroidSize::Small => tuning.points_small,
        }
    }

    /// Particles released when it breaks
    pub fn debris(self, tuning: &Tuning) -> u32 {
        match self {
            AsteroidSize::Large => tuning.particles.split_large,
            AsteroidSize::Medium => tuning.particles.split_medium,
            AsteroidSize::Small => tuning.particles.split_small,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Heading (radians)
    pub angle: f32,
    /// Angular velocity (radians/tick)
    pub rot_vel: f32,
    pub thrusting: bool,
    /// Ticks until the gun can fire again
    pub shoot_cooldown: u32,
    /// Ticks of collision immunity remaining
    pub invincible_ticks: u32,
    /// Ticks until the ship reappears (0 = alive and controllable)
    pub respawn_ticks: u32,
}

impl Ship {
    pub fn new(id: u32, radius: f32) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            angle: SHIP_START_ANGLE,
            rot_vel: 0.0,
            thrusting: false,
            shoot_cooldown: 0,
            invincible_ticks: 0,
            respawn_ticks: 0,
        }
    }

    /// Absent from the world: not drawn, not collidable, not controllable
    pub fn is_respawning(&self) -> bool {
        self.respawn_ticks > 0
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// Unit vector along the heading
    pub fn heading(&self) -> Vec2 {
        heading_vector(self.angle)
    }

    /// Tip of the ship, where bullets leave
    pub fn nose(&self) -> Vec2 {
        self.pos + self.heading() * self.radius
    }
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub size: AsteroidSize,
    /// Hits remaining (0 = destroyed this tick, pending removal)
    pub health: u32,
    /// Outline offsets from `pos`, fixed at creation
    pub points: Vec<Vec2>,
    /// Draw rotation (radians)
    pub rotation: f32,
    /// Radians per tick
    pub rot_speed: f32,
}

impl Asteroid {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// A shot fired by the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Ticks until expiry
    pub life: u32,
}

/// Particle color family, resolved to RGBA by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    /// Chip off an asteroid that survives the hit
    Damaged,
    /// Debris from a breaking asteroid
    Shard,
    /// Wreckage of the ship
    Ship,
}

/// A particle for visual effects (never collides)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub life: u32,
    pub tint: Tint,
}

/// Simulation bounds, equal to the canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Returns `None` for degenerate sizes (surface not ready)
    pub fn new(width: f32, height: f32) -> Option<Self> {
        (width > 0.0 && height > 0.0).then_some(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        crate::wrap_around(pos, self.width, self.height)
    }
}

/// Something that happened during a tick, for HUD, logging and sound hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    AsteroidSpawned { id: u32, size: AsteroidSize },
    BulletFired { id: u32 },
    AsteroidHit { id: u32, remaining: u32 },
    AsteroidDestroyed { id: u32, size: AsteroidSize, points: u64 },
    ShipDestroyed { pos: Vec2, killer: u32 },
    LifeLost { remaining: u32 },
    Respawned,
    GameOver { score: u64 },
}

/// What the HUD and overlays read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub high_score: u64,
    pub lives: u32,
    /// Ship icons shown beside the score
    pub reserve_ships: u32,
    pub status: GameStatus,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World<R = Pcg32> {
    pub tuning: Tuning,
    /// Single source of randomness for the whole simulation
    pub rng: R,
    /// `None` until the render surface reports a size
    pub viewport: Option<Viewport>,
    pub status: GameStatus,
    pub score: u64,
    /// Running max of `score` across sessions in this process
    pub high_score: u64,
    pub lives: u32,
    /// Ticks since the last periodic spawn
    pub spawn_timer: u32,
    /// Simulation tick counter for the current session
    pub time_ticks: u64,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl World<Pcg32> {
    /// Create a world seeded for reproducibility
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), Tuning::default())
    }
}

impl<R: Rng> World<R> {
    /// Create a world with an explicit random source and tuning
    pub fn with_rng(rng: R, tuning: Tuning) -> Self {
        let ship = Ship::new(0, tuning.ship_radius());
        Self {
            lives: tuning.start_lives,
            tuning,
            rng,
            viewport: None,
            status: GameStatus::Start,
            score: 0,
            high_score: 0,
            spawn_timer: 0,
            time_ticks: 0,
            ship,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Track the canvas size; zero or negative sizes mark the surface not ready
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Add points, dragging the high score along
    pub fn award(&mut self, points: u64) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            high_score: self.high_score,
            lives: self.lives,
            reserve_ships: self.lives.saturating_sub(1),
            status: self.status,
        }
    }

    /// Reset everything session-scoped and begin play.
    ///
    /// Returns `false` (and changes nothing) while the viewport is unknown.
    pub fn start_game(&mut self) -> bool {
        let Some(viewport) = self.viewport else {
            log::warn!("start_game ignored: viewport not ready");
            return false;
        };

        let ship_id = self.ship.id;
        self.ship = Ship::new(ship_id, self.tuning.ship_radius());
        self.ship.pos = viewport.center();
        self.ship.invincible_ticks = self.tuning.invincibility_ticks;

        self.lives = self.tuning.start_lives;
        self.score = 0;
        self.spawn_timer = 0;
        self.time_ticks = 0;
        self.asteroids.clear();
        self.bullets.clear();
        self.particles.clear();
        self.events.clear();
        self.events.push(GameEvent::GameStarted);

        for _ in 0..self.tuning.initial_asteroids {
            self.spawn_initial_asteroid(viewport);
        }

        self.status = GameStatus::Playing;
        log::info!(
            "Game started: {}x{} viewport, {} asteroids",
            viewport.width,
            viewport.height,
            self.asteroids.len()
        );
        true
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance_between;

    fn started(seed: u64) -> World {
        let mut world = World::new(seed);
        world.resize(800.0, 600.0);
        assert!(world.start_game());
        world
    }

    #[test]
    fn test_size_table() {
        assert_eq!((AsteroidSize::Large.radius(), AsteroidSize::Large.initial_health()), (50.0, 4));
        assert_eq!((AsteroidSize::Medium.radius(), AsteroidSize::Medium.initial_health()), (25.0, 2));
        assert_eq!((AsteroidSize::Small.radius(), AsteroidSize::Small.initial_health()), (12.0, 1));
        assert_eq!(AsteroidSize::Large.child(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.child(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.child(), None);
    }

    #[test]
    fn test_new_world_waits_on_start_screen() {
        let world = World::new(1);
        assert_eq!(world.status, GameStatus::Start);
        assert_eq!(world.lives, 3);
        assert!(world.asteroids.is_empty());
    }

    #[test]
    fn test_start_requires_viewport() {
        let mut world = World::new(1);
        assert!(!world.start_game());
        assert_eq!(world.status, GameStatus::Start);

        world.resize(0.0, 600.0);
        assert!(!world.start_game());
    }

    #[test]
    fn test_start_game_resets_session() {
        let mut world = started(42);
        world.award(500);
        world.lives = 1;
        world.spawn_timer = 100;
        world.ship.vel = Vec2::new(3.0, 1.0);
        world.bullets.push(Bullet {
            id: 999,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: 2.0,
            life: 5,
        });
        world.status = GameStatus::GameOver;

        assert!(world.start_game());
        assert_eq!(world.status, GameStatus::Playing);
        assert_eq!(world.score, 0);
        assert_eq!(world.high_score, 500);
        assert_eq!(world.lives, 3);
        assert_eq!(world.spawn_timer, 0);
        assert_eq!(world.ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(world.ship.vel, Vec2::ZERO);
        assert_eq!(world.ship.invincible_ticks, 90);
        assert_eq!(world.ship.respawn_ticks, 0);
        assert!(world.bullets.is_empty());
        assert!(world.particles.is_empty());
        assert_eq!(world.asteroids.len(), 4);
    }

    #[test]
    fn test_initial_asteroids_clear_of_ship() {
        for seed in 0..20 {
            let world = started(seed);
            for asteroid in &world.asteroids {
                assert!(distance_between(asteroid.pos, world.ship.pos) >= 150.0);
            }
        }
    }

    #[test]
    fn test_award_tracks_high_score() {
        let mut world = started(3);
        world.award(20);
        world.award(50);
        assert_eq!(world.score, 70);
        assert_eq!(world.high_score, 70);
        world.start_game();
        world.award(20);
        assert_eq!(world.high_score, 70);
    }

    #[test]
    fn test_hud_reserve_ships() {
        let mut world = started(3);
        assert_eq!(world.hud().reserve_ships, 2);
        world.lives = 0;
        assert_eq!(world.hud().reserve_ships, 0);
    }
}
