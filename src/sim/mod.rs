//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no wall-clock time
//! - All randomness drawn from the world's own RNG
//! - Stable iteration order (insertion order, IDs allocated sequentially)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod ship;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::resolve_collisions;
pub use motion::integrate;
pub use ship::{destroy_ship, fire, update_ship};
pub use spawn::periodic_spawn;
pub use state::{
    Asteroid, AsteroidSize, Bullet, GameEvent, GameStatus, Hud, Particle, Ship, Tint, Viewport,
    World,
};
pub use tick::{TickInput, tick};
