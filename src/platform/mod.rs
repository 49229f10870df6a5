//! Platform abstraction layer
//!
//! Handles what a browser or native shell feeds in:
//! - Held keys sampled once per tick
//! - Viewport size changes
//! - The per-frame host that owns the world and its teardown

pub mod host;
pub mod input;

pub use host::GameHost;
pub use input::{Control, HeldKeys};
