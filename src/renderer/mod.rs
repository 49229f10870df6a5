//! Rendering module
//!
//! Turns world state into draw commands and tessellates them into vertex
//! lists. Presenting those to a surface is the host's job.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawCmd, Scene, build_scene};
pub use shapes::Mesh;
pub use vertex::{Vertex, colors};
