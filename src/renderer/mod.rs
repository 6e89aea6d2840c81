//! Rendering feed
//!
//! Turns a borrowed world into GPU-ready atom and bond instances. Drawing
//! itself belongs to the host.

pub mod scene;
pub mod vertex;

pub use scene::{Scene, SceneBuilder};
pub use vertex::{AtomInstance, BondInstance};
