//! Prism core - image storage, materials, scene description, and the
//! supporting collaborators of the renderer.
//!
//! This crate provides:
//!
//! - **Color and framebuffer**: `Color` conversion helpers and the RGB24
//!   pixel grid the render loop writes into
//! - **Materials**: the surface property bag primitives carry
//! - **Scene config**: serde-backed scene description loaded from JSON
//! - **PPM**: binary P6 image persistence
//! - **Pool**: bump-pointer frame pool for transient allocations
//! - **Rng**: linear-congruential sampler for stochastic extensions

pub mod color;
pub mod config;
pub mod framebuffer;
pub mod material;
pub mod pool;
pub mod ppm;
pub mod rng;

// Re-export commonly used types
pub use color::Color;
pub use config::{load_scene, CameraConfig, ConfigError, ImageConfig, SceneConfig, SphereConfig};
pub use framebuffer::FrameBuffer;
pub use material::Material;
pub use pool::{FramePool, PoolBlock, PoolExhausted, PoolStats, Scratch};
pub use ppm::{read_ppm, write_ppm, PpmError};
pub use rng::Lcg;
