//! Prism renderer - CPU ray tracing core.
//!
//! Casts rays through a pinhole camera into a scene of primitives and
//! writes a shaded image into a framebuffer. The scene scan is a plain
//! closest-hit linear search; shading is a pluggable strategy the render
//! loop only reaches through the [`Shader`] trait.

mod camera;
mod primitive;
mod renderer;
mod shading;
mod sphere;

pub use camera::{Camera, CameraError};
pub use primitive::{HitRecord, Primitive, World, DEFAULT_EPSILON};
pub use renderer::{render, render_band, RenderConfig, RowBand};
pub use shading::{FlatShader, Shader};
pub use sphere::Sphere;

/// Re-export the math vocabulary so downstream users name one set of types
pub use prism_math::{Ray, Vec3};
