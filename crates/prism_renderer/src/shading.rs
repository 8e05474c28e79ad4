//! Pluggable shading strategies.

use prism_core::Color;
use prism_math::{normalize_safe, Ray};

use crate::primitive::HitRecord;

/// Trait for turning an intersection into a color.
///
/// The render loop only reaches shading through this interface, so a
/// lighting model can be swapped without touching the loop.
pub trait Shader: Send + Sync {
    fn shade(&self, hit: &HitRecord, ray: &Ray) -> Color;
}

/// Flat, light-source-free shading.
///
/// Brightness follows the angle between the surface normal and the view
/// direction: `0.5 + 0.5 * dot(normal, view)`, scaled onto the albedo.
/// The factor is intentionally not clamped here - quantization in the
/// framebuffer is the single clamping point, and hits facing away from
/// the viewer (seen from inside a primitive) legitimately darken below
/// the midpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatShader;

impl Shader for FlatShader {
    fn shade(&self, hit: &HitRecord, ray: &Ray) -> Color {
        let view = normalize_safe(-ray.direction);
        let diffuse = 0.5 + 0.5 * hit.normal.dot(view);
        hit.material.albedo * diffuse
    }
}
