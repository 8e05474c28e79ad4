//! Primitive intersection protocol.

use prism_core::Material;
use prism_math::{Ray, Vec3};

/// Minimum parametric distance an intersection must exceed to be
/// accepted. Rejects hits behind the ray origin and self-intersections at
/// the surface a secondary ray starts on.
pub const DEFAULT_EPSILON: f32 = 1e-6;

/// Record of a ray-primitive intersection.
///
/// Transient: produced by an intersection test and consumed by one
/// shading evaluation within the same pixel.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray meets the surface
    pub p: Vec3,
    /// Outward unit normal at the hit point.
    ///
    /// Always outward: a ray cast from inside a sphere sees a normal
    /// pointing away from the ray origin, not flipped toward it.
    pub normal: Vec3,
    /// Parametric distance along the ray (greater than the epsilon gate)
    pub t: f32,
    /// Unmodified copy of the primitive's material
    pub material: Material,
}

/// Trait for geometry that rays can intersect.
///
/// `Send + Sync` so a future scheduler can share the scene across
/// workers. Implementations must pick the smallest root strictly greater
/// than `epsilon`, report an outward unit normal, and copy their material
/// into the record; a miss is `None`, never an error.
pub trait Primitive: Send + Sync {
    fn intersect(&self, ray: &Ray, epsilon: f32) -> Option<HitRecord>;
}

/// Ordered collection of primitives forming a scene.
///
/// Growable and owned; read-only for the duration of a render pass.
#[derive(Default)]
pub struct World {
    objects: Vec<Box<dyn Primitive>>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, object: Box<dyn Primitive>) {
        self.objects.push(object);
    }

    /// Number of primitives in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Closest hit across every primitive.
    ///
    /// A full linear scan keeping the globally minimum `t` above
    /// `epsilon` - no any-hit short-circuit, no acceleration structure.
    pub fn closest_hit(&self, ray: &Ray, epsilon: f32) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for object in &self.objects {
            if let Some(hit) = object.intersect(ray, epsilon) {
                if closest.map_or(true, |best| hit.t < best.t) {
                    closest = Some(hit);
                }
            }
        }

        closest
    }
}
