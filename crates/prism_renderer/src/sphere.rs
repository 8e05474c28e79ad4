//! Sphere primitive.

use prism_core::Material;
use prism_math::{normalize_safe, Ray, Vec3};

use crate::primitive::{HitRecord, Primitive};

/// A sphere defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> Material {
        self.material
    }
}

impl Primitive for Sphere {
    /// Solve `|origin + t*dir - center|^2 = r^2` as a quadratic in t.
    ///
    /// The smallest root strictly greater than `epsilon` wins; if neither
    /// root clears the gate the ray misses. The normal always points out
    /// of the sphere, so rays originating inside see it pointing away
    /// from their origin.
    fn intersect(&self, ray: &Ray, epsilon: f32) -> Option<HitRecord> {
        let oc = ray.origin - self.center;

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);

        let t = if t1 > epsilon {
            t1
        } else if t2 > epsilon {
            t2
        } else {
            return None;
        };

        let p = ray.at(t);
        Some(HitRecord {
            p,
            normal: normalize_safe(p - self.center),
            t,
            material: self.material,
        })
    }
}
