//! Pinhole camera for ray generation.

use prism_math::{normalize_safe, Ray, Vec3};
use thiserror::Error;

/// Camera construction failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// The up hint is parallel to the view direction (or the target
    /// coincides with the position), so no orthonormal basis exists.
    #[error("camera basis is degenerate: up hint is parallel to the view direction")]
    DegenerateBasis,
}

/// Pinhole camera projecting rays through an image plane.
///
/// The basis is right-handed and orthonormal, fixed at construction. Ray
/// directions come from normalized device coordinates scaled onto a plane
/// at distance `1 / tan(vfov / 2)` in front of the camera, so the vertical
/// field of view is exact and the horizontal one follows from the aspect
/// ratio.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    vfov: f32,
    image_width: u32,
    image_height: u32,
    plane_dist: f32,
}

impl Camera {
    /// Canonical camera: origin, looking down -Z with +Y up.
    pub fn new(image_width: u32, image_height: u32, vfov: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            vfov,
            image_width,
            image_height,
            plane_dist: plane_distance(vfov),
        }
    }

    /// Camera at `position` looking at `target`.
    ///
    /// The basis is re-orthogonalized from the up hint, so the hint does
    /// not need to be perpendicular to the view direction. Fails when the
    /// hint is parallel to it - there is no sensible roll to pick, and a
    /// typed error here beats NaN directions at render time.
    pub fn look_at(
        position: Vec3,
        target: Vec3,
        up_hint: Vec3,
        vfov: f32,
        image_width: u32,
        image_height: u32,
    ) -> Result<Self, CameraError> {
        let forward = normalize_safe(target - position);
        let right = normalize_safe(forward.cross(up_hint));
        if forward == Vec3::ZERO || right == Vec3::ZERO {
            return Err(CameraError::DegenerateBasis);
        }
        let up = right.cross(forward);

        Ok(Self {
            position,
            forward,
            right,
            up,
            vfov,
            image_width,
            image_height,
            plane_dist: plane_distance(vfov),
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn vfov(&self) -> f32 {
        self.vfov
    }

    /// Generate the primary ray for pixel (x, y).
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        self.ray_offset(x, y, 0.0, 0.0)
    }

    /// Generate a ray with a sub-pixel offset `dx, dy` in [0, 1).
    ///
    /// Pixel (0, 0) is the top-left corner of the image; y grows
    /// downward, NDC y grows upward, hence the flip. Only the x axis
    /// receives aspect correction.
    pub fn ray_offset(&self, x: u32, y: u32, dx: f32, dy: f32) -> Ray {
        let fx = x as f32 + dx;
        let fy = y as f32 + dy;

        let mut ndc_x = 2.0 * fx / self.image_width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * fy / self.image_height as f32;

        let aspect = self.image_width as f32 / self.image_height as f32;
        ndc_x *= aspect;

        let direction =
            (self.forward * self.plane_dist + self.right * ndc_x + self.up * ndc_y).normalize();

        Ray::new(self.position, direction)
    }
}

/// Image-plane distance for a vertical field of view in degrees.
fn plane_distance(vfov: f32) -> f32 {
    1.0 / (vfov.to_radians() / 2.0).tan()
}
