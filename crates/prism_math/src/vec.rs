//! Vector operations glam does not provide with the semantics we need.
//!
//! Everything here works on plain `glam::Vec3`. Directions, points, and
//! colors all share that type; these helpers cover the geometric cases
//! where the stock methods either panic, return NaN, or conflate distinct
//! outcomes.

use glam::Vec3;

/// Length below which a vector is considered degenerate for normalization.
pub const NORMALIZE_EPSILON: f32 = 1e-8;

/// Normalize `v`, returning `Vec3::ZERO` for near-zero input.
///
/// `Vec3::normalize` divides unconditionally and produces NaN for a zero
/// vector. This variant returns the zero vector when `v.length()` is below
/// [`NORMALIZE_EPSILON`]; callers must treat a zero result as degenerate
/// input rather than a usable direction.
#[inline]
pub fn normalize_safe(v: Vec3) -> Vec3 {
    let len = v.length();
    if len < NORMALIZE_EPSILON {
        Vec3::ZERO
    } else {
        v / len
    }
}

/// Reflect `v` about the unit normal `n`.
///
/// Returns `v - 2 * (v . n) * n`. The length of `v` is preserved.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with unit normal `n` using Snell's law.
///
/// `eta` is the ratio of refractive indices (incident over transmitted).
/// When `v` approaches from the back face (`cos_i < 0`) the normal is
/// flipped so the computation is symmetric for rays entering or leaving a
/// medium. Returns `None` on total internal reflection, so a transmitted
/// direction is never confusable with a sentinel value.
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let mut cos_i = -v.dot(n);
    let mut n = n;
    if cos_i < 0.0 {
        cos_i = -cos_i;
        n = -n;
    }

    let cos_t_sq = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if cos_t_sq < 0.0 {
        return None;
    }

    Some(v * eta + n * (eta * cos_i - cos_t_sq.sqrt()))
}

/// Approximate equality under a caller-supplied epsilon.
///
/// True when the distance between `a` and `b` is below `epsilon`.
#[inline]
pub fn approx_eq(a: Vec3, b: Vec3, epsilon: f32) -> bool {
    (a - b).length_squared() < epsilon * epsilon
}
