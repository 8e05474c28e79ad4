// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod ray;
mod vec;

pub use ray::Ray;
pub use vec::{approx_eq, normalize_safe, reflect, refract};
