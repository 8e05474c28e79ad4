//! Surface material properties.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Material properties for surface shading.
///
/// A plain value bag: primitives own their material and intersection
/// records carry an unmodified copy. All fields have serde defaults so a
/// scene file may name only the ones it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color of the surface (RGB, 0-1)
    #[serde(default = "default_albedo")]
    pub albedo: Color,

    /// Surface roughness (0 = mirror, 1 = diffuse)
    #[serde(default = "default_roughness")]
    pub roughness: f32,

    /// Metallicness (0 = dielectric, 1 = metal)
    #[serde(default)]
    pub metallic: f32,

    /// Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    #[serde(default = "default_ior")]
    pub ior: f32,

    /// Emitted light color (RGB, for light-emitting surfaces)
    #[serde(default)]
    pub emission: Color,
}

fn default_albedo() -> Color {
    Color::ONE
}

fn default_roughness() -> f32 {
    0.8
}

fn default_ior() -> f32 {
    1.0
}

impl Default for Material {
    fn default() -> Self {
        Self::matte_white()
    }
}

impl Material {
    /// Matte surface with the given base color.
    pub fn matte(albedo: Color) -> Self {
        Self {
            albedo,
            roughness: 0.8,
            metallic: 0.0,
            ior: 1.0,
            emission: Color::ZERO,
        }
    }

    /// Matte white surface.
    pub fn matte_white() -> Self {
        Self::matte(Color::ONE)
    }

    /// Perfect mirror.
    pub fn mirror() -> Self {
        Self {
            albedo: Color::ONE,
            roughness: 0.0,
            metallic: 1.0,
            ior: 1.0,
            emission: Color::ZERO,
        }
    }

    /// Clear glass (IOR 1.5).
    pub fn glass() -> Self {
        Self {
            albedo: Color::ONE,
            roughness: 0.0,
            metallic: 0.0,
            ior: 1.5,
            emission: Color::ZERO,
        }
    }

    /// Diamond (IOR 2.4).
    pub fn diamond() -> Self {
        Self {
            ior: 2.4,
            ..Self::glass()
        }
    }

    /// Light-emitting surface.
    pub fn emissive(emission: Color) -> Self {
        Self {
            albedo: Color::ZERO,
            roughness: 1.0,
            metallic: 0.0,
            ior: 1.0,
            emission,
        }
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission.length_squared() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let m = Material::matte_white();
        assert_eq!(m.albedo, Color::ONE);
        assert_eq!(m.metallic, 0.0);
        assert!(!m.is_emissive());

        assert_eq!(Material::glass().ior, 1.5);
        assert_eq!(Material::diamond().ior, 2.4);
        assert_eq!(Material::mirror().metallic, 1.0);
        assert!(Material::emissive(Color::ONE).is_emissive());
    }

    #[test]
    fn test_deserialize_partial() {
        // Only albedo given; everything else takes defaults
        let m: Material = serde_json::from_str(r#"{ "albedo": [0.2, 0.4, 0.6] }"#).unwrap();
        assert_eq!(m.albedo, Color::new(0.2, 0.4, 0.6));
        assert_eq!(m.roughness, 0.8);
        assert_eq!(m.ior, 1.0);
        assert_eq!(m.emission, Color::ZERO);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let m = Material::glass();
        let json = serde_json::to_string(&m).unwrap();
        let back: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
