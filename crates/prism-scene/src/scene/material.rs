use glam::Vec3;

/// Phong reflection coefficients.
///
/// `ka`, `kd`, `ks` scale the ambient, diffuse and specular terms per channel;
/// `ke` is the specular exponent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub ka: Vec3,
    pub kd: Vec3,
    pub ks: Vec3,
    pub ke: f32,
}

impl Material {
    /// Neutral grey material: ka 0.3, kd 0.6, ks 0.8, ke 10.
    pub const fn phong() -> Self {
        Self {
            ka: Vec3::splat(0.3),
            kd: Vec3::splat(0.6),
            ks: Vec3::splat(0.8),
            ke: 10.0,
        }
    }

    pub fn with_ka(mut self, ka: impl Into<Vec3>) -> Self {
        self.ka = ka.into();
        self
    }

    pub fn with_kd(mut self, kd: impl Into<Vec3>) -> Self {
        self.kd = kd.into();
        self
    }

    pub fn with_ks(mut self, ks: impl Into<Vec3>) -> Self {
        self.ks = ks.into();
        self
    }

    pub fn with_ke(mut self, ke: f32) -> Self {
        self.ke = ke;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::phong()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_keep_other_defaults() {
        let red = Material::phong().with_kd([1.0, 0.0, 0.0]);
        assert_eq!(red.kd, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(red.ka, Vec3::splat(0.3));
        assert_eq!(red.ks, Vec3::splat(0.8));
        assert_eq!(red.ke, 10.0);
    }
}
