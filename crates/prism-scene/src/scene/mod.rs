//! Scene state: models, camera and lights.
//!
//! A [`Scene`] is plain data owned by the application and passed by reference
//! into the control, animation and render steps.

mod camera;
mod illumination;
mod material;
mod model;

pub use camera::{frustum_rh, Camera, Projection};
pub use illumination::{Illumination, Light, LightOrbit};
pub use material::Material;
pub use model::{normal_matrix, DrawMode, Model};

/// Ordered models plus the camera and illumination that view them.
///
/// `interactive` indexes the model that keyboard commands rotate and scale.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub models: Vec<Model>,
    pub camera: Camera,
    pub illumination: Illumination,
    pub interactive: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a model and returns its index.
    pub fn push(&mut self, model: Model) -> usize {
        self.models.push(model);
        self.models.len() - 1
    }

    pub fn interactive_model(&self) -> Option<&Model> {
        self.models.get(self.interactive)
    }

    pub fn interactive_model_mut(&mut self) -> Option<&mut Model> {
        self.models.get_mut(self.interactive)
    }

    /// Recomputes camera matrices, then every model's derived matrices.
    pub fn update(&mut self, aspect: f32) {
        self.camera.update(aspect);
        let view = self.camera.view;
        for model in &mut self.models {
            model.update_transforms(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::MeshData;

    #[test]
    fn update_propagates_view_into_models() {
        let mut scene = Scene::new();
        scene.push(Model::new(MeshData::new()).translate([0.0, 0.0, 0.0]));
        scene.update(1.0);

        // Origin model seen from (0, 1, 4) lies ahead on -Z.
        let p = scene.models[0].model_view.transform_point3(Vec3::ZERO);
        assert!(p.z < 0.0);
        assert_eq!(scene.models[0].model_view, scene.camera.view * scene.models[0].model_matrix);
    }

    #[test]
    fn interactive_defaults_to_first_model() {
        let mut scene = Scene::new();
        assert!(scene.interactive_model().is_none());
        let idx = scene.push(Model::new(MeshData::new()));
        assert_eq!(idx, 0);
        assert!(scene.interactive_model_mut().is_some());
    }
}
