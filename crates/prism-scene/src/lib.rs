//! CPU-side state for the **prism** demos.
//!
//! Nothing in here touches the GPU or the windowing system, so every piece can
//! be driven and inspected from plain unit tests. The engine crate uploads what
//! this crate produces; the demo binaries glue the two together.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`geometry`] | `MeshData`, torus / sphere / plane generators, star polygons |
//! | [`scene`] | `Model`, `Material`, `Camera`, `Illumination`, `Scene` |
//! | [`controls`] | keyboard `Command`s and how they mutate a `Scene` |
//! | [`animation`] | `OrbitAnimation` for satellites circling the interactive model |
//! | [`color`] | straight-alpha `Color` |
//!
//! # Quick start
//!
//! ```rust
//! use prism_scene::controls::Controls;
//! use prism_scene::geometry::GeometryKind;
//! use prism_scene::scene::{Model, Scene};
//!
//! let mut scene = Scene::new();
//! scene.push(Model::new(GeometryKind::Torus.build()));
//!
//! let mut controls = Controls::default();
//! let outcome = controls.handle_key('x', false, &mut scene, None);
//! assert!(outcome.redraw);
//!
//! scene.update(4.0 / 3.0);
//! assert!(scene.models[0].rotate.x > 0.0);
//! ```

pub mod animation;
pub mod color;
pub mod controls;
pub mod geometry;
pub mod scene;

pub use color::Color;
pub use scene::Scene;
