//! The prism demo programs.
//!
//! Three binaries share this library:
//!
//! | Binary | What it shows |
//! |--------|---------------|
//! | `lighting` | Phong-lit torus and spheres; `L` moves the lights |
//! | `orbit` | spheres orbiting a torus; `K` pauses the animation |
//! | `star` | two nested five-point stars |
//!
//! Keys common to the 3D demos: `X`/`Y`/`Z` rotate the interactive model,
//! `S` squeezes it, `O`/`F`/`P` switch projection, `C` orbits the camera,
//! `H` moves it up, `D` changes its distance, `V` the field of view and `B`
//! the near-plane extent. Shift reverses each command; Escape quits.

pub mod app;
pub mod scenes;

pub use app::Demo;
