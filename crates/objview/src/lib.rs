//! # objview
//!
//! Loads Wavefront OBJ meshes with their MTL material libraries into a
//! [`MeshModel`](render::MeshModel) that a fixed-function style renderer
//! can walk once per frame: three positions, optional per-vertex normals
//! and a flat diffuse colour per triangle.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use objview::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mesh = ObjLoader::load_obj("model.obj", &FsMaterialSource::working_dir())?;
//!     for triangle in mesh.draw_triangles() {
//!         let color = triangle.color.unwrap_or_else(|| Vec3::new(1.0, 1.0, 1.0));
//!         // glColor3f / glNormal3f / glVertex3f ...
//!         let _ = (color, triangle.normals, triangle.positions);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;

/// Common imports for viewer code
pub mod prelude {
    pub use crate::{
        assets::{FsMaterialSource, MaterialSource, ObjError, ObjLoader},
        core::config::{Config, MaterialLookup, ViewerConfig},
        foundation::math::{Aabb, Vec3},
        render::{DrawStats, DrawTriangle, MeshModel},
    };
}
