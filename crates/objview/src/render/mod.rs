//! Renderer-facing mesh data
//!
//! The renderer itself lives outside this crate; it walks
//! [`MeshModel::draw_triangles`] once per frame and issues whatever draw
//! calls its backend needs.

pub mod mesh;

pub use mesh::{DrawStats, DrawTriangle, DrawTriangles, MeshModel, Triangle};
