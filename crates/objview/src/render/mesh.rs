//! Mesh representation for loaded models
//!
//! A [`MeshModel`] keeps the index structure of the source file: positions
//! and normals in their own arrays, triangles referring into them, and a
//! material name per triangle. Indices are resolved only when drawing, so
//! a file with dangling references still loads and the bad triangles are
//! dropped frame by frame.

use crate::assets::materials::{Material, MaterialTable};
use crate::foundation::math::{Aabb, Vec3};

/// Triangle as emitted by the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    /// Zero-based position indices
    pub positions: [usize; 3],
    /// Zero-based normal indices, present when the source polygon had
    /// normals on every corner
    pub normals: Option<[usize; 3]>,
    /// Active material when the polygon was read; empty for none
    pub material: String,
}

/// Triangle with every index resolved, ready for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawTriangle {
    /// Corner positions
    pub positions: [Vec3; 3],
    /// Corner normals, if all three resolved
    pub normals: Option<[Vec3; 3]>,
    /// Diffuse colour of the material; `None` means the renderer's default
    pub color: Option<Vec3>,
}

/// Per-frame counts from walking a mesh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Triangles yielded for drawing
    pub drawn: usize,
    /// Triangles dropped for out-of-range position indices
    pub skipped: usize,
    /// Drawn triangles with a material colour
    pub colored: usize,
    /// Drawn triangles with normals
    pub lit: usize,
}

/// Loaded mesh, immutable after construction
#[derive(Debug, Clone)]
pub struct MeshModel {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
    materials: MaterialTable,
}

impl MeshModel {
    /// Create a mesh from loader output
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, triangles: Vec<Triangle>, materials: MaterialTable) -> Self {
        Self {
            positions,
            normals,
            triangles,
            materials,
        }
    }

    /// Number of vertex positions
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of vertex normals
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Number of triangles, including any that will be skipped when drawn
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of known materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex normals
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangles with unresolved indices
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Look up a material by name
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Bounds of all vertex positions
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.positions)
    }

    /// Resolve a triangle's indices
    ///
    /// Returns `None` if any position index is out of range.
    pub fn resolve(&self, triangle: &Triangle) -> Option<DrawTriangle> {
        let [a, b, c] = triangle.positions;
        let positions = [
            *self.positions.get(a)?,
            *self.positions.get(b)?,
            *self.positions.get(c)?,
        ];

        let normals = triangle.normals.and_then(|[a, b, c]| {
            Some([*self.normals.get(a)?, *self.normals.get(b)?, *self.normals.get(c)?])
        });

        let color = if triangle.material.is_empty() {
            None
        } else {
            self.material(&triangle.material).and_then(|material| material.diffuse)
        };

        Some(DrawTriangle {
            positions,
            normals,
            color,
        })
    }

    /// Iterate the drawable triangles
    pub fn draw_triangles(&self) -> DrawTriangles<'_> {
        DrawTriangles {
            mesh: self,
            inner: self.triangles.iter(),
        }
    }

    /// Walk the mesh once and count what a frame would draw
    pub fn draw_stats(&self) -> DrawStats {
        let mut stats = DrawStats::default();
        for triangle in &self.triangles {
            match self.resolve(triangle) {
                Some(draw) => {
                    stats.drawn += 1;
                    stats.colored += usize::from(draw.color.is_some());
                    stats.lit += usize::from(draw.normals.is_some());
                }
                None => stats.skipped += 1,
            }
        }
        stats
    }
}

/// Iterator over resolved triangles, skipping ones with dangling positions
pub struct DrawTriangles<'a> {
    mesh: &'a MeshModel,
    inner: std::slice::Iter<'a, Triangle>,
}

impl Iterator for DrawTriangles<'_> {
    type Item = DrawTriangle;

    fn next(&mut self) -> Option<Self::Item> {
        for triangle in self.inner.by_ref() {
            match self.mesh.resolve(triangle) {
                Some(draw) => return Some(draw),
                None => log::debug!("Invalid face indices: {:?}", triangle.positions),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
