//! Math utilities and types
//!
//! Provides the vector types shared by the mesh loader and its consumers.

pub use nalgebra::Vector3;

/// 3D vector type used for positions, normals and colours
pub type Vec3 = Vector3<f32>;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Smallest box containing every point, or `None` for an empty set
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec3>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;
        Some(points.fold(Self { min: first, max: first }, |bounds, p| Self {
            min: bounds.min.inf(p),
            max: bounds.max.sup(p),
        }))
    }

    /// Centre of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the box diagonal
    pub fn extent(&self) -> f32 {
        (self.max - self.min).norm()
    }
}
