//! Headless stand-in for the fixed-function draw loop
//!
//! Replays what the windowed viewer issues per triangle (colour, normals,
//! three vertices) into counters instead of GL calls.

use objview::prelude::*;

/// Counts for one recorded frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// Triangles drawn
    pub triangles: usize,
    /// Triangles the mesh dropped for dangling indices
    pub skipped: usize,
    /// Vertex submissions
    pub vertices: usize,
    /// Normal submissions
    pub normals: usize,
    /// Distinct colours set
    pub colors: usize,
}

/// Records the draw commands a frame would issue
pub struct FrameRecorder {
    default_color: Vec3,
    colors_seen: Vec<Vec3>,
    summary: FrameSummary,
}

impl FrameRecorder {
    /// Start a frame with the renderer's default draw colour
    pub fn new(default_color: Vec3) -> Self {
        Self {
            default_color,
            colors_seen: Vec::new(),
            summary: FrameSummary::default(),
        }
    }

    /// Walk every drawable triangle of `mesh`
    pub fn draw(&mut self, mesh: &MeshModel) {
        let mut drawn = 0;
        for triangle in mesh.draw_triangles() {
            self.set_color(triangle.color.unwrap_or(self.default_color));
            if let Some(normals) = triangle.normals {
                self.summary.normals += normals.len();
            }
            self.summary.vertices += triangle.positions.len();
            drawn += 1;
        }
        self.summary.triangles += drawn;
        self.summary.skipped += mesh.triangle_count() - drawn;
    }

    fn set_color(&mut self, color: Vec3) {
        if !self.colors_seen.contains(&color) {
            self.colors_seen.push(color);
            log::trace!("Colour {:?}", color.as_slice());
        }
        self.summary.colors = self.colors_seen.len();
    }

    /// Counts so far
    pub fn summary(&self) -> FrameSummary {
        self.summary
    }
}
