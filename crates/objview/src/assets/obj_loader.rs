//! OBJ file loader for 3D models
//!
//! Single pass over the file: positions and normals are appended as they
//! appear, polygons are fan-triangulated on the spot and tagged with the
//! material active at that line. Face indices are not checked against the
//! vertex arrays here; [`MeshModel`] validates them when drawing.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::assets::materials::{MaterialSource, MaterialTable, MtlParser};
use crate::assets::tokenizer::{parse_triple, Line, LineReader};
use crate::foundation::math::Vec3;
use crate::render::{MeshModel, Triangle};

/// Mesh load errors
#[derive(Error, Debug)]
pub enum ObjError {
    /// The mesh file could not be opened or read
    #[error("failed to read OBJ file {path:?}: {source}")]
    Io {
        /// Path of the mesh file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// The file parsed but produced no usable geometry
    #[error("no valid geometry in OBJ file ({vertices} vertices, {triangles} triangles)")]
    EmptyMesh {
        /// Number of vertex positions read
        vertices: usize,
        /// Number of triangles emitted
        triangles: usize,
    },
}

/// Index stored for a zero or negative file reference
///
/// It never resolves, so the triangles using it are dropped when drawn.
pub const UNRESOLVED_INDEX: usize = usize::MAX;

/// One vertex reference of a face (`p`, `p/t`, `p//n` or `p/t/n`)
///
/// Indices are zero-based. The texture index is discarded by the loader, so
/// an unreadable texture field is simply `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    /// Position index
    pub position: usize,
    /// Texture coordinate index
    pub texture: Option<usize>,
    /// Normal index
    pub normal: Option<usize>,
}

impl Corner {
    /// Parse a corner token, converting 1-based file indices to 0-based
    ///
    /// Only non-numeric position or normal fields are errors. Zero and
    /// negative references become [`UNRESOLVED_INDEX`].
    pub fn parse(token: &str) -> Result<Self, String> {
        let mut fields = token.split('/');
        let position = match fields.next() {
            Some(field) if !field.is_empty() => Self::parse_index(field, token)?,
            _ => return Err(format!("corner '{token}' has no position index")),
        };
        let texture = fields
            .next()
            .and_then(|field| Self::parse_index(field, token).ok());
        let normal = match fields.next() {
            None | Some("") => None,
            Some(field) => Some(Self::parse_index(field, token)?),
        };
        if fields.next().is_some() {
            return Err(format!("corner '{token}' has too many fields"));
        }

        Ok(Self {
            position,
            texture,
            normal,
        })
    }

    fn parse_index(field: &str, token: &str) -> Result<usize, String> {
        let index = field
            .parse::<i64>()
            .map_err(|_| format!("invalid index '{field}' in corner '{token}'"))?;
        Ok(index
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .unwrap_or(UNRESOLVED_INDEX))
    }
}

/// Normal indices shared by every triangle of a polygon, if it has them
///
/// Keyed on the first corner: a polygon whose first corner has no normal is
/// normal-less, and one where a later corner lacks a normal is treated the
/// same way.
fn polygon_normals(corners: &[Corner]) -> Option<Vec<usize>> {
    if corners.first()?.normal.is_none() {
        return None;
    }
    corners.iter().map(|corner| corner.normal).collect()
}

/// Fan-triangulate a polygon from its first corner
///
/// An N-gon yields N-2 triangles `(c0, ck, ck+1)`; fewer than three corners
/// yield none. Every triangle carries `material`.
pub fn triangulate(corners: &[Corner], material: &str) -> Vec<Triangle> {
    if corners.len() < 3 {
        return Vec::new();
    }
    let normals = polygon_normals(corners);

    (1..corners.len() - 1)
        .map(|k| Triangle {
            positions: [corners[0].position, corners[k].position, corners[k + 1].position],
            normals: normals.as_ref().map(|n| [n[0], n[k], n[k + 1]]),
            material: material.to_string(),
        })
        .collect()
}

/// Raw result of parsing an OBJ file, before the emptiness check
#[derive(Debug, Default)]
pub struct ParsedObj {
    /// Vertex positions in declaration order
    pub positions: Vec<Vec3>,
    /// Vertex normals in declaration order
    pub normals: Vec<Vec3>,
    /// Triangles in emission order
    pub triangles: Vec<Triangle>,
    /// Materials from every referenced library
    pub materials: MaterialTable,
}

impl ParsedObj {
    /// Turn the parse result into a mesh, rejecting empty geometry
    pub fn into_mesh(self) -> Result<MeshModel, ObjError> {
        if self.positions.is_empty() || self.triangles.is_empty() {
            log::warn!("No valid vertex or face data found in OBJ file");
            return Err(ObjError::EmptyMesh {
                vertices: self.positions.len(),
                triangles: self.triangles.len(),
            });
        }

        Ok(MeshModel::new(self.positions, self.normals, self.triangles, self.materials))
    }

    fn push_face(&mut self, line: &Line, material: &str) {
        let corners = match line.args().iter().map(|token| Corner::parse(token)).collect::<Result<Vec<_>, _>>() {
            Ok(corners) => corners,
            Err(e) => {
                log::warn!("Line {}: skipping face, {}", line.number, e);
                return;
            }
        };

        let distinct: HashSet<usize> = corners.iter().map(|corner| corner.position).collect();
        if distinct.len() < 3 {
            log::debug!("Line {}: degenerate face with {} distinct vertices", line.number, distinct.len());
            return;
        }

        self.triangles.extend(triangulate(&corners, material));
    }

    fn push_materials(&mut self, line: &Line, source: &dyn MaterialSource) {
        if line.args().is_empty() {
            log::warn!("Line {}: mtllib missing file name", line.number);
        }
        for name in line.args() {
            match MtlParser::load(source, name) {
                // Later libraries win on name clashes
                Ok(materials) => self.materials.extend(materials),
                Err(e) => log::warn!("{}", e),
            }
        }
    }
}

/// OBJ mesh loader
pub struct ObjLoader;

impl ObjLoader {
    /// Load an OBJ file and return a mesh
    ///
    /// Material libraries named by `mtllib` are opened through `materials`.
    /// Fails if the file cannot be read or holds no vertices or triangles.
    pub fn load_obj<P: AsRef<Path>>(path: P, materials: &dyn MaterialSource) -> Result<MeshModel, ObjError> {
        let path = path.as_ref();
        let io_error = |source| ObjError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let parsed = Self::parse(BufReader::new(file), materials).map_err(io_error)?;
        let mesh = parsed.into_mesh()?;

        log::info!(
            "Loaded {} vertices and {} faces from {}",
            mesh.vertex_count(),
            mesh.triangle_count(),
            path.display()
        );
        Ok(mesh)
    }

    /// Parse OBJ text without the emptiness check
    ///
    /// Malformed lines are logged and skipped; only a read failure is an
    /// error.
    pub fn parse<R: BufRead>(reader: R, materials: &dyn MaterialSource) -> io::Result<ParsedObj> {
        let mut parsed = ParsedObj::default();
        let mut current_material = String::new();

        for line in LineReader::new(reader) {
            let line = line?;

            match line.keyword() {
                "v" => match parse_triple(line.args()) {
                    Some([x, y, z]) => parsed.positions.push(Vec3::new(x, y, z)),
                    None => log::warn!("Line {}: error reading vertex data", line.number),
                },
                "vn" => match parse_triple(line.args()) {
                    Some([x, y, z]) => parsed.normals.push(Vec3::new(x, y, z)),
                    None => log::warn!("Line {}: error reading normal data", line.number),
                },
                "f" => parsed.push_face(&line, &current_material),
                "mtllib" => parsed.push_materials(&line, materials),
                "usemtl" => match line.args().first() {
                    Some(name) => {
                        current_material.clone_from(name);
                        log::debug!("Using material: {}", current_material);
                    }
                    None => log::warn!("Line {}: usemtl missing material name", line.number),
                },
                _ => {
                    // Ignore other commands
                }
            }
        }

        Ok(parsed)
    }
}
