//! MTL (Material Template Library) file parser
//!
//! Parses Wavefront .mtl files into a table of named materials. Only the
//! diffuse colour (`Kd`) matters for flat-coloured rendering, so every other
//! directive is skipped.

use std::collections::HashMap;
use std::io::{self, BufRead};

use thiserror::Error;

use super::source::MaterialSource;
use crate::assets::tokenizer::{parse_triple, LineReader};
use crate::foundation::math::Vec3;

/// Material library errors
///
/// These never abort a mesh load; the OBJ loader logs them and carries on
/// with the materials it already has.
#[derive(Error, Debug)]
pub enum MaterialError {
    /// The library could not be opened or read
    #[error("failed to read material library '{name}': {source}")]
    Io {
        /// Name as written in the `mtllib` directive
        name: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Parsed material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name (from `newmtl`)
    pub name: String,
    /// Diffuse colour (`Kd`), unset until the library provides one
    pub diffuse: Option<Vec3>,
}

impl Material {
    /// Create a material with no colour set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse: None,
        }
    }
}

/// Materials keyed by name
pub type MaterialTable = HashMap<String, Material>;

/// MTL file parser
pub struct MtlParser;

impl MtlParser {
    /// Open a library through `source` and parse it
    pub fn load(source: &dyn MaterialSource, name: &str) -> Result<MaterialTable, MaterialError> {
        let io_error = |source| MaterialError::Io {
            name: name.to_string(),
            source,
        };

        let reader = source.open(name).map_err(io_error)?;
        let materials = Self::parse(reader).map_err(io_error)?;
        log::debug!("Loaded {} material(s) from {}", materials.len(), name);
        Ok(materials)
    }

    /// Parse MTL text into a map of material name -> Material
    ///
    /// Malformed lines are logged and skipped; only a read failure is an
    /// error.
    pub fn parse<R: BufRead>(reader: R) -> io::Result<MaterialTable> {
        let mut materials = MaterialTable::new();
        let mut current: Option<String> = None;

        for line in LineReader::new(reader) {
            let line = line?;

            match line.keyword() {
                "newmtl" => {
                    // Redefining a name resets it
                    current = line.args().first().cloned();
                    match &current {
                        Some(name) => {
                            materials.insert(name.clone(), Material::new(name.clone()));
                            log::debug!("Defined material {}", name);
                        }
                        None => log::warn!("Line {}: newmtl missing material name", line.number),
                    }
                }

                "Kd" => {
                    let Some(name) = &current else {
                        continue;
                    };
                    let Some([r, g, b]) = parse_triple(line.args()) else {
                        log::warn!("Line {}: Kd expects three floats, skipping", line.number);
                        continue;
                    };
                    if let Some(material) = materials.get_mut(name) {
                        material.diffuse = Some(Vec3::new(r, g, b));
                        log::debug!("Material {} diffuse set to {}, {}, {}", name, r, g, b);
                    }
                }

                _ => {}
            }
        }

        Ok(materials)
    }
}
