//! Resolution of `mtllib` references to readable material libraries

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Opens material libraries by the name written in an `mtllib` directive
pub trait MaterialSource {
    /// Open the named library for reading
    fn open(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Filesystem-backed material source
///
/// Relative names resolve against `base`, or against the process working
/// directory when no base is set. Absolute names are opened as written.
#[derive(Debug, Clone, Default)]
pub struct FsMaterialSource {
    base: Option<PathBuf>,
}

impl FsMaterialSource {
    /// Resolve relative to the process working directory
    pub fn working_dir() -> Self {
        Self { base: None }
    }

    /// Resolve relative to `dir`
    pub fn relative_to(dir: impl Into<PathBuf>) -> Self {
        Self { base: Some(dir.into()) }
    }

    /// Path a library name resolves to
    pub fn resolve(&self, name: &str) -> PathBuf {
        match &self.base {
            Some(base) if Path::new(name).is_relative() => base.join(name),
            _ => PathBuf::from(name),
        }
    }
}

impl MaterialSource for FsMaterialSource {
    fn open(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(self.resolve(name))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
