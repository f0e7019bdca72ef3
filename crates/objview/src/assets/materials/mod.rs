//! Material library loading
//!
//! MTL files are parsed into a flat name -> material table; the OBJ loader
//! reaches them through a [`MaterialSource`].

pub mod mtl_parser;
pub mod source;

pub use mtl_parser::{Material, MaterialError, MaterialTable, MtlParser};
pub use source::{FsMaterialSource, MaterialSource};
