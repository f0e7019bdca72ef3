//! Asset loading for OBJ meshes and MTL material libraries

pub mod tokenizer;
pub mod materials;
pub mod obj_loader;

pub use obj_loader::{Corner, ObjError, ObjLoader, ParsedObj};
pub use materials::{
    Material, MaterialError, MaterialTable, MtlParser,
    MaterialSource, FsMaterialSource,
};

#[cfg(test)]
mod test_mesh_loading;
