//! Test mesh loading functionality
//!
//! Loads the OBJ/MTL fixtures under `resources/models` from disk

#[cfg(test)]
mod tests {
    use crate::assets::{FsMaterialSource, ObjError, ObjLoader};
    use crate::core::config::{MaterialLookup, ViewerConfig};
    use crate::foundation::math::Vec3;
    use crate::render::DrawStats;
    use approx::assert_relative_eq;
    use std::path::PathBuf;

    fn get_test_model_path(filename: &str) -> PathBuf {
        // Get workspace root (2 levels up from crates/objview)
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.pop(); // Remove objview
        path.pop(); // Remove crates
        path.push("resources");
        path.push("models");
        path.push(filename);
        path
    }

    fn model_dir_source(filename: &str) -> FsMaterialSource {
        let path = get_test_model_path(filename);
        ViewerConfig::new()
            .with_model_path(path.to_string_lossy())
            .with_material_lookup(MaterialLookup::ModelDirectory)
            .material_source()
    }

    #[test]
    fn test_load_painted_quad_with_materials() {
        let path = get_test_model_path("painted_quad.obj");
        let mesh = ObjLoader::load_obj(&path, &model_dir_source("painted_quad.obj")).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.normal_count(), 1);
        assert_eq!(mesh.triangle_count(), 5);
        assert_eq!(mesh.material_count(), 3);
        assert_eq!(mesh.material("Red").unwrap().diffuse, Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(mesh.material("Unset").unwrap().diffuse, None);

        let materials: Vec<&str> = mesh.triangles().iter().map(|t| t.material.as_str()).collect();
        assert_eq!(materials, vec!["Red", "Red", "Blue", "Unset", "Unset"]);

        assert_eq!(
            mesh.draw_stats(),
            DrawStats {
                drawn: 4,
                skipped: 1,
                colored: 3,
                lit: 2,
            }
        );
    }

    #[test]
    fn test_missing_material_library_is_not_fatal() {
        // Relative to the working directory the library is not found
        let path = get_test_model_path("painted_quad.obj");
        let mesh = ObjLoader::load_obj(&path, &FsMaterialSource::relative_to("no/such/dir")).unwrap();

        assert_eq!(mesh.material_count(), 0);
        assert_eq!(mesh.triangle_count(), 5);
        assert!(mesh.draw_triangles().all(|t| t.color.is_none()));
    }

    #[test]
    fn test_load_cube() {
        let path = get_test_model_path("cube.obj");
        let mesh = ObjLoader::load_obj(&path, &model_dir_source("cube.obj")).unwrap();

        // The two-float vertex line is dropped
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.normal_count(), 6);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.material_count(), 0);

        let stats = mesh.draw_stats();
        assert_eq!(stats.drawn, 12);
        assert_eq!(stats.lit, 12);

        let bounds = mesh.bounds().unwrap();
        assert_relative_eq!(bounds.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_relative_eq!(bounds.max, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(bounds.extent(), 12.0_f32.sqrt());
    }

    #[test]
    fn test_comments_only_file_fails() {
        let path = get_test_model_path("comments_only.obj");
        let err = ObjLoader::load_obj(&path, &FsMaterialSource::working_dir()).unwrap_err();
        assert!(matches!(err, ObjError::EmptyMesh { vertices: 0, triangles: 0 }));
    }

    #[test]
    fn test_vertices_without_faces_fails() {
        let path = get_test_model_path("point_cloud.obj");
        let err = ObjLoader::load_obj(&path, &FsMaterialSource::working_dir()).unwrap_err();
        assert!(matches!(err, ObjError::EmptyMesh { vertices: 3, triangles: 0 }));
    }

    #[test]
    fn test_nonexistent_file() {
        let path = get_test_model_path("nonexistent_model.obj");
        let result = ObjLoader::load_obj(&path, &FsMaterialSource::working_dir());
        assert!(matches!(result, Err(ObjError::Io { .. })), "Should fail to load nonexistent file");
    }
}
