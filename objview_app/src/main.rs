//! Headless OBJ viewer
//!
//! Usage: `objview [model.obj | viewer.toml | viewer.ron]`
//!
//! Loads the mesh the way the windowed viewer does and walks it once as a
//! frame would, logging what would be drawn.

mod frame;

use std::path::Path;
use std::process::ExitCode;

use objview::config::ConfigFormat;
use objview::foundation::logging;
use objview::prelude::*;
use thiserror::Error;

use crate::frame::FrameRecorder;

/// Startup errors surfaced to the user
#[derive(Error, Debug)]
enum AppError {
    #[error("Failed to read config: {0}")]
    Config(#[from] objview::config::ConfigError),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Failed to load OBJ file: {0}")]
    Load(#[from] ObjError),
}

fn load_config(arg: Option<String>) -> Result<ViewerConfig, AppError> {
    match arg {
        Some(arg) if ConfigFormat::from_path(Path::new(&arg)).is_ok() => Ok(ViewerConfig::load_from_file(&arg)?),
        Some(model) => Ok(ViewerConfig::new().with_model_path(model)),
        None => Ok(ViewerConfig::default()),
    }
}

fn run(config: &ViewerConfig) -> Result<(), AppError> {
    config.validate().map_err(AppError::InvalidConfig)?;

    let mesh = ObjLoader::load_obj(&config.model_path, &config.material_source())?;

    if let Some(bounds) = mesh.bounds() {
        log::info!(
            "Model bounds {:?} .. {:?}, centre {:?}, extent {:.3}",
            bounds.min.as_slice(),
            bounds.max.as_slice(),
            bounds.center().as_slice(),
            bounds.extent()
        );
    }

    let mut recorder = FrameRecorder::new(config.default_color());
    recorder.draw(&mesh);
    let summary = recorder.summary();
    log::info!(
        "Frame: {} triangles drawn, {} skipped, {} vertices and {} normals submitted, {} distinct colours",
        summary.triangles,
        summary.skipped,
        summary.vertices,
        summary.normals,
        summary.colors
    );
    Ok(())
}

fn main() -> ExitCode {
    let config = match load_config(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_with_level(config.level_filter());
    log::info!("Starting objview for {}", config.model_path);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
