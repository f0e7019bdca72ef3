//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace, LevelFilter};

/// Initialize the logging system with a fallback level
///
/// `RUST_LOG` still wins when it is set, so a user can raise verbosity
/// without editing the viewer config.
pub fn init_with_level(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if let Err(e) = builder.try_init() {
        log::debug!("Logger already initialised: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_tolerated() {
        init_with_level(LevelFilter::Warn);
        init_with_level(LevelFilter::Debug);
        log::info!("logger still usable after a second init");
    }
}
