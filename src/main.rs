//! Hyperwire - animated tesseract wireframes
//!
//! Projects a rotating 4D hypercube and writes each frame as SVG.

use hyperwire::config::AppConfig;
use hyperwire::systems::AnimationSystem;

fn main() {
    let loaded = AppConfig::load();
    let default_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    log::info!("Starting Hyperwire");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut animation = AnimationSystem::new(&config);
    match animation.run() {
        Ok(summary) => {
            if summary.degenerate_vertices > 0 {
                log::warn!(
                    "{} vertices hit the projection singularity and were skipped",
                    summary.degenerate_vertices
                );
            }
            log::info!("Done: {} frames", summary.frames_written);
        }
        Err(e) => {
            log::error!("Animation failed: {}", e);
            std::process::exit(1);
        }
    }
}
