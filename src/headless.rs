use std::time::Duration;

use tracing::info;

use crate::config::PresentationConfig;
use crate::constants::*;
use crate::controller::PresentationController;
use crate::error::ConfigError;
use crate::input::Environment;
use crate::surface::LogSurface;

/// Runs a deck without a window for `seconds` of virtual time, at the viewer's frame step.
pub fn run(config: PresentationConfig, environment: Environment, seconds: f32) -> Result<(), ConfigError> {
    let scenes = config.total_scenes;
    let mut deck = PresentationController::new(config, LogSurface::new(scenes), LogSurface::new(scenes))?;
    deck.initialize(environment);

    let dt = Duration::from_secs_f32(FRAME_TIME);
    let frames = (seconds.max(0.0) * FPS as f32).ceil() as u64;
    for _ in 0..frames {
        deck.advance(dt);
    }

    info!(
        scene = deck.current_scene(),
        total = deck.total_scenes(),
        playing = deck.is_playing(),
        elapsed = ?deck.now(),
        "headless run finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_to_completion() {
        let config = PresentationConfig {
            scene_duration_ms: 50,
            ..PresentationConfig::default()
        };
        run(config, Environment::default(), 1.0).expect("headless run");
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = PresentationConfig {
            total_scenes: 0,
            ..PresentationConfig::default()
        };
        assert!(run(config, Environment::default(), 1.0).is_err());
    }
}
