//! Collaborators the controller drives but does not own.
//!
//! Scenes and progress dots are addressed by 1-based scene number. A surface
//! that has no element for a scene simply ignores commands for it.

use tracing::info;

use crate::progress::IndicatorState;

pub trait RenderSurface {
    fn has_scene(&self, scene: u32) -> bool;
    fn set_active(&mut self, scene: u32, active: bool);
    fn set_exiting(&mut self, scene: u32, exiting: bool);
}

pub trait ProgressSurface {
    fn set_indicator(&mut self, scene: u32, state: IndicatorState);
    /// Width of the continuous fill bar, in percent.
    fn set_fill(&mut self, percent: f32);
    /// The play/pause control mirrors the playback flag.
    fn set_playing(&mut self, playing: bool);
}

/// Surface that only logs, used by the headless host.
#[derive(Debug, Default)]
pub struct LogSurface {
    scenes: u32,
}

impl LogSurface {
    pub fn new(scenes: u32) -> Self {
        Self { scenes }
    }
}

impl RenderSurface for LogSurface {
    fn has_scene(&self, scene: u32) -> bool {
        (1..=self.scenes).contains(&scene)
    }

    fn set_active(&mut self, scene: u32, active: bool) {
        info!(scene, active, "scene active");
    }

    fn set_exiting(&mut self, scene: u32, exiting: bool) {
        info!(scene, exiting, "scene exiting");
    }
}

impl ProgressSurface for LogSurface {
    fn set_indicator(&mut self, _scene: u32, _state: IndicatorState) {}

    fn set_fill(&mut self, percent: f32) {
        info!("progress {percent:.0}%");
    }

    fn set_playing(&mut self, playing: bool) {
        info!(playing, "play control");
    }
}
