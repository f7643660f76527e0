// Recording surfaces for controller tests

use std::collections::BTreeSet;

use crate::progress::IndicatorState;
use crate::surface::{ProgressSurface, RenderSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Active(u32, bool),
    Exiting(u32, bool),
}

/// Render surface with a fixed number of scene elements that keeps every command it receives.
#[derive(Debug, Default)]
pub struct RecordingRender {
    scenes: u32,
    pub active: BTreeSet<u32>,
    pub exiting: BTreeSet<u32>,
    pub ops: Vec<RenderOp>,
}

impl RecordingRender {
    pub fn new(scenes: u32) -> Self {
        Self {
            scenes,
            ..Self::default()
        }
    }

    pub fn active_scenes(&self) -> Vec<u32> {
        self.active.iter().copied().collect()
    }
}

impl RenderSurface for RecordingRender {
    fn has_scene(&self, scene: u32) -> bool {
        (1..=self.scenes).contains(&scene)
    }

    fn set_active(&mut self, scene: u32, active: bool) {
        self.ops.push(RenderOp::Active(scene, active));
        if active {
            self.active.insert(scene);
        } else {
            self.active.remove(&scene);
        }
    }

    fn set_exiting(&mut self, scene: u32, exiting: bool) {
        self.ops.push(RenderOp::Exiting(scene, exiting));
        if exiting {
            self.exiting.insert(scene);
        } else {
            self.exiting.remove(&scene);
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub indicators: Vec<IndicatorState>,
    pub fill: Option<f32>,
    pub playing: Option<bool>,
}

impl RecordingProgress {
    pub fn new(scenes: u32) -> Self {
        Self {
            indicators: vec![IndicatorState::Upcoming; scenes as usize],
            ..Self::default()
        }
    }
}

impl ProgressSurface for RecordingProgress {
    fn set_indicator(&mut self, scene: u32, state: IndicatorState) {
        if let Some(slot) = self.indicators.get_mut(scene as usize - 1) {
            *slot = state;
        }
    }

    fn set_fill(&mut self, percent: f32) {
        self.fill = Some(percent);
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = Some(playing);
    }
}
