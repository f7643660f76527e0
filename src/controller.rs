use std::time::Duration;

use tracing::{debug, info};

use crate::config::PresentationConfig;
use crate::error::ConfigError;
use crate::input::{Command, Environment, Key, Visibility, command_for_key};
use crate::progress::{fill_percent, indicator_state};
use crate::state::{EndBehavior, Playback};
use crate::surface::{ProgressSurface, RenderSurface};
use crate::timer::{TimerId, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    AutoAdvance,
    Activate(u32),
    ClearExiting(u32),
}

/// Single authority over which scene is shown and whether the deck plays.
///
/// Every scene change goes through [`show_scene`](Self::show_scene), and every
/// change of scene or playback cancels the pending auto-advance before
/// deciding whether to arm a new one, so at most one is ever outstanding.
pub struct PresentationController<R, P> {
    config: PresentationConfig,

    current_scene: u32,
    playback: Playback,

    active_scene: Option<u32>, // Scene carrying the active flag on the render surface
    autoplay: Option<TimerId>,
    pending_enter: Option<TimerId>,
    timers: TimerQueue<TimerEvent>,

    hidden: bool,
    resume_on_show: bool,

    render: R,
    progress: P,
}

impl<R: RenderSurface, P: ProgressSurface> PresentationController<R, P> {
    pub fn new(config: PresentationConfig, render: R, progress: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            current_scene: 1,
            playback: Playback::Playing,
            active_scene: None,
            autoplay: None,
            pending_enter: None,
            timers: TimerQueue::new(),
            hidden: false,
            resume_on_show: false,
            render,
            progress,
        })
    }

    pub fn initialize(&mut self, environment: Environment) {
        self.show_scene(1);
        self.progress.set_playing(self.playback.is_playing());
        self.start_autoplay();

        if environment.reduced_motion {
            info!("reduced motion requested, starting paused");
            self.pause();
        }
    }

    pub fn show_scene(&mut self, scene: u32) {
        // An activation that has not happened yet is superseded
        if let Some(id) = self.pending_enter.take() {
            self.timers.cancel(id);
        }

        let previous = self.active_scene.take();
        if let Some(prev) = previous {
            self.render.set_exiting(prev, true);
            self.render.set_active(prev, false);
            self.timers
                .schedule(self.config.exit_duration(), TimerEvent::ClearExiting(prev));
        }

        if self.render.has_scene(scene) {
            if previous.is_some() {
                let id = self
                    .timers
                    .schedule(self.config.enter_stagger(), TimerEvent::Activate(scene));
                self.pending_enter = Some(id);
            } else {
                self.activate(scene);
            }
        } else {
            debug!(scene, "no render element for scene, skipping visual update");
        }

        debug!(from = ?previous, to = scene, "show scene");
        self.current_scene = scene;
        self.update_progress();
    }

    pub fn update_progress(&mut self) {
        let total = self.config.total_scenes;
        for scene in 1..=total {
            self.progress
                .set_indicator(scene, indicator_state(scene, self.current_scene));
        }
        self.progress.set_fill(fill_percent(self.current_scene, total));
    }

    pub fn next_scene(&mut self) {
        if self.current_scene < self.config.total_scenes {
            self.show_scene(self.current_scene + 1);
            self.reset_timer();
            return;
        }

        match self.config.end_behavior {
            EndBehavior::Pause => {
                debug!("last scene reached, pausing");
                self.pause();
            }
            EndBehavior::Wrap => {
                debug!("last scene reached, wrapping to first");
                self.show_scene(1);
                self.reset_timer();
            }
        }
    }

    pub fn previous_scene(&mut self) {
        if self.current_scene > 1 {
            self.show_scene(self.current_scene - 1);
            self.reset_timer();
        }
    }

    pub fn go_to_scene(&mut self, scene: u32) {
        if !(1..=self.config.total_scenes).contains(&scene) {
            debug!(scene, total = self.config.total_scenes, "ignoring out of range scene");
            return;
        }

        self.show_scene(scene);
        self.reset_timer();

        if !self.playback.is_playing() && scene < self.config.total_scenes {
            self.play();
        }
    }

    pub fn play(&mut self) {
        info!(scene = self.current_scene, "play");
        self.playback = Playback::Playing;
        self.progress.set_playing(true);

        if self.current_scene >= self.config.total_scenes {
            self.show_scene(1);
        }

        self.start_autoplay();
    }

    pub fn pause(&mut self) {
        info!(scene = self.current_scene, "pause");
        self.playback = Playback::Paused;
        self.progress.set_playing(false);
        self.cancel_autoplay();
    }

    pub fn toggle_play_pause(&mut self) {
        if self.playback.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn replay(&mut self) {
        info!("replay");
        self.show_scene(1);
        self.playback = Playback::Playing;
        self.progress.set_playing(true);
        self.reset_timer();
    }

    pub fn on_visibility_change(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Hidden if !self.hidden => {
                self.hidden = true;
                self.resume_on_show = self.playback.is_playing();
                if self.resume_on_show {
                    self.pause();
                }
            }
            Visibility::Shown if self.hidden => {
                self.hidden = false;
                if std::mem::take(&mut self.resume_on_show) {
                    self.resume();
                }
            }
            _ => {}
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::TogglePlayPause => self.toggle_play_pause(),
            Command::Replay => self.replay(),
            Command::Next => self.next_scene(),
            Command::Previous => self.previous_scene(),
            Command::GoTo(scene) => self.go_to_scene(scene),
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        if let Some(command) = command_for_key(key) {
            self.dispatch(command);
        }
    }

    /// Moves virtual time forward by `dt`, firing every timer that falls due on the way.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.timers.now() + dt;
        while let Some((id, event)) = self.timers.pop_due(until) {
            self.fire(id, event);
        }
        self.timers.advance_to(until);
    }

    fn fire(&mut self, id: TimerId, event: TimerEvent) {
        match event {
            TimerEvent::AutoAdvance => {
                if self.autoplay == Some(id) {
                    self.autoplay = None;
                }
                // next_scene resets the timer, which decides whether the loop continues
                self.next_scene();
            }
            TimerEvent::Activate(scene) => {
                if self.pending_enter == Some(id) {
                    self.pending_enter = None;
                }
                self.activate(scene);
            }
            TimerEvent::ClearExiting(scene) => self.render.set_exiting(scene, false),
        }
    }

    fn activate(&mut self, scene: u32) {
        self.render.set_active(scene, true);
        self.active_scene = Some(scene);
    }

    fn resume(&mut self) {
        info!(scene = self.current_scene, "resume");
        self.playback = Playback::Playing;
        self.progress.set_playing(true);
        self.start_autoplay();
    }

    fn start_autoplay(&mut self) {
        if !self.playback.is_playing() {
            return;
        }
        self.cancel_autoplay();
        let id = self
            .timers
            .schedule(self.config.scene_duration(), TimerEvent::AutoAdvance);
        self.autoplay = Some(id);
    }

    fn reset_timer(&mut self) {
        self.cancel_autoplay();
        if self.playback.is_playing() {
            self.start_autoplay();
        }
    }

    fn cancel_autoplay(&mut self) {
        if let Some(id) = self.autoplay.take() {
            self.timers.cancel(id);
        }
    }

    pub fn current_scene(&self) -> u32 {
        self.current_scene
    }

    pub fn total_scenes(&self) -> u32 {
        self.config.total_scenes
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Auto-advance timers currently armed. Never more than one.
    pub fn pending_autoplay_timers(&self) -> usize {
        self.timers
            .pending()
            .filter(|event| **event == TimerEvent::AutoAdvance)
            .count()
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
