use raylib::prelude::*;

use crate::progress::IndicatorState;
use crate::surface::{ProgressSurface, RenderSurface};
use crate::viewer::scene::Scene;

const DOT_RADIUS: f32 = 8.0;
const DOT_SPACING: f32 = 28.0;
const BAR_HEIGHT: i32 = 4;

pub struct SceneSurface {
    pub scenes: Vec<Scene>,
}

impl SceneSurface {
    fn scene_mut(&mut self, scene: u32) -> Option<&mut Scene> {
        let index = (scene as usize).checked_sub(1)?;
        self.scenes.get_mut(index)
    }

    pub fn update(&mut self, dt: f32) {
        for scene in self.scenes.iter_mut() {
            scene.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for scene in self.scenes.iter() {
            scene.draw(d);
        }
    }
}

impl RenderSurface for SceneSurface {
    fn has_scene(&self, scene: u32) -> bool {
        (1..=self.scenes.len() as u32).contains(&scene)
    }

    fn set_active(&mut self, scene: u32, active: bool) {
        if let Some(s) = self.scene_mut(scene) {
            s.set_active(active);
        }
    }

    fn set_exiting(&mut self, scene: u32, exiting: bool) {
        if let Some(s) = self.scene_mut(scene) {
            s.set_exiting(exiting);
        }
    }
}

/// Dots, fill bar and play/pause marker along the bottom of the window.
pub struct ProgressOverlay {
    dots: Vec<IndicatorState>,
    fill: f32,
    playing: bool,
}

impl ProgressOverlay {
    pub fn new(scenes: u32) -> Self {
        Self {
            dots: vec![IndicatorState::Upcoming; scenes as usize],
            fill: 0.0,
            playing: true,
        }
    }

    fn dot_center(&self, index: usize, screen_width: f32, screen_height: f32) -> Vector2 {
        let row_width = DOT_SPACING * (self.dots.len().saturating_sub(1)) as f32;
        Vector2::new(
            screen_width * 0.5 - row_width * 0.5 + DOT_SPACING * index as f32,
            screen_height - 48.0,
        )
    }

    /// Scene number of the dot under `pos`, if any.
    pub fn dot_at(&self, pos: Vector2, screen_width: f32, screen_height: f32) -> Option<u32> {
        (0..self.dots.len())
            .find(|&i| {
                let center = self.dot_center(i, screen_width, screen_height);
                let (dx, dy) = (pos.x - center.x, pos.y - center.y);
                dx * dx + dy * dy <= (DOT_RADIUS * 1.5).powi(2)
            })
            .map(|i| i as u32 + 1)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        for (i, state) in self.dots.iter().enumerate() {
            let center = self.dot_center(i, screen_width, screen_height);
            let color = match state {
                IndicatorState::Active => Color::WHITE,
                IndicatorState::Completed => Color::GRAY,
                IndicatorState::Upcoming => Color::DARKGRAY,
            };
            let radius = if *state == IndicatorState::Active { DOT_RADIUS * 1.25 } else { DOT_RADIUS };
            d.draw_circle(center.x as i32, center.y as i32, radius, color);
        }

        let bar_y = screen_height as i32 - BAR_HEIGHT;
        d.draw_rectangle(0, bar_y, screen_width as i32, BAR_HEIGHT, Color::DARKGRAY);
        d.draw_rectangle(0, bar_y, (screen_width * self.fill / 100.0) as i32, BAR_HEIGHT, Color::SKYBLUE);

        let marker = if self.playing { "||" } else { ">" };
        d.draw_text(marker, 20, screen_height as i32 - 60, 24, Color::LIGHTGRAY);
    }
}

impl ProgressSurface for ProgressOverlay {
    fn set_indicator(&mut self, scene: u32, state: IndicatorState) {
        if let Some(dot) = (scene as usize).checked_sub(1).and_then(|i| self.dots.get_mut(i)) {
            *dot = state;
        }
    }

    fn set_fill(&mut self, percent: f32) {
        self.fill = percent.clamp(0.0, 100.0);
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }
}
