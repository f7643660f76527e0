use raylib::prelude::*;

pub struct Scene {
    image: Texture2D,

    active: bool,
    exiting: bool,

    opacity: f32,
    fade_duration: f32,
    fade_timer: f32,
    tween_fade: Option<ease::Tween>,
}

impl Scene {
    pub fn new(image: Texture2D, fade_duration: f32) -> Self {
        Self {
            image,
            active: false,
            exiting: false,
            opacity: 0.0,
            fade_duration: fade_duration.max(f32::EPSILON),
            fade_timer: 0.0,
            tween_fade: None,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            self.start_fade(ease::cubic_out, 1.0);
        }
    }

    pub fn set_exiting(&mut self, exiting: bool) {
        self.exiting = exiting;
        if exiting {
            self.start_fade(ease::sine_in_out, 0.0);
        } else if !self.active {
            // Exit finished, drop whatever is left of the fade
            self.tween_fade = None;
            self.opacity = 0.0;
        }
    }

    fn start_fade(&mut self, easing: ease::EaseFn, target: f32) {
        self.fade_timer = 0.0;
        self.tween_fade = Some(ease::Tween::new(easing, self.opacity, target, self.fade_duration));
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween_fade.as_mut() else {
            return;
        };

        self.opacity = tween.apply(dt).clamp(0.0, 1.0);
        self.fade_timer += dt;
        if self.fade_timer >= self.fade_duration {
            self.opacity = if self.active { 1.0 } else { 0.0 };
            self.tween_fade = None;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if self.opacity <= 0.0 {
            return;
        }

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        // Fit inside 90% of the window, never upscale
        let scale = (screen_width * 0.9 / tex_width)
            .min(screen_height * 0.8 / tex_height)
            .min(1.0);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        // Slight drift while exiting
        let drift = if self.exiting { (1.0 - self.opacity) * -40.0 } else { 0.0 };

        let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);
        let center = Vector2::new(screen_width * 0.5 + drift, screen_height * 0.45);

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x, center.y, scaled_width, scaled_height),
            origin,
            0.0,
            Color::new(255, 255, 255, (self.opacity * 255.0) as u8),
        );
    }
}
