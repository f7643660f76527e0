//! raylib host: one scene per image in a directory.

mod scene;
mod surface;
mod texture_loader;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::config::PresentationConfig;
use crate::constants::*;
use crate::controller::PresentationController;
use crate::input::{Command, Environment, Key, Visibility};

use self::scene::Scene;
use self::surface::{ProgressOverlay, SceneSurface};
use self::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const KEY_BINDINGS: [(KeyboardKey, Key); 4] = [
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
    (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
    (KeyboardKey::KEY_R, Key::Char('r')),
];

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

pub fn run(mut config: PresentationConfig, environment: Environment, image_dir: &Path) -> Result<()> {
    let image_paths = load_sorted_image_paths(image_dir)?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Slide Deck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Scenes ---
    let fade_duration = config.exit_duration().as_secs_f32();
    let mut scenes = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => scenes.push(Scene::new(texture, fade_duration)),
            Err(e) => warn!(error = %e, "skipping scene image"),
        }
    }
    if scenes.is_empty() {
        bail!("no scene could be loaded from {}", image_dir.display());
    }

    config.total_scenes = scenes.len() as u32;
    info!(scenes = config.total_scenes, dir = %image_dir.display(), "starting deck");

    let progress = ProgressOverlay::new(config.total_scenes);
    let mut deck = PresentationController::new(config, SceneSurface { scenes }, progress)
        .context("invalid presentation config")?;
    deck.initialize(environment);

    let mut visibility = Visibility::Shown;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // 1. Environment and input
        let now_visible = if rl.is_window_minimized() { Visibility::Hidden } else { Visibility::Shown };
        if now_visible != visibility {
            visibility = now_visible;
            deck.on_visibility_change(visibility);
        }

        for (raylib_key, key) in KEY_BINDINGS {
            if rl.is_key_pressed(raylib_key) {
                deck.handle_key(key);
            }
        }
        for (i, raylib_key) in DIGIT_KEYS.iter().enumerate() {
            if rl.is_key_pressed(*raylib_key) {
                deck.dispatch(Command::GoTo(i as u32 + 1));
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let pos = rl.get_mouse_position();
            let (sw, sh) = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            if let Some(scene) = deck.progress().dot_at(pos, sw, sh) {
                deck.dispatch(Command::GoTo(scene));
            }
        }

        // 2. Timers, then scene fades
        deck.advance(Duration::from_secs_f32(dt));
        deck.render_mut().update(dt);

        // 3. Draw
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        deck.render().draw(&mut d);
        deck.progress().draw(&mut d);
    }

    info!(scene = deck.current_scene(), "window closed");
    Ok(())
}
