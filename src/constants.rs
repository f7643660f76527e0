pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const SCENE_COUNT: u32 = 6;               // Scenes in a deck when nothing else says otherwise
pub const SCENE_DURATION_MS: u64 = 4000;      // Time each scene stays on screen while playing
pub const ENTER_STAGGER_MS: u64 = 100;        // Delay between the previous scene exiting and the next one entering
pub const EXIT_DURATION_MS: u64 = 600;        // How long a scene keeps its exiting flag

pub const ENV_PREFIX: &str = "SLIDEDECK_";
