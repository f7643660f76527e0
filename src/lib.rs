pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod headless;
pub mod input;
pub mod progress;
pub mod state;
pub mod surface;
pub mod timer;

#[cfg(feature = "viewer")]
pub mod viewer;

#[cfg(test)]
mod test_support;

pub use config::PresentationConfig;
pub use controller::PresentationController;
pub use error::ConfigError;
pub use input::{Command, Environment, Key, Visibility};
pub use state::{EndBehavior, Playback};
