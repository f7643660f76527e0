use crate::constants::ENV_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlayPause,
    Replay,
    Next,
    Previous,
    GoTo(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowRight,
    ArrowLeft,
    Char(char),
}

pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::Space => Some(Command::TogglePlayPause),
        Key::ArrowRight => Some(Command::Next),
        Key::ArrowLeft => Some(Command::Previous),
        Key::Char('r' | 'R') => Some(Command::Replay),
        // Digit keys stand in for clicking a progress dot
        Key::Char(c @ '1'..='9') => c.to_digit(10).map(Command::GoTo),
        Key::Char(_) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

/// Environment preferences, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Environment {
    pub reduced_motion: bool,
}

impl Environment {
    pub fn from_env() -> Self {
        let reduced_motion = std::env::var(format!("{ENV_PREFIX}REDUCED_MOTION"))
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "reduce"))
            .unwrap_or(false);
        Self { reduced_motion }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_bindings() {
        assert_eq!(command_for_key(Key::Space), Some(Command::TogglePlayPause));
        assert_eq!(command_for_key(Key::ArrowRight), Some(Command::Next));
        assert_eq!(command_for_key(Key::ArrowLeft), Some(Command::Previous));
        assert_eq!(command_for_key(Key::Char('r')), Some(Command::Replay));
        assert_eq!(command_for_key(Key::Char('R')), Some(Command::Replay));
        assert_eq!(command_for_key(Key::Char('4')), Some(Command::GoTo(4)));
        assert_eq!(command_for_key(Key::Char('0')), None);
        assert_eq!(command_for_key(Key::Char('x')), None);
    }
}
