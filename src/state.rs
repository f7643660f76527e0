#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Playback {
    Playing, // Autoplay advances the deck
    Paused,  // Only manual input moves the deck
}

impl Playback {
    pub fn is_playing(self) -> bool {
        self == Playback::Playing
    }
}

/// What a scene does once the last one has been shown and the timer fires again.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndBehavior {
    /// Stop on the last scene and mark the play control paused.
    #[default]
    Pause,
    /// Go back to the first scene and keep playing.
    Wrap,
}

impl std::str::FromStr for EndBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pause" | "stop" => Ok(EndBehavior::Pause),
            "wrap" | "loop" => Ok(EndBehavior::Wrap),
            other => Err(format!("unknown end behavior '{other}'")),
        }
    }
}
