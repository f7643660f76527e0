#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Upcoming,
    Active,
    Completed,
}

pub fn indicator_state(scene: u32, current: u32) -> IndicatorState {
    if scene == current {
        IndicatorState::Active
    } else if scene < current {
        IndicatorState::Completed
    } else {
        IndicatorState::Upcoming
    }
}

/// Share of the deck traversed, in percent. A one-scene deck is always complete.
pub fn fill_percent(current: u32, total: u32) -> f32 {
    if total <= 1 {
        return 100.0;
    }
    let traversed = current.clamp(1, total) - 1;
    traversed as f32 / (total - 1) as f32 * 100.0
}
