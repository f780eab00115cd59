//! Events driving the game loop state machine

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Board reset and drawn
    Initialized,
    /// Snake ate the food and grew
    FoodEaten,
    /// New head landed on the body
    SelfCollision,
    /// Snake covers the whole grid, no room for food
    BoardFull,
    /// Game-over screen rendered
    GameOverShown,
    /// Encoder moved while waiting for restart
    RestartRequested,
}

impl Event {
    /// Check if this event ends the current game
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::SelfCollision | Event::BoardFull)
    }
}
