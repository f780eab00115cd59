//! Phase definition
//!
//! What the loop does on each poll is a function of the current phase.

use super::events::Event;

/// Game loop phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Reset state and draw the board
    #[default]
    Init,
    /// Snake advancing once per tick
    Playing,
    /// Game ended; end screen pending
    GameOver,
    /// End screen shown, waiting for the encoder to move
    AwaitingRestart,
}

impl Phase {
    /// Check if ticks advance the snake in this phase
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Init, Initialized) => Playing,

            (Playing, SelfCollision) => GameOver,
            (Playing, BoardFull) => GameOver,

            (GameOver, GameOverShown) => AwaitingRestart,

            (AwaitingRestart, RestartRequested) => Init,

            // Default: stay in current phase
            _ => self,
        }
    }
}
