//! Game loop orchestration
//!
//! [`GameLoop::poll`] performs one unit of work for the current phase and
//! tells the caller how long to sleep before polling again. The caller owns
//! the timer, so this module never blocks.

use rand::RngCore;

use crate::config::{ConfigError, GameConfig};
use crate::game::{GameState, TickOutcome};
use crate::input::RotaryTracker;
use crate::render::Renderer;
use crate::state::{Event, Phase};
use crate::traits::{DisplayAdapter, DisplayError, InputSource};

/// What the caller should do after a poll
///
/// A failed flush does not undo the phase change, so the sleep and event are
/// still valid and the buffer is resent by a later flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Delay before the next poll (ms)
    pub sleep_ms: u32,
    /// Event produced by this poll, if any
    pub event: Option<Event>,
    /// Outcome of pushing the buffer to the display
    pub flush: Result<(), DisplayError>,
}

/// Owns all game state and drives the display from encoder input
pub struct GameLoop<R> {
    config: GameConfig,
    renderer: Renderer,
    state: GameState,
    phase: Phase,
    rotary: RotaryTracker,
    /// Encoder reading taken when the end screen went up
    restart_anchor: u16,
    rng: R,
}

impl<R: RngCore> GameLoop<R> {
    /// Create a loop in the `Init` phase
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        let renderer = Renderer::new(&config)?;
        let state = GameState::new(&config, &mut rng)?;

        Ok(Self {
            config,
            renderer,
            state,
            phase: Phase::Init,
            rotary: RotaryTracker::new(config.encoder_step, 0),
            restart_anchor: 0,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one step of the current phase
    pub fn poll<D, I>(&mut self, display: &mut D, input: &mut I) -> Step
    where
        D: DisplayAdapter,
        I: InputSource,
    {
        match self.phase {
            Phase::Init => self.init(display, input),
            Phase::Playing => self.tick(display, input),
            Phase::GameOver => self.game_over(display, input),
            Phase::AwaitingRestart => self.await_restart(display, input),
        }
    }

    fn apply(&mut self, event: Event) -> Option<Event> {
        self.phase = self.phase.transition(event);
        Some(event)
    }

    /// Reset the board and draw it from scratch
    fn init<D: DisplayAdapter, I: InputSource>(&mut self, display: &mut D, input: &mut I) -> Step {
        self.state.reset(&mut self.rng);
        self.rotary.sync(input.read());

        display.fill(false);
        self.renderer.draw_frame(display);
        self.renderer.draw_board(display, &self.state);
        self.renderer.render_scoreboard(display, self.state.score());

        let event = self.apply(Event::Initialized);

        Step {
            sleep_ms: self.config.tick_ms,
            event,
            flush: display.flush(),
        }
    }

    /// Read input, move, resolve and draw the changed cells
    fn tick<D: DisplayAdapter, I: InputSource>(&mut self, display: &mut D, input: &mut I) -> Step {
        let turn = self.rotary.update(input.read());
        self.state.turn(turn);

        let event = match self.state.advance(&mut self.rng) {
            TickOutcome::Moved { head, tail } => {
                self.renderer.draw_cell(display, tail, false);
                self.renderer.draw_cell(display, head, true);
                None
            }
            TickOutcome::Ate { head, food } => {
                self.renderer.draw_cell(display, head, true);
                self.renderer.draw_cell(display, food, true);
                Some(Event::FoodEaten)
            }
            TickOutcome::Collided { .. } => Some(Event::SelfCollision),
            TickOutcome::BoardFull { head } => {
                self.renderer.draw_cell(display, head, true);
                Some(Event::BoardFull)
            }
        };

        if let Some(event) = event {
            self.phase = self.phase.transition(event);
        }

        if !self.phase.is_playing() {
            // End screen is drawn on the next poll
            return Step {
                sleep_ms: 0,
                event,
                flush: Ok(()),
            };
        }

        self.renderer.render_scoreboard(display, self.state.score());

        Step {
            sleep_ms: self.config.tick_ms,
            event,
            flush: display.flush(),
        }
    }

    /// Show the end screen and remember where the encoder was at the loss
    fn game_over<D: DisplayAdapter, I: InputSource>(
        &mut self,
        display: &mut D,
        input: &mut I,
    ) -> Step {
        self.restart_anchor = input.read();
        self.renderer.render_game_over(display, self.state.score());

        let event = self.apply(Event::GameOverShown);

        Step {
            sleep_ms: self.config.restart_debounce_ms,
            event,
            flush: display.flush(),
        }
    }

    /// Wait for the encoder to differ from the reading taken at the loss
    fn await_restart<D: DisplayAdapter, I: InputSource>(
        &mut self,
        display: &mut D,
        input: &mut I,
    ) -> Step {
        if input.read() == self.restart_anchor {
            return Step {
                sleep_ms: self.config.restart_poll_ms,
                event: None,
                flush: Ok(()),
            };
        }

        display.fill(false);
        let event = self.apply(Event::RestartRequested);

        Step {
            sleep_ms: 0,
            event,
            flush: display.flush(),
        }
    }
}
