//! Rotary encoder handler
//!
//! Decodes quadrature encoder signals into a wrapping position counter.
//! Uses a state machine for reliable decoding with noise rejection.

use embedded_hal::digital::InputPin;
use ophis_core::traits::InputSource;
use portable_atomic::{AtomicU16, Ordering};

/// One detent of rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Decoder state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature decoder working on raw A/B levels
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    state: State,
    last_a: bool,
    last_b: bool,
}

impl QuadratureDecoder {
    /// Create a decoder starting from the current pin levels
    pub const fn new(a: bool, b: bool) -> Self {
        Self {
            state: State::Idle,
            last_a: a,
            last_b: b,
        }
    }

    /// Feed new pin levels; returns a rotation once a full detent completes
    pub fn update(&mut self, a: bool, b: bool) -> Option<Rotation> {
        if a == self.last_a && b == self.last_b {
            return None;
        }

        let rotation = self.decode(a, b);

        self.last_a = a;
        self.last_b = b;

        rotation
    }

    /// Decode encoder levels
    ///
    /// CW:  A leads B (A falls first)
    /// CCW: B leads A (B falls first)
    ///
    /// CW:  Idle (1,1) -> CwStep1 (0,1) -> CwStep2 (0,0) -> emit -> Idle
    /// CCW: Idle (1,1) -> CcwStep1 (1,0) -> CcwStep2 (0,0) -> emit -> Idle
    fn decode(&mut self, a: bool, b: bool) -> Option<Rotation> {
        match self.state {
            State::Idle => {
                if !a && b {
                    self.state = State::CwStep1;
                } else if a && !b {
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 => {
                if !a && !b {
                    self.state = State::CwStep2;
                } else if a && b {
                    // Bounce
                    self.state = State::Idle;
                }
                None
            }
            State::CwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(Rotation::Clockwise);
                }
                None
            }
            State::CcwStep1 => {
                if !a && !b {
                    self.state = State::CcwStep2;
                } else if a && b {
                    // Bounce
                    self.state = State::Idle;
                }
                None
            }
            State::CcwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(Rotation::CounterClockwise);
                }
                None
            }
        }
    }
}

/// Quadrature encoder on two input pins
pub struct Encoder<A, B> {
    a: A,
    b: B,
    decoder: QuadratureDecoder,
}

impl<A, B> Encoder<A, B>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
{
    /// Create an encoder, sampling the current pin levels as the rest state
    pub fn new(mut a: A, mut b: B) -> Result<Self, A::Error> {
        let decoder = QuadratureDecoder::new(a.is_high()?, b.is_high()?);
        Ok(Self { a, b, decoder })
    }

    /// Sample both pins once
    ///
    /// Should be called on every pin edge, or every 1-5 ms when polling.
    pub fn sample(&mut self) -> Result<Option<Rotation>, A::Error> {
        let a = self.a.is_high()?;
        let b = self.b.is_high()?;
        Ok(self.decoder.update(a, b))
    }

    /// Access the pins, e.g. to wait for edges
    pub fn pins_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.a, &mut self.b)
    }
}

/// Position counter wrapping into `[0, range)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotaryCounter {
    value: u16,
    range: u16,
}

impl RotaryCounter {
    /// Create a counter at zero. A zero range is treated as one position.
    pub const fn new(range: u16) -> Self {
        Self {
            value: 0,
            range: if range == 0 { 1 } else { range },
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn range(&self) -> u16 {
        self.range
    }

    /// Step one position, wrapping at both ends
    pub fn apply(&mut self, rotation: Rotation) -> u16 {
        self.value = match rotation {
            Rotation::Clockwise => {
                if self.value + 1 >= self.range {
                    0
                } else {
                    self.value + 1
                }
            }
            Rotation::CounterClockwise => {
                if self.value == 0 {
                    self.range - 1
                } else {
                    self.value - 1
                }
            }
        };
        self.value
    }
}

/// Encoder position shared between the decoding task and the game
///
/// The decoding side stores, the game side reads through [`InputSource`].
#[derive(Clone, Copy)]
pub struct AtomicPosition<'a> {
    cell: &'a AtomicU16,
}

impl<'a> AtomicPosition<'a> {
    pub const fn new(cell: &'a AtomicU16) -> Self {
        Self { cell }
    }

    pub fn store(&self, value: u16) {
        self.cell.store(value, Ordering::Relaxed);
    }

    pub fn load(&self) -> u16 {
        self.cell.load(Ordering::Relaxed)
    }
}

impl InputSource for AtomicPosition<'_> {
    fn read(&mut self) -> u16 {
        self.load()
    }
}
