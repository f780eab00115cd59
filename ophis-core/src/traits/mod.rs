//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic
//! and hardware-specific implementations.

pub mod display;
pub mod input;

pub use display::{DisplayAdapter, DisplayError, DisplayExt};
pub use input::InputSource;
