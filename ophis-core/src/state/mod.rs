//! Game loop state machine
//!
//! The loop is explicit, finite and deterministic: every phase change is the
//! result of an [`Event`].

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Phase;
