//! Input driver implementations for the Ophis rotary snake
//!
//! This crate provides the rotary encoder side of the game:
//! - Quadrature decoding with noise rejection
//! - A wrapping position counter
//! - An atomic position cell that implements `InputSource`

#![no_std]

pub mod encoder;

pub use encoder::{AtomicPosition, Encoder, QuadratureDecoder, Rotation, RotaryCounter};
