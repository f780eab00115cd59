//! Encoder rotation task
//!
//! Waits for an edge on either encoder pin, samples both and folds completed
//! detents into a position counter wrapping at the configured step.

use defmt::*;
use embassy_futures::select::select;
use embassy_rp::gpio::Input;
use portable_atomic::AtomicU16;

use ophis_drivers::{AtomicPosition, Encoder, RotaryCounter, Rotation};

/// Current encoder position, in `[0, encoder_step)`
pub static POSITION: AtomicU16 = AtomicU16::new(0);

#[embassy_executor::task]
pub async fn encoder_task(a: Input<'static>, b: Input<'static>, step: u16) {
    info!("Encoder task started");

    let mut encoder = Encoder::new(a, b).unwrap_or_else(|e| match e {});
    let mut counter = RotaryCounter::new(step);
    let position = AtomicPosition::new(&POSITION);
    position.store(counter.value());

    loop {
        let (a, b) = encoder.pins_mut();
        let _ = select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;

        let rotation = match encoder.sample() {
            Ok(Some(rotation)) => rotation,
            Ok(None) => continue,
            Err(e) => match e {},
        };

        let value = counter.apply(rotation);
        position.store(value);

        match rotation {
            Rotation::Clockwise => trace!("Encoder: CW -> {}", value),
            Rotation::CounterClockwise => trace!("Encoder: CCW -> {}", value),
        }
    }
}
