//! Ophis - Rotary Snake Firmware
//!
//! Snake on a 128x64 SSD1306 OLED, steered by a rotary encoder, for
//! RP2040-based boards. Game rules and layout live in `ophis-core`; this
//! binary wires up the peripherals and runs two tasks.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use {defmt_rtt as _, panic_probe as _};

use ophis_display::Oled;

use crate::config::GAME_CONFIG;

mod config;
mod tasks;

/// OLED bus speed
const I2C_FREQUENCY: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ophis firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = GAME_CONFIG;
    info!("Game configuration: {}", config);

    // Setup I2C1 for the OLED (SCL=GPIO15, SDA=GPIO14)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let mut display = Oled::new(i2c);
    match display.init() {
        Ok(()) => info!("Display initialized"),
        Err(e) => error!("Display init failed: {}", e),
    }

    // Setup encoder (GPIO10=A, GPIO11=B)
    let enc_a = Input::new(p.PIN_10, Pull::Up);
    let enc_b = Input::new(p.PIN_11, Pull::Up);

    // Seed food placement from the ring oscillator
    let rng = SmallRng::seed_from_u64(RoscRng.next_u64());

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::encoder_task(enc_a, enc_b, config.encoder_step)));
    unwrap!(spawner.spawn(tasks::game_task(display, config, rng)));

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
