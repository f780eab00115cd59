//! Game task
//!
//! Drives the core game loop: one poll per wake-up, then sleeps for as long
//! as the poll asks. Display errors are logged and the game keeps going.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;
use rand::rngs::SmallRng;

use ophis_core::{Event, GameConfig, GameLoop};
use ophis_display::Oled;
use ophis_drivers::AtomicPosition;

use super::encoder::POSITION;

pub type Display = Oled<I2c<'static, I2C1, Blocking>>;

#[embassy_executor::task]
pub async fn game_task(mut display: Display, config: GameConfig, rng: SmallRng) {
    info!("Game task started");

    let mut game = match GameLoop::new(config, rng) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid game configuration: {}", e);
            return;
        }
    };
    let mut input = AtomicPosition::new(&POSITION);

    loop {
        let step = game.poll(&mut display, &mut input);
        if let Err(e) = step.flush {
            warn!("Display flush failed: {}", e);
        }

        if let Some(event) = step.event {
            let score = game.state().score();
            match event {
                Event::Initialized => info!("New game, heading {}", game.state().direction()),
                Event::FoodEaten => debug!("Food eaten, score {}", score),
                Event::SelfCollision => info!("Self collision, final score {}", score),
                Event::BoardFull => info!("Board full, final score {}", score),
                Event::GameOverShown => debug!("Waiting for restart input"),
                Event::RestartRequested => info!("Restart requested"),
            }
        }

        if step.sleep_ms > 0 {
            Timer::after_millis(u64::from(step.sleep_ms)).await;
        } else {
            yield_now().await;
        }
    }
}
