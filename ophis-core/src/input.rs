//! Rotary input interpretation
//!
//! The encoder reports a position that wraps modulo `step`. Each tick the
//! game compares the new reading with the previous one and turns the snake
//! at most once.

/// Turn decision for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Turn {
    None,
    Clockwise,
    CounterClockwise,
}

/// Forward (increasing) distance from `previous` to `current` on a circle of
/// `step` positions
pub fn forward_distance(previous: u16, current: u16, step: u16) -> u16 {
    if step == 0 {
        return 0;
    }
    let previous = u32::from(previous % step);
    let current = u32::from(current % step);
    let step = u32::from(step);
    ((current + step - previous) % step) as u16
}

/// Interpret two encoder readings as a turn
///
/// A forward distance below half the range is clockwise; anything else
/// (including exactly half) is counter-clockwise.
pub fn interpret(previous: u16, current: u16, step: u16) -> Turn {
    let forward = u32::from(forward_distance(previous, current, step));
    if forward == 0 {
        Turn::None
    } else if forward * 2 < u32::from(step) {
        Turn::Clockwise
    } else {
        Turn::CounterClockwise
    }
}

/// Last observed encoder position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotaryTracker {
    last: u16,
    step: u16,
}

impl RotaryTracker {
    pub const fn new(step: u16, initial: u16) -> Self {
        Self {
            last: initial,
            step,
        }
    }

    /// Re-anchor on a reading without producing a turn
    pub fn sync(&mut self, value: u16) {
        self.last = value;
    }

    /// Interpret a new reading against the last one and remember it
    pub fn update(&mut self, current: u16) -> Turn {
        let turn = interpret(self.last, current, self.step);
        self.last = current;
        turn
    }

    pub fn last(&self) -> u16 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_change() {
        assert_eq!(interpret(42, 42, 100), Turn::None);
        assert_eq!(interpret(0, 100, 100), Turn::None);
    }

    #[test]
    fn test_simple_directions() {
        assert_eq!(interpret(10, 11, 100), Turn::Clockwise);
        assert_eq!(interpret(11, 10, 100), Turn::CounterClockwise);
    }

    #[test]
    fn test_wrap_forward_is_clockwise() {
        // 90 -> 5 moves forward through the wrap by 15
        assert_eq!(forward_distance(90, 5, 100), 15);
        assert_eq!(interpret(90, 5, 100), Turn::Clockwise);
    }

    #[test]
    fn test_wrap_backward_is_counter_clockwise() {
        assert_eq!(forward_distance(5, 90, 100), 85);
        assert_eq!(interpret(5, 90, 100), Turn::CounterClockwise);
    }

    #[test]
    fn test_half_step_boundary() {
        assert_eq!(interpret(0, 49, 100), Turn::Clockwise);
        assert_eq!(interpret(0, 50, 100), Turn::CounterClockwise);
        assert_eq!(interpret(75, 25, 100), Turn::CounterClockwise);
        assert_eq!(interpret(75, 24, 100), Turn::Clockwise);
    }

    #[test]
    fn test_half_step_boundary_odd_range() {
        // 2 * 3 < 7, 2 * 4 >= 7
        assert_eq!(interpret(0, 3, 7), Turn::Clockwise);
        assert_eq!(interpret(0, 4, 7), Turn::CounterClockwise);
    }

    #[test]
    fn test_zero_step() {
        assert_eq!(interpret(3, 9, 0), Turn::None);
    }

    #[test]
    fn test_tracker_updates_last() {
        let mut tracker = RotaryTracker::new(100, 0);
        assert_eq!(tracker.update(1), Turn::Clockwise);
        assert_eq!(tracker.update(1), Turn::None);
        assert_eq!(tracker.update(0), Turn::CounterClockwise);
        assert_eq!(tracker.update(99), Turn::CounterClockwise);
        assert_eq!(tracker.update(3), Turn::Clockwise);
        assert_eq!(tracker.last(), 3);
    }

    #[test]
    fn test_tracker_sync_suppresses_turn() {
        let mut tracker = RotaryTracker::new(100, 0);
        tracker.sync(37);
        assert_eq!(tracker.update(37), Turn::None);
    }

    proptest! {
        #[test]
        fn interpret_is_deterministic(prev in 0u16..1000, cur in 0u16..1000, step in 1u16..1000) {
            prop_assert_eq!(interpret(prev, cur, step), interpret(prev, cur, step));
        }

        #[test]
        fn reversed_readings_flip_direction(prev in 0u16..100, cur in 0u16..100) {
            // With an odd range there is no exact half-way tie
            let step = 101;
            match interpret(prev, cur, step) {
                Turn::None => prop_assert_eq!(interpret(cur, prev, step), Turn::None),
                Turn::Clockwise => {
                    prop_assert_eq!(interpret(cur, prev, step), Turn::CounterClockwise)
                }
                Turn::CounterClockwise => {
                    prop_assert_eq!(interpret(cur, prev, step), Turn::Clockwise)
                }
            }
        }

        #[test]
        fn forward_distance_in_range(prev in any::<u16>(), cur in any::<u16>(), step in 1u16..=u16::MAX) {
            prop_assert!(forward_distance(prev, cur, step) < step);
        }
    }
}
