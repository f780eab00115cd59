//! Input source trait for the rotary encoder

/// Source of wrapping encoder positions
///
/// Decoding and debouncing happen behind this trait. The game only sees a
/// position in `[0, step)` that is stable between polls.
pub trait InputSource {
    /// Current encoder position
    fn read(&mut self) -> u16;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read(&mut self) -> u16 {
        (**self).read()
    }
}
