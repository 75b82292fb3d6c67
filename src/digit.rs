//! The displayed value

/// Raised when a raw value does not fit in 0..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct InvalidDigit(pub u8);

/// A decimal digit, always in 0..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const MAX: Digit = Digit(9);

    pub const fn new(value: u8) -> Result<Self, InvalidDigit> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InvalidDigit(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Step up, 9 wraps to 0
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % 10)
    }

    /// Step down, 0 wraps to 9
    pub const fn prev(self) -> Self {
        Self((self.0 + 9) % 10)
    }
}
