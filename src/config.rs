//! Compiled-in constants for the BitDogLab-style Pico board

use crate::color::Rgb;

/// LEDs on the matrix chain
pub const PIXEL_COUNT: usize = 25;

/// Minimum gap between two accepted presses of the same button
pub const DEBOUNCE_MS: u32 = 150;

/// Heartbeat toggle period (one full blink is two periods)
pub const BLINK_PERIOD_MS: u32 = 100;

/// Sleep between polls of the dirty flag
pub const POLL_INTERVAL_MS: u32 = 10;

/// WS2812 bit rate
pub const WS2812_FREQ_HZ: u32 = 800_000;

/// External crystal on the Pico
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// Lit pixel colour, dim white
pub const ON_COLOR: Rgb = Rgb::new(10, 10, 10);

/// Unlit pixel colour
pub const OFF_COLOR: Rgb = Rgb::new(0, 0, 0);

/// GPIO numbers
pub mod pins {
    /// Status LED, red channel (the one that blinks)
    pub const LED_RED: u8 = 13;
    /// Increment button, active low
    pub const BUTTON_A: u8 = 5;
    /// Decrement button, active low
    pub const BUTTON_B: u8 = 6;
    /// WS2812 data line
    pub const MATRIX_DATA: u8 = 7;
}
