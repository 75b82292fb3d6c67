//! Board-agnostic core of the digit matrix firmware
//!
//! Shows one decimal digit on a 5x5 WS2812 matrix. Two buttons step the
//! digit up and down while a status LED blinks as a heartbeat:
//!
//! - Glyph table and colour packing
//! - Frame renderer over a blocking pixel transport
//! - Debounced button handling on shared atomic state
//! - Heartbeat ticker driven by a periodic alarm
//! - Display loop polling the dirty flag
//!
//! Nothing here touches RP2040 registers; the firmware binary supplies
//! the transport, the alarm and the pins.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod digit;
pub mod display;
pub mod glyph;
pub mod input;
pub mod render;
pub mod state;
pub mod ticker;

pub use digit::{Digit, InvalidDigit};
pub use display::DisplayLoop;
pub use input::{Button, InputHandler, PressOutcome};
pub use render::PixelTransport;
pub use state::SharedState;
pub use ticker::{Heartbeat, Ticker};
