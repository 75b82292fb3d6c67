//! State shared between the button interrupt and the display loop
//!
//! Every field is a single atomic word touched only with `load` and
//! `store`: the Cortex-M0+ has no atomic read-modify-write, and no update
//! here spans more than one field. All accesses are `SeqCst` so the loop
//! can never see the dirty flag ahead of the digit that caused it.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::digit::Digit;
use crate::input::Button;

pub struct SharedState {
    digit: AtomicU8,
    dirty: AtomicBool,
    /// Last accepted press per button, ms since boot (wrapping)
    last_press_ms: [AtomicU32; 2],
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    /// Digit 0 with a redraw already requested
    pub const fn new() -> Self {
        Self {
            digit: AtomicU8::new(0),
            dirty: AtomicBool::new(true),
            last_press_ms: [AtomicU32::new(0), AtomicU32::new(0)],
        }
    }

    pub fn digit(&self) -> Digit {
        // Only `set_digit` writes here, so the value is always in range
        Digit::new(self.digit.load(Ordering::SeqCst)).unwrap_or_default()
    }

    pub fn set_digit(&self, digit: Digit) {
        self.digit.store(digit.get(), Ordering::SeqCst);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Ask the display loop for a redraw
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub fn last_press_ms(&self, button: Button) -> u32 {
        self.last_press_ms[button.index()].load(Ordering::SeqCst)
    }

    pub fn set_last_press_ms(&self, button: Button, now_ms: u32) {
        self.last_press_ms[button.index()].store(now_ms, Ordering::SeqCst);
    }

    /// Both debounce timestamps, indexed by [`Button::index`]
    pub fn last_presses_ms(&self) -> [u32; 2] {
        [
            self.last_press_ms(Button::A),
            self.last_press_ms(Button::B),
        ]
    }
}
