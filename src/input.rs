//! Debounced button input
//!
//! Both buttons arrive through one falling-edge interrupt. The decision of
//! whether a press counts is a pure function of the button, the time, the
//! stored timestamps and the current digit, so it can be exercised without
//! hardware. [`InputHandler`] applies the decision to [`SharedState`].

use crate::config::DEBOUNCE_MS;
use crate::digit::Digit;
use crate::state::SharedState;

/// Front-panel buttons, both wired active low
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Button {
    /// Counts up
    A,
    /// Counts down
    B,
}

/// What an accepted press does to the digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Action {
    Increment,
    Decrement,
}

impl Button {
    pub const fn action(self) -> Action {
        match self {
            Button::A => Action::Increment,
            Button::B => Action::Decrement,
        }
    }

    /// Slot in the per-button timestamp array
    pub const fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
        }
    }
}

impl Action {
    pub const fn apply(self, digit: Digit) -> Digit {
        match self {
            Action::Increment => digit.next(),
            Action::Decrement => digit.prev(),
        }
    }
}

/// Result of one falling edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum PressOutcome {
    /// Press counted; the display must be redrawn
    Accepted {
        digit: Digit,
        last_press_ms: [u32; 2],
    },
    /// Inside the debounce window, nothing changes
    Rejected,
}

/// Decide whether a press counts and what it leaves behind.
///
/// A press is accepted when at least [`DEBOUNCE_MS`] have passed since the
/// last accepted press of the same button. The subtraction wraps, so the
/// 32-bit millisecond counter rolling over does not lock the button out.
pub fn debounce(
    button: Button,
    now_ms: u32,
    last_press_ms: [u32; 2],
    digit: Digit,
) -> PressOutcome {
    let slot = button.index();
    if now_ms.wrapping_sub(last_press_ms[slot]) < DEBOUNCE_MS {
        return PressOutcome::Rejected;
    }

    let mut last_press_ms = last_press_ms;
    last_press_ms[slot] = now_ms;
    PressOutcome::Accepted {
        digit: button.action().apply(digit),
        last_press_ms,
    }
}

/// Interrupt-side half of the shared state
pub struct InputHandler<'a> {
    state: &'a SharedState,
}

impl<'a> InputHandler<'a> {
    pub fn new(state: &'a SharedState) -> Self {
        Self { state }
    }

    /// Handle a falling edge on `button` seen at `now_ms`.
    ///
    /// Must only be called from one context at a time (the GPIO bank
    /// interrupt); it does a plain load then store on the digit.
    pub fn on_falling_edge(&mut self, button: Button, now_ms: u32) -> PressOutcome {
        let outcome = debounce(button, now_ms, self.state.last_presses_ms(), self.state.digit());

        if let PressOutcome::Accepted { digit, last_press_ms } = outcome {
            self.state.set_last_press_ms(button, last_press_ms[button.index()]);
            self.state.set_digit(digit);
            // Flag last so the loop never sees it before the new digit
            self.state.mark_dirty();
        }

        outcome
    }
}
