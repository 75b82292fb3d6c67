//! Display loop
//!
//! Runs in thread mode at the lowest priority. It polls the dirty flag
//! set by the button interrupt and redraws when asked, sleeping between
//! polls. The only blocking call in the firmware, waiting on the LED
//! transport, happens here.
//!
//! The dirty flag is cleared before the frame is drawn, not after, on
//! purpose: a press that lands while the frame is on the wire re-arms the
//! flag and gets a redraw of its own instead of being swallowed.

use embedded_hal::blocking::delay::DelayMs;

use crate::config::POLL_INTERVAL_MS;
use crate::digit::Digit;
use crate::render::{render, PixelTransport};
use crate::state::SharedState;

pub struct DisplayLoop<'a, T> {
    state: &'a SharedState,
    transport: T,
}

impl<'a, T: PixelTransport> DisplayLoop<'a, T> {
    pub fn new(state: &'a SharedState, transport: T) -> Self {
        Self { state, transport }
    }

    /// Draw the current digit without waiting for a request.
    ///
    /// Also consumes the redraw request raised at power-up so the first
    /// frame goes out once.
    pub fn start(&mut self) -> Digit {
        self.state.clear_dirty();
        self.draw()
    }

    /// Redraw if a request is pending, returning the digit sent.
    pub fn poll(&mut self) -> Option<Digit> {
        if !self.state.is_dirty() {
            return None;
        }
        self.state.clear_dirty();
        Some(self.draw())
    }

    /// Never returns
    pub fn run<D: DelayMs<u32>>(&mut self, delay: &mut D) -> ! {
        self.start();
        loop {
            self.poll();
            delay.delay_ms(POLL_INTERVAL_MS);
        }
    }

    fn draw(&mut self) -> Digit {
        let digit = self.state.digit();
        render(&mut self.transport, digit);
        #[cfg(target_os = "none")]
        defmt::debug!("frame: digit {}", digit);
        digit
    }
}

#[cfg(test)]
impl<T> DisplayLoop<'_, T> {
    fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Button, InputHandler};
    use crate::render::frame_for;
    use crate::render::tests::RecordingTransport;

    fn d(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    #[test]
    fn test_startup_renders_zero_once() {
        let state = SharedState::new();
        let mut display = DisplayLoop::new(&state, RecordingTransport::default());

        assert_eq!(display.start(), Digit::ZERO);
        assert_eq!(display.poll(), None);

        let frames = display.transport().frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0], &frame_for(Digit::ZERO)[..]);
    }

    #[test]
    fn test_poll_idle_sends_nothing() {
        let state = SharedState::new();
        state.clear_dirty();
        let mut display = DisplayLoop::new(&state, RecordingTransport::default());

        assert_eq!(display.poll(), None);
        assert!(display.transport().words.is_empty());
    }

    #[test]
    fn test_press_then_redraw() {
        let state = SharedState::new();
        let mut display = DisplayLoop::new(&state, RecordingTransport::default());
        let mut buttons = InputHandler::new(&state);
        display.start();

        // A: 0 -> 1
        buttons.on_falling_edge(Button::A, 1_000);
        assert_eq!(state.digit(), d(1));
        assert!(state.is_dirty());
        assert_eq!(display.poll(), Some(d(1)));
        assert!(!state.is_dirty());

        // B twice inside the window: 1 -> 0 once
        buttons.on_falling_edge(Button::B, 2_000);
        buttons.on_falling_edge(Button::B, 2_100);
        assert_eq!(state.digit(), d(0));
        assert_eq!(display.poll(), Some(d(0)));
        assert_eq!(display.poll(), None);

        let frames = display.transport().frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1], &frame_for(d(1))[..]);
        assert_eq!(frames[2], &frame_for(d(0))[..]);
    }

    #[test]
    fn test_request_during_render_is_kept() {
        struct Interrupting<'s> {
            state: &'s SharedState,
            words: usize,
        }

        impl PixelTransport for Interrupting<'_> {
            fn put_blocking(&mut self, _word: u32) {
                self.words += 1;
                // Button edge arrives mid-frame
                if self.words == 10 {
                    InputHandler::new(self.state).on_falling_edge(Button::A, 5_000);
                }
            }
        }

        let state = SharedState::new();
        let mut display = DisplayLoop::new(&state, Interrupting { state: &state, words: 0 });

        // Frame in flight still shows the digit read before the press
        assert_eq!(display.poll(), Some(d(0)));
        assert!(state.is_dirty());
        assert_eq!(display.poll(), Some(d(1)));
        assert_eq!(display.transport().words, 50);
    }
}
