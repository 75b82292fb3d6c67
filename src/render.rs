//! Frame renderer
//!
//! Turns a digit into 25 colour words and pushes them down the LED chain.
//! Every call resends the whole frame; nothing is cached between frames.

use crate::config::{OFF_COLOR, ON_COLOR, PIXEL_COUNT};
use crate::digit::Digit;
use crate::glyph::glyph_for;

/// One transport word per pixel, in chain order
pub type Frame = [u32; PIXEL_COUNT];

/// Sink for pixel words on the single-wire LED chain
pub trait PixelTransport {
    /// Queue one word, blocking until the hardware accepts it.
    ///
    /// The word is a GRB colour already shifted into the upper 24 bits
    /// (see [`crate::color::Rgb::transport_word`]).
    fn put_blocking(&mut self, word: u32);
}

/// Build the frame for a digit
pub fn frame_for(digit: Digit) -> Frame {
    let on = ON_COLOR.transport_word();
    let off = OFF_COLOR.transport_word();

    let mut frame = [off; PIXEL_COUNT];
    for (word, &lit) in frame.iter_mut().zip(glyph_for(digit).iter()) {
        if lit {
            *word = on;
        }
    }
    frame
}

/// Send the frame for `digit`, one word at a time
pub fn render<T: PixelTransport + ?Sized>(transport: &mut T, digit: Digit) {
    for word in frame_for(digit) {
        transport.put_blocking(word);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::glyph::GLYPHS;

    /// Records every word it is handed
    #[derive(Default)]
    pub(crate) struct RecordingTransport {
        pub words: Vec<u32>,
    }

    impl RecordingTransport {
        /// Completed frames so far
        pub fn frames(&self) -> Vec<&[u32]> {
            self.words.chunks(PIXEL_COUNT).collect()
        }
    }

    impl PixelTransport for RecordingTransport {
        fn put_blocking(&mut self, word: u32) {
            self.words.push(word);
        }
    }

    #[test]
    fn test_frame_follows_glyph() {
        for d in 0..=9u8 {
            let frame = frame_for(Digit::new(d).unwrap());
            for (i, &word) in frame.iter().enumerate() {
                let expected = if GLYPHS[d as usize][i] { 0x0A0A_0A00 } else { 0 };
                assert_eq!(word, expected, "digit {d} pixel {i}");
            }
        }
    }

    #[test]
    fn test_render_sends_25_words_in_order() {
        let mut transport = RecordingTransport::default();
        let one = Digit::new(1).unwrap();
        render(&mut transport, one);

        assert_eq!(transport.words.len(), PIXEL_COUNT);
        assert_eq!(transport.words.as_slice(), &frame_for(one)[..]);
        // Top row of the "1" is .###.
        assert_eq!(&transport.words[..5], &[0, 0x0A0A_0A00, 0x0A0A_0A00, 0x0A0A_0A00, 0]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut transport = RecordingTransport::default();
        let seven = Digit::new(7).unwrap();
        render(&mut transport, seven);
        render(&mut transport, seven);

        let frames = transport.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frames[1]);
    }
}
