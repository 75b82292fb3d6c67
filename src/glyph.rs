//! 5x5 digit glyphs
//!
//! Each glyph lists its 25 pixels in chain order: entry `i` drives the
//! `i`-th LED on the data line. The board's LEDs are wired as a serpentine
//! when viewed from the front:
//!
//! ```text
//!  1  2  3  4  5
//! 10  9  8  7  6
//! 11 12 13 14 15
//! 20 19 18 17 16
//! 21 22 23 24 25
//! ```
//!
//! The table is indexed straight through without remapping; the pixel art
//! below is the exact pattern the matrix was tuned against.

use crate::config::PIXEL_COUNT;
use crate::digit::Digit;

/// On/off mask for one digit, in chain order
pub type Glyph = [bool; PIXEL_COUNT];

const X: bool = true;
const O: bool = false;

#[rustfmt::skip]
pub static GLYPHS: [Glyph; 10] = [
    // 0
    [X, X, X, X, X,
     X, O, O, O, X,
     X, O, O, O, X,
     X, O, O, O, X,
     X, X, X, X, X],
    // 1
    [O, X, X, X, O,
     O, O, X, O, O,
     O, O, X, O, O,
     O, O, X, O, O,
     O, O, X, X, O],
    // 2
    [X, X, X, X, X,
     X, O, O, O, O,
     X, X, X, X, X,
     O, O, O, O, X,
     X, X, X, X, X],
    // 3
    [X, X, X, X, X,
     O, O, O, O, X,
     X, X, X, X, X,
     O, O, O, O, X,
     X, X, X, X, X],
    // 4
    [O, X, O, O, O,
     O, O, O, X, O,
     X, X, X, X, X,
     O, X, O, X, O,
     O, X, X, O, O],
    // 5
    [X, X, X, X, X,
     O, O, O, O, X,
     X, X, X, X, X,
     X, O, O, O, O,
     X, X, X, X, X],
    // 6
    [X, X, X, X, X,
     X, O, O, O, X,
     X, X, X, X, X,
     X, O, O, O, O,
     X, X, X, X, X],
    // 7
    [O, O, O, O, X,
     O, X, O, O, O,
     O, O, X, O, O,
     O, O, O, X, O,
     X, X, X, X, X],
    // 8
    [X, X, X, X, X,
     X, O, O, O, X,
     X, X, X, X, X,
     X, O, O, O, X,
     X, X, X, X, X],
    // 9
    [X, X, X, X, X,
     O, O, O, O, X,
     X, X, X, X, X,
     X, O, O, O, X,
     X, X, X, X, X],
];

/// Glyph for a digit
pub fn glyph_for(digit: Digit) -> &'static Glyph {
    let index = digit.get() as usize;
    debug_assert!(index < GLYPHS.len(), "glyph index out of range");
    &GLYPHS[index]
}
