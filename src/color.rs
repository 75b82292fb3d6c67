//! WS2812 colour words

/// 8-bit per channel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack in the GRB order the LEDs expect: `g << 16 | r << 8 | b`
    pub const fn grb(self) -> u32 {
        ((self.g as u32) << 16) | ((self.r as u32) << 8) | self.b as u32
    }

    /// Word handed to the transport.
    ///
    /// The state machine shifts out of the top of a 32-bit register with a
    /// 24-bit autopull threshold, so the colour sits in the upper three
    /// bytes. The low byte is padding.
    pub const fn transport_word(self) -> u32 {
        self.grb() << 8
    }
}
