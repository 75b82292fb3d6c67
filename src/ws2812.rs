//! WS2812 transmitter on PIO0 state machine 0
//!
//! Each bit takes ten PIO cycles: a 3-cycle low tail, a 2-cycle high
//! start, then 5 cycles that stay high for a one or drop low for a zero.
//! The state machine pulls 24 bits per word from the top of the FIFO entry.

use digit_matrix::config::{pins, WS2812_FREQ_HZ};
use digit_matrix::PixelTransport;
use rp_pico::hal::fugit::HertzU32;
use rp_pico::hal::gpio::{bank0::Gpio7, FunctionPio0, Pin, PullDown};
use rp_pico::hal::pac::PIO0;
use rp_pico::hal::pio::{
    Buffers, PIOBuilder, PinDir, Running, ShiftDirection, StateMachine, Tx, UninitStateMachine,
    PIO, SM0,
};

/// PIO cycles per transmitted bit
const CYCLES_PER_BIT: u32 = 10;

pub type DataPin = Pin<Gpio7, FunctionPio0, PullDown>;

pub struct Ws2812 {
    tx: Tx<(PIO0, SM0)>,
    _sm: StateMachine<(PIO0, SM0), Running>,
    _pin: DataPin,
}

impl Ws2812 {
    /// Load the program and start the state machine.
    ///
    /// # Panics
    /// If the program does not fit in PIO0 or the system clock cannot be
    /// divided down to the bit rate. The matrix is useless without either.
    pub fn new(
        pin: DataPin,
        pio: &mut PIO<PIO0>,
        sm: UninitStateMachine<(PIO0, SM0)>,
        sys_clk: HertzU32,
    ) -> Self {
        let program = pio_proc::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]",
            "    jmp !x do_zero side 1 [1]",
            "do_one:",
            "    jmp bitloop    side 1 [4]",
            "do_zero:",
            "    nop            side 0 [4]",
            ".wrap",
        );
        let installed = defmt::unwrap!(pio.install(&program.program).ok());

        let (int, frac) = clock_divisor(sys_clk.to_Hz());
        let (mut sm, _, tx) = PIOBuilder::from_installed_program(installed)
            .buffers(Buffers::OnlyTx)
            .side_set_pin_base(pins::MATRIX_DATA)
            .out_shift_direction(ShiftDirection::Left)
            .autopull(true)
            .pull_threshold(24)
            .clock_divisor_fixed_point(int, frac)
            .build(sm);
        sm.set_pindirs([(pins::MATRIX_DATA, PinDir::Output)]);

        defmt::debug!("ws2812: divisor {}+{}/256", int, frac);

        Self {
            tx,
            _sm: sm.start(),
            _pin: pin,
        }
    }
}

impl PixelTransport for Ws2812 {
    fn put_blocking(&mut self, word: u32) {
        while !self.tx.write(word) {
            cortex_m::asm::nop();
        }
    }
}

/// 16.8 fixed-point divider from `sys_hz` down to the bit clock
fn clock_divisor(sys_hz: u32) -> (u16, u8) {
    let bit_hz = WS2812_FREQ_HZ * CYCLES_PER_BIT;
    let int = sys_hz / bit_hz;
    let frac = (sys_hz % bit_hz) * 256 / bit_hz;
    assert!((1..=0xFFFF).contains(&int), "system clock out of range for ws2812");
    (int as u16, frac as u8)
}
