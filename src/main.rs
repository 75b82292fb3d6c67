#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use defmt_rtt as _;
#[cfg(target_os = "none")]
use panic_probe as _;

#[cfg(target_os = "none")]
mod ws2812;

#[cfg(target_os = "none")]
use digit_matrix::SharedState;

/// Digit, dirty flag and debounce timestamps, shared by the button
/// interrupt and the display loop
#[cfg(target_os = "none")]
static STATE: SharedState = SharedState::new();

#[cfg(target_os = "none")]
#[rtic::app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use super::*;
    use digit_matrix::config::{self, pins as pin_map};
    use digit_matrix::ticker::Instant;
    use digit_matrix::{Button, DisplayLoop, Heartbeat, InputHandler, PressOutcome, Ticker};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::ExtU32,
        gpio::{
            bank0::{Gpio13, Gpio5, Gpio6},
            FunctionSio, Interrupt, Pin, PullDown, PullUp, SioInput, SioOutput,
        },
        pio::PIOExt,
        sio::Sio,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
    };

    use crate::ws2812::Ws2812;

    type ButtonA = Pin<Gpio5, FunctionSio<SioInput>, PullUp>;
    type ButtonB = Pin<Gpio6, FunctionSio<SioInput>, PullUp>;
    type StatusLed = Pin<Gpio13, FunctionSio<SioOutput>, PullDown>;

    /// Timer alarm 0 as the heartbeat's periodic source
    pub struct BlinkAlarm(Alarm0);

    impl Ticker for BlinkAlarm {
        fn acknowledge(&mut self) {
            self.0.clear_interrupt();
        }

        fn arm(&mut self, deadline: Instant) {
            // Already in the past: the tick was held off by a full period
            if self.0.schedule_at(deadline).is_err() {
                self.0.schedule(1u32.micros()).ok();
            }
        }
    }

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        button_a: ButtonA,
        button_b: ButtonB,
        input: InputHandler<'static>,
        clock: Timer,
        heartbeat: Heartbeat<StatusLed>,
        alarm: BlinkAlarm,
        display: DisplayLoop<'static, Ws2812>,
        delay: cortex_m::delay::Delay,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = defmt::unwrap!(init_clocks_and_plls(
            config::XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok());

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        // Only red (gpio13) blinks; green (gpio11) and blue (gpio12) are held off
        let led = pins.gpio13.into_push_pull_output();
        let _ = pins.gpio11.into_push_pull_output();
        let _ = pins.gpio12.into_push_pull_output();

        let button_a = pins.gpio5.into_pull_up_input();
        let button_b = pins.gpio6.into_pull_up_input();
        button_a.set_interrupt_enabled(Interrupt::EdgeLow, true);
        button_b.set_interrupt_enabled(Interrupt::EdgeLow, true);

        let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
        let matrix = Ws2812::new(
            pins.gpio7.into_function(),
            &mut pio,
            sm0,
            clocks.system_clock.freq(),
        );

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = BlinkAlarm(defmt::unwrap!(timer.alarm_0()));
        alarm.0.enable_interrupt();

        let mut heartbeat = Heartbeat::new(led);
        heartbeat.start(&mut alarm, timer.get_counter());

        let delay = cortex_m::delay::Delay::new(ctx.core.SYST, clocks.system_clock.freq().to_Hz());

        defmt::info!(
            "digit-matrix: buttons {}/{}, matrix on gpio{}, status led gpio{}",
            pin_map::BUTTON_A,
            pin_map::BUTTON_B,
            pin_map::MATRIX_DATA,
            pin_map::LED_RED,
        );
        defmt::info!(
            "debounce {} ms, blink {} ms, poll {} ms",
            config::DEBOUNCE_MS,
            config::BLINK_PERIOD_MS,
            config::POLL_INTERVAL_MS,
        );

        (
            Shared {},
            Local {
                button_a,
                button_b,
                input: InputHandler::new(&STATE),
                clock: timer,
                heartbeat,
                alarm,
                display: DisplayLoop::new(&STATE, matrix),
                delay,
            },
            init::Monotonics(),
        )
    }

    /// Redraws on request; the only place that waits on the matrix
    #[idle(local = [display, delay])]
    fn idle(ctx: idle::Context) -> ! {
        ctx.local.display.run(ctx.local.delay)
    }

    // Hardware Task: both buttons share the bank 0 GPIO interrupt
    #[task(binds = IO_IRQ_BANK0, priority = 1, local = [button_a, button_b, input, clock])]
    fn button_press(ctx: button_press::Context) {
        let now_ms = ctx.local.clock.get_counter().duration_since_epoch().to_millis() as u32;

        if ctx.local.button_a.interrupt_status(Interrupt::EdgeLow) {
            ctx.local.button_a.clear_interrupt(Interrupt::EdgeLow);
            press(ctx.local.input, Button::A, now_ms);
        }
        if ctx.local.button_b.interrupt_status(Interrupt::EdgeLow) {
            ctx.local.button_b.clear_interrupt(Interrupt::EdgeLow);
            press(ctx.local.input, Button::B, now_ms);
        }
    }

    // Hardware Task: heartbeat alarm
    #[task(binds = TIMER_IRQ_0, priority = 1, local = [heartbeat, alarm])]
    fn blink(ctx: blink::Context) {
        ctx.local.heartbeat.on_tick(ctx.local.alarm).ok();
    }

    fn press(input: &mut InputHandler<'static>, button: Button, now_ms: u32) {
        if let PressOutcome::Accepted { digit, .. } = input.on_falling_edge(button, now_ms) {
            defmt::debug!("button {}: digit {}", button, digit);
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    // Host builds only carry the library; flash the thumbv6m-none-eabi build
}
