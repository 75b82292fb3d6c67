//! Heartbeat blink on a periodic alarm
//!
//! The alarm is re-armed relative to the previous deadline rather than to
//! the moment the interrupt ran, so the period is measured start to start
//! and interrupt latency never accumulates.

use embedded_hal::digital::v2::{OutputPin, PinState};
use fugit::{MicrosDurationU64, TimerInstantU64};

use crate::config::BLINK_PERIOD_MS;

/// Instant on a 1 MHz timer, the RP2040 timer's resolution
pub type Instant = TimerInstantU64<1_000_000>;

/// A one-shot hardware alarm that fires an interrupt at a deadline
pub trait Ticker {
    /// Clear the pending interrupt
    fn acknowledge(&mut self);

    /// Fire next at `deadline`
    fn arm(&mut self, deadline: Instant);
}

/// Toggles a status LED every period for the life of the firmware
pub struct Heartbeat<P> {
    led: P,
    lit: bool,
    period: MicrosDurationU64,
    next: Instant,
}

impl<P: OutputPin> Heartbeat<P> {
    /// Blink at [`BLINK_PERIOD_MS`]
    pub fn new(led: P) -> Self {
        Self {
            led,
            lit: false,
            period: MicrosDurationU64::millis(BLINK_PERIOD_MS as u64),
            next: Instant::from_ticks(0),
        }
    }

    /// Arm the first tick one period after `now`
    pub fn start<T: Ticker>(&mut self, ticker: &mut T, now: Instant) {
        self.next = now + self.period;
        ticker.arm(self.next);
    }

    /// Alarm interrupt body: re-arm, then flip the LED
    pub fn on_tick<T: Ticker>(&mut self, ticker: &mut T) -> Result<(), P::Error> {
        ticker.acknowledge();
        self.next += self.period;
        ticker.arm(self.next);

        self.lit = !self.lit;
        self.led.set_state(PinState::from(self.lit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction};

    /// Simulated alarm: remembers its deadline and counts acknowledgements
    #[derive(Default)]
    struct FakeAlarm {
        deadline: Option<Instant>,
        acks: usize,
    }

    impl Ticker for FakeAlarm {
        fn acknowledge(&mut self) {
            self.acks += 1;
        }

        fn arm(&mut self, deadline: Instant) {
            self.deadline = Some(deadline);
        }
    }

    /// Fire every pending deadline before `until`, returning how many ran
    fn run_until<P: OutputPin>(
        heartbeat: &mut Heartbeat<P>,
        alarm: &mut FakeAlarm,
        until: Instant,
    ) -> usize {
        let mut fired = 0;
        while let Some(deadline) = alarm.deadline {
            if deadline >= until {
                break;
            }
            heartbeat.on_tick(alarm).ok();
            fired += 1;
        }
        fired
    }

    fn at_ms(ms: u64) -> Instant {
        Instant::from_ticks(ms * 1_000)
    }

    #[test]
    fn test_led_alternates() {
        let expectations = [
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ];
        let mut heartbeat = Heartbeat::new(PinMock::new(&expectations));
        let mut alarm = FakeAlarm::default();

        heartbeat.start(&mut alarm, at_ms(0));
        for _ in 0..3 {
            heartbeat.on_tick(&mut alarm).unwrap();
        }

        assert!(heartbeat.lit);
        assert_eq!(alarm.acks, 3);
        heartbeat.led.done();
    }

    #[test]
    fn test_deadlines_do_not_drift() {
        let mut heartbeat = Heartbeat::new(PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]));
        let mut alarm = FakeAlarm::default();

        heartbeat.start(&mut alarm, at_ms(5));
        assert_eq!(alarm.deadline, Some(at_ms(105)));

        heartbeat.on_tick(&mut alarm).unwrap();
        heartbeat.on_tick(&mut alarm).unwrap();
        assert_eq!(alarm.deadline, Some(at_ms(305)));
        assert_eq!(heartbeat.next, at_ms(305));
        heartbeat.led.done();
    }

    #[test]
    fn test_ten_toggles_per_second() {
        let toggles: Vec<Transaction> = (0..30)
            .map(|i| Transaction::set(if i % 2 == 0 { State::High } else { State::Low }))
            .collect();
        let mut heartbeat = Heartbeat::new(PinMock::new(&toggles));
        let mut alarm = FakeAlarm::default();
        heartbeat.start(&mut alarm, at_ms(0));

        // Deadlines land at 100, 200, ... so each 1 s window holds ten
        assert_eq!(run_until(&mut heartbeat, &mut alarm, at_ms(1_001)), 10);
        assert_eq!(run_until(&mut heartbeat, &mut alarm, at_ms(2_001)), 10);
        assert_eq!(run_until(&mut heartbeat, &mut alarm, at_ms(3_001)), 10);
        heartbeat.led.done();
    }
}
