#![no_main]

use std::time::{Duration, Instant};

use arbitrary::Arbitrary;
use infotainment_core::{BlinkController, Indicator};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Left,
    Right,
    StopLeft,
    StopRight,
    Hazard,
    Wait(u16),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut now = Instant::now();
    let mut blink = BlinkController::new();

    for op in ops {
        match op {
            Op::Left => blink.start_left(now),
            Op::Right => blink.start_right(now),
            Op::StopLeft => blink.stop_left(),
            Op::StopRight => blink.stop_right(),
            Op::Hazard => {
                blink.toggle_hazard(now);
            }
            Op::Wait(ms) => {
                now += Duration::from_millis(u64::from(ms));
                blink.poll(now);
            }
        }

        if !blink.hazard_active() {
            assert!(!(blink.is_active(Indicator::Left) && blink.is_active(Indicator::Right)));
        }
        for indicator in Indicator::ALL {
            let state = blink.state(indicator);
            assert!(state.is_active() || !state.is_lit());
        }
    }
});
