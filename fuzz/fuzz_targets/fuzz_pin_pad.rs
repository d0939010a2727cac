#![no_main]

use infotainment_core::{Key, PinOutcome, PinPad, PIN_LENGTH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut pad = PinPad::default();

    for &byte in data {
        // Unknown characters must be refused, never panic
        let Ok(key) = Key::from_char(char::from(byte)) else {
            continue;
        };

        let outcome = pad.press(key);
        assert!(pad.len() <= PIN_LENGTH);
        assert_eq!(pad.mask().chars().count(), pad.len());

        if outcome != PinOutcome::InProgress {
            assert!(pad.is_empty());
        }
    }
});
