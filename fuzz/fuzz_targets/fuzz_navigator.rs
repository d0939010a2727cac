#![no_main]

use infotainment_core::{NavEvent, Navigator, Screen};
use libfuzzer_sys::fuzz_target;

const EVENTS: [NavEvent; 8] = [
    NavEvent::SwipeUp,
    NavEvent::SwipeLeftToRight,
    NavEvent::PinAccepted,
    NavEvent::OpenControlCenter,
    NavEvent::OpenNavigation,
    NavEvent::OpenModelViewer,
    NavEvent::Back,
    NavEvent::Lock,
];

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let start = Screen::ALL[usize::from(first) % Screen::ALL.len()];
    let mut nav = Navigator::new(start);

    for &byte in rest {
        let event = EVENTS[usize::from(byte) % EVENTS.len()];
        let before = nav.current();
        match nav.handle(event) {
            Some(screen) => assert_eq!(nav.current(), screen),
            None => assert_eq!(nav.current(), before),
        }
        assert!(nav.depth() >= 1);
        assert_eq!(nav.breadcrumb().len(), nav.depth());
    }
});
