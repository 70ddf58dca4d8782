//! Fuzz target: `GestureFsm::update`
//!
//! Each pair of input bytes is one poll: the first byte's low bit is the
//! pin level, the second is the time step in ms.  The recogniser must never
//! panic, never hold a click count in the long-press states and never
//! overflow its notification outbox.
//!
//! cargo fuzz run fuzz_gesture_inputs

#![no_main]

use gesture_button::config::GestureConfig;
use gesture_button::events::MAX_NOTIFICATIONS;
use gesture_button::fsm::{GestureFsm, StateId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let config = GestureConfig {
        multi_click: flags & 1 != 0,
        ..GestureConfig::default()
    };
    let mut fsm = GestureFsm::new("fuzz", config);

    // Start near the wrap so long inputs cross it.
    let mut now = u32::MAX - u32::from(flags) * 64;
    for pair in rest.chunks_exact(2) {
        now = now.wrapping_add(u32::from(pair[1]));
        let events = fsm.update(pair[0] & 1 != 0, now);
        assert!(events.len() <= MAX_NOTIFICATIONS);

        if matches!(fsm.state(), StateId::LongPress | StateId::VeryLongPress) {
            assert_eq!(fsm.click_count(), 0, "clicks pending in a long state");
        }

        // A second poll at the same instant has no elapsed time to act on.
        let _ = fsm.tick(now);
    }
});
