#![no_main]

use libfuzzer_sys::fuzz_target;
use lattice_params::{ConsensusConfig, Millis, Overrides, Registry, Slot, SlotClock, Test};

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let start = u64::from_le_bytes(data[0..8].try_into().expect("8 bytes"));
    let period = u64::from_le_bytes(data[8..16].try_into().expect("8 bytes"));
    let thread = data[16];

    let start = Millis::from_millis(start);
    let Ok(r) = Registry::<Test>::as_test_configuration_at(start, &Overrides::new()) else {
        return;
    };
    let clock = SlotClock::new(&ConsensusConfig::from(&r)).expect("valid registry yields a clock");
    let slot = Slot::new(period, thread);

    // Never panics; a representable timestamp maps back to its slot.
    if let Ok(ts) = clock.slot_timestamp(slot) {
        assert_eq!(clock.latest_slot_at(ts), Some(slot));
    }
    let _ = clock.next_slot(slot);
});
