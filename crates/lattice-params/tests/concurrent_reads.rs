use std::sync::Arc;
use std::thread;

use lattice_params::{
    ConsensusConfig, NetworkConfig, Overrides, ParamName, Production, RegistryGate, SlotClock,
};

#[test]
fn readers_on_many_threads_see_one_registry() {
    let gate: RegistryGate<Production> = RegistryGate::new();
    let registry = gate
        .initialize(&Overrides::new().set("message_timeout", 6_000i64))
        .expect("initialize");
    let expected: Vec<_> = registry.entries().collect();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                let seen = gate.get().expect("initialized before spawn");
                assert!(Arc::ptr_eq(&seen, &registry));
                for (name, value) in &expected {
                    assert_eq!(&seen.get(name.as_str()).expect("registered"), value);
                }
                assert_eq!(
                    NetworkConfig::from(seen.as_ref()).message_timeout.as_millis(),
                    6_000
                );
            });
        }
    });
}

#[test]
fn racing_initializers_publish_exactly_once() {
    let gate: RegistryGate<Production> = RegistryGate::new();
    let winners = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| gate.initialize(&Overrides::new()).is_ok()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("join"))
            .filter(|won| *won)
            .count()
    });
    assert_eq!(winners, 1);
    assert!(gate.is_initialized());
}

#[test]
fn views_move_into_worker_threads() {
    let gate: RegistryGate<Production> = RegistryGate::new();
    let registry = gate.initialize(&Overrides::new()).expect("initialize");
    let consensus = ConsensusConfig::from(registry.as_ref());

    let handle = thread::spawn(move || {
        let clock = SlotClock::new(&consensus).expect("clock");
        clock.cycle_of(lattice_params::Slot::new(256, 0))
    });
    assert_eq!(handle.join().expect("join"), 2);
    assert_eq!(
        registry.value(ParamName::lookup("periods_per_cycle").expect("registered")),
        lattice_params::ParamValue::Integer(128)
    );
}
