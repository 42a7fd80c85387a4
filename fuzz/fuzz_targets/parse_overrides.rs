#![no_main]

use libfuzzer_sys::fuzz_target;
use lattice_params::{ConfigurationError, Overrides, Production, Registry};

// Arbitrary configuration text must either be rejected with an error or
// produce a registry that passes its own consistency check.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(overrides) = Overrides::from_toml(text) else {
        return;
    };
    match Registry::<Production>::as_production_configuration(&overrides) {
        Ok(r) => {
            r.validate_consistency().expect("constructed registry is consistent");
            let defaults = Registry::<Production>::as_production_configuration(&Overrides::new())
                .expect("defaults");
            assert_eq!(r.protocol(), defaults.protocol());
        }
        Err(ConfigurationError::AlreadyInitialized) => panic!("no gate involved"),
        Err(_) => {}
    }
});
