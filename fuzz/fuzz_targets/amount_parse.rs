#![no_main]

use libfuzzer_sys::fuzz_target;
use lattice_params::Amount;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(a) = s.parse::<Amount>() else {
        return;
    };
    // Display is canonical: reparsing it is a fixed point.
    let shown = a.to_string();
    let again: Amount = shown.parse().expect("display output parses");
    assert_eq!(a, again);
    assert_eq!(shown, again.to_string());
});
