use lattice_params::{
    Category, ConfigurationError, Millis, Overrides, ProtocolParam, Production, Registry, Test,
};

fn production() -> Registry<Production> {
    Registry::<Production>::as_production_configuration(&Overrides::new()).expect("production")
}

#[test]
fn test_paths_keep_consensus_constants() {
    let prod = production();
    let node_overrides = Overrides::new()
        .set("max_dependency_blocks", 64i64)
        .set("message_timeout", 2_500i64);

    let mut registries = vec![
        Registry::<Test>::as_test_configuration(&Overrides::new()).expect("now"),
        Registry::<Test>::as_test_configuration(&node_overrides).expect("now, overridden"),
    ];
    for start in [0, 1_700_000_000_000, u64::MAX / 2] {
        registries.push(
            Registry::<Test>::as_test_configuration_at(Millis::from_millis(start), &node_overrides)
                .expect("pinned start"),
        );
    }

    for test in &registries {
        for param in ProtocolParam::ALL {
            if param.category() == Category::DerivedTestOverride {
                continue;
            }
            assert_eq!(test.value(param), prod.value(param), "{}", param.as_str());
        }
    }
}

#[test]
fn test_path_rejects_consensus_overrides() {
    for key in ["THREAD_COUNT", "thread_count", "t0", "PERIODS_PER_CYCLE"] {
        let err = Registry::<Test>::as_test_configuration_at(
            Millis::from_millis(0),
            &Overrides::new().set(key, 16i64),
        )
        .unwrap_err();
        assert!(
            matches!(err, ConfigurationError::ProtocolFixed { .. }),
            "{key}: {err}"
        );
    }
}
