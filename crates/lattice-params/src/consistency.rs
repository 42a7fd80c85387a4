use std::collections::HashSet;

use crate::error::{ConsistencyError, Violation};
use crate::name::{NodeParam, ParamName, ProtocolParam};
use crate::registry::ParameterSet;
use crate::value::HexBytes;

use NodeParam as N;
use ProtocolParam as P;

impl ParameterSet {
    /// Checks every cross-parameter invariant and reports all violations.
    pub fn validate_consistency(&self) -> Result<(), ConsistencyError> {
        let mut violations = Vec::new();
        self.check_positive_limits(&mut violations);
        self.check_timing(&mut violations);
        self.check_pos_window(&mut violations);
        self.check_size_nesting(&mut violations);
        self.check_key_material(&mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConsistencyError { violations })
        }
    }

    fn check_positive_limits(&self, out: &mut Vec<Violation>) {
        for name in ParamName::all() {
            if !name.category().requires_positive() {
                continue;
            }
            if self.value(name).as_u64() == Some(0) {
                out.push(Violation::new(
                    &[name.as_str()],
                    format!("{} limit must be strictly positive", name.category().as_str()),
                ));
            }
        }
    }

    fn check_timing(&self, out: &mut Vec<Violation>) {
        let p = &self.protocol;
        let s = &self.settings;

        if p.thread_count == 0 {
            out.push(Violation::new(
                &[P::ThreadCount.as_str()],
                "must be strictly positive",
            ));
        }
        if p.t0.as_millis() == 0 {
            out.push(Violation::new(&[P::T0.as_str()], "must be strictly positive"));
        }
        if p.periods_per_cycle == 0 {
            out.push(Violation::new(
                &[P::PeriodsPerCycle.as_str()],
                "must be strictly positive",
            ));
        }
        if p.thread_count != 0 && p.t0.as_millis() % u64::from(p.thread_count) != 0 {
            out.push(Violation::new(
                &[P::T0.as_str(), P::ThreadCount.as_str()],
                format!(
                    "T0 ({} ms) must divide evenly into {} per-thread slots",
                    p.t0, p.thread_count
                ),
            ));
        }
        if p.periods_per_cycle.checked_mul(u64::from(p.thread_count)).is_none() {
            out.push(Violation::new(
                &[P::PeriodsPerCycle.as_str(), P::ThreadCount.as_str()],
                "slots per cycle overflow 64 bits",
            ));
        }
        if let Some(end) = p.end_timestamp {
            if end <= p.genesis_timestamp {
                out.push(Violation::new(
                    &[P::EndTimestamp.as_str(), P::GenesisTimestamp.as_str()],
                    format!(
                        "end ({end}) must be strictly after genesis ({})",
                        p.genesis_timestamp
                    ),
                ));
            }
        }

        for (param, ms) in [
            (N::StatsTimespan, s.stats_timespan),
            (N::BlockDbPruneInterval, s.block_db_prune_interval),
            (N::MessageTimeout, s.message_timeout),
            (N::AskPeerListInterval, s.ask_peer_list_interval),
        ] {
            if ms.as_millis() == 0 {
                out.push(Violation::new(&[param.as_str()], "must be strictly positive"));
            }
        }

        if s.force_keep_final_period > s.final_history_length {
            out.push(Violation::new(
                &[N::ForceKeepFinalPeriod.as_str(), N::FinalHistoryLength.as_str()],
                format!(
                    "force-kept final periods ({}) exceed the final history length ({})",
                    s.force_keep_final_period, s.final_history_length
                ),
            ));
        }
    }

    fn check_pos_window(&self, out: &mut Vec<Violation>) {
        let p = &self.protocol;
        match p.pos_lock_cycles.checked_add(p.pos_lookback_cycles) {
            Some(needed) if needed <= p.pos_saved_cycles => {}
            needed => out.push(Violation::new(
                &[
                    P::PosLockCycles.as_str(),
                    P::PosLookbackCycles.as_str(),
                    P::PosSavedCycles.as_str(),
                ],
                match needed {
                    Some(n) => format!(
                        "lock + lookback cycles ({n}) exceed the {} saved cycles",
                        p.pos_saved_cycles
                    ),
                    None => "lock + lookback cycles overflow 64 bits".to_string(),
                },
            )),
        }
        if p.pos_saved_cycles > p.max_bootstrap_pos_cycles {
            out.push(Violation::new(
                &[P::PosSavedCycles.as_str(), P::MaxBootstrapPosCycles.as_str()],
                format!(
                    "bootstrap carries at most {} cycles but {} are saved",
                    p.max_bootstrap_pos_cycles, p.pos_saved_cycles
                ),
            ));
        }
    }

    fn check_size_nesting(&self, out: &mut Vec<Violation>) {
        let p = &self.protocol;
        if p.max_block_size > p.max_message_size {
            out.push(Violation::new(
                &[P::MaxBlockSize.as_str(), P::MaxMessageSize.as_str()],
                "a maximal block must fit in one network message",
            ));
        }
        if p.ledger_part_size_message_bytes > p.max_bootstrap_message_size {
            out.push(Violation::new(
                &[
                    P::LedgerPartSizeMessageBytes.as_str(),
                    P::MaxBootstrapMessageSize.as_str(),
                ],
                "a ledger part must fit in one bootstrap message",
            ));
        }
    }

    fn check_key_material(&self, out: &mut Vec<Violation>) {
        let p = &self.protocol;
        let keys = &p.genesis_keys;
        let genesis_keys = P::GenesisKeys.as_str();
        let key_len = P::PublicKeySizeBytes.as_str();

        if keys.genesis_public_key.len() as u64 != p.public_key_size_bytes {
            out.push(wrong_length(
                &[genesis_keys, key_len],
                "genesis public key",
                &keys.genesis_public_key,
                p.public_key_size_bytes,
            ));
        }
        if keys.initial_stakers.is_empty() {
            out.push(Violation::new(
                &[genesis_keys],
                "initial staker set must not be empty",
            ));
        }
        let mut seen = HashSet::new();
        for (i, staker) in keys.initial_stakers.iter().enumerate() {
            if staker.len() as u64 != p.public_key_size_bytes {
                out.push(wrong_length(
                    &[genesis_keys, key_len],
                    &format!("initial staker {i}"),
                    staker,
                    p.public_key_size_bytes,
                ));
            }
            if !seen.insert(staker.as_slice()) {
                out.push(Violation::new(
                    &[genesis_keys],
                    format!("initial staker {i} is listed twice"),
                ));
            }
        }
        if p.initial_draw_seed.len() as u64 != p.hash_size_bytes {
            out.push(wrong_length(
                &[P::InitialDrawSeed.as_str(), P::HashSizeBytes.as_str()],
                "initial draw seed",
                &p.initial_draw_seed,
                p.hash_size_bytes,
            ));
        }
    }
}

fn wrong_length(params: &[&'static str], what: &str, got: &HexBytes, want: u64) -> Violation {
    Violation::new(
        params,
        format!("{what} is {} bytes, expected {want}", got.len()),
    )
}

#[cfg(test)]
mod tests {
    use crate::name::{NodeParam, ProtocolParam};
    use crate::registry::ParameterSet;
    use crate::time::Millis;
    use crate::value::HexBytes;

    fn production() -> ParameterSet {
        ParameterSet::production()
    }

    #[test]
    fn production_defaults_are_consistent() {
        production().validate_consistency().expect("consistent");
    }

    #[test]
    fn test_defaults_are_consistent() {
        ParameterSet::test_at(Millis::now())
            .validate_consistency()
            .expect("consistent");
    }

    #[test]
    fn zero_limit_is_named() {
        let mut set = production();
        set.protocol.max_block_size = 0;
        let err = set.validate_consistency().unwrap_err();
        assert!(err.mentions("MAX_BLOCK_SIZE"));

        let mut set = production();
        set.settings.node_send_channel_size = 0;
        let err = set.validate_consistency().unwrap_err();
        assert!(err.mentions("NODE_SEND_CHANNEL_SIZE"));
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut set = production();
        set.protocol.periods_per_cycle = 0;
        set.protocol.t0 = Millis::from_millis(16_001);
        set.settings.force_keep_final_period = 500;
        set.protocol.pos_lock_cycles = 10;

        let err = set.validate_consistency().unwrap_err();
        assert!(err.violations.len() >= 4, "{err}");
        for name in [
            "PERIODS_PER_CYCLE",
            "T0",
            "FORCE_KEEP_FINAL_PERIOD",
            "FINAL_HISTORY_LENGTH",
            "POS_LOCK_CYCLES",
            "POS_SAVED_CYCLES",
        ] {
            assert!(err.mentions(name), "{name} missing from {err}");
        }
        let text = err.to_string();
        assert!(text.starts_with(&format!("{} parameter invariant(s) violated", err.violations.len())));
    }

    #[test]
    fn pos_window_must_fit_bootstrap() {
        let mut set = production();
        set.protocol.pos_saved_cycles = 6;
        let err = set.validate_consistency().unwrap_err();
        assert!(err.mentions(ProtocolParam::MaxBootstrapPosCycles.as_str()));

        let mut set = production();
        set.protocol.pos_lock_cycles = u64::MAX;
        let err = set.validate_consistency().unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn slots_per_cycle_must_fit_u64() {
        let mut set = production();
        set.protocol.periods_per_cycle = u64::MAX;
        let err = set.validate_consistency().unwrap_err();
        let overflow = err
            .violations
            .iter()
            .find(|v| v.message.contains("overflow"))
            .expect("overflow violation");
        assert_eq!(overflow.params, ["PERIODS_PER_CYCLE", "THREAD_COUNT"]);

        set.protocol.periods_per_cycle = u64::MAX / u64::from(set.protocol.thread_count);
        set.validate_consistency().expect("largest cycle that fits");
    }

    #[test]
    fn thread_count_zero_does_not_panic() {
        let mut set = production();
        set.protocol.thread_count = 0;
        let err = set.validate_consistency().unwrap_err();
        assert!(err.mentions("THREAD_COUNT"));
    }

    #[test]
    fn end_must_follow_genesis() {
        let mut set = production();
        set.protocol.end_timestamp = Some(set.protocol.genesis_timestamp);
        let err = set.validate_consistency().unwrap_err();
        assert!(err.mentions("END_TIMESTAMP"));

        set.protocol.end_timestamp = set.protocol.genesis_timestamp.checked_add(Millis::from_millis(1));
        set.validate_consistency().expect("end after genesis");
    }

    #[test]
    fn size_ceilings_nest() {
        let mut set = production();
        set.protocol.max_block_size = set.protocol.max_message_size + 1;
        let err = set.validate_consistency().unwrap_err();
        assert!(err.mentions("MAX_MESSAGE_SIZE"));

        let mut set = production();
        set.protocol.ledger_part_size_message_bytes = set.protocol.max_bootstrap_message_size + 1;
        let err = set.validate_consistency().unwrap_err();
        assert!(err.mentions("LEDGER_PART_SIZE_MESSAGE_BYTES"));
    }

    #[test]
    fn key_material_lengths_are_exact() {
        let mut set = production();
        set.protocol.genesis_keys.genesis_public_key = HexBytes(vec![0u8; 31]);
        set.protocol.initial_draw_seed = HexBytes(vec![0u8; 33]);
        let dup = set.protocol.genesis_keys.initial_stakers[0].clone();
        set.protocol.genesis_keys.initial_stakers.push(dup);

        let err = set.validate_consistency().unwrap_err();
        assert_eq!(err.violations.len(), 3, "{err}");
        assert!(err.mentions("GENESIS_KEYS"));
        assert!(err.mentions("INITIAL_DRAW_SEED"));
        assert!(err.to_string().contains("listed twice"));

        let mut set = production();
        set.protocol.genesis_keys.initial_stakers.clear();
        let err = set.validate_consistency().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn zero_node_duration_is_rejected() {
        let mut set = production();
        set.settings.message_timeout = Millis::ZERO;
        let err = set.validate_consistency().unwrap_err();
        assert!(err.mentions(NodeParam::MessageTimeout.as_str()));
    }
}
