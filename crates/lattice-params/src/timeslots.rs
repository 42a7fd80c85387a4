use core::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::time::Millis;
use crate::views::ConsensusConfig;

/// Position of a block in the multi-thread DAG. Ordered by period, then thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Slot {
    pub period: u64,
    pub thread: u8,
}

impl Slot {
    pub const fn new(period: u64, thread: u8) -> Self {
        Self { period, thread }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(period: {}, thread: {})", self.period, self.thread)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("invalid slot clock: {0}")]
    InvalidClock(&'static str),
    #[error("thread {thread} out of range for {thread_count} threads")]
    ThreadOutOfRange { thread: u8, thread_count: u8 },
    #[error("slot arithmetic overflow at {0}")]
    Overflow(Slot),
}

/// Slot timing derived from the consensus view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotClock {
    thread_count: u8,
    t0: Millis,
    genesis: Millis,
    end: Option<Millis>,
    periods_per_cycle: u64,
}

impl SlotClock {
    pub fn new(cfg: &ConsensusConfig) -> Result<Self, SlotError> {
        if cfg.thread_count == 0 {
            return Err(SlotError::InvalidClock("zero threads"));
        }
        if cfg.t0.as_millis() == 0 || cfg.t0.as_millis() % u64::from(cfg.thread_count) != 0 {
            return Err(SlotError::InvalidClock("T0 must be a positive multiple of the thread count"));
        }
        if cfg.periods_per_cycle == 0 {
            return Err(SlotError::InvalidClock("zero periods per cycle"));
        }
        Ok(Self {
            thread_count: cfg.thread_count,
            t0: cfg.t0,
            genesis: cfg.genesis_timestamp,
            end: cfg.end_timestamp,
            periods_per_cycle: cfg.periods_per_cycle,
        })
    }

    fn thread_offset(&self) -> u64 {
        self.t0.as_millis() / u64::from(self.thread_count)
    }

    /// `genesis + period * T0 + thread * T0 / THREAD_COUNT`
    pub fn slot_timestamp(&self, slot: Slot) -> Result<Millis, SlotError> {
        if slot.thread >= self.thread_count {
            return Err(SlotError::ThreadOutOfRange {
                thread: slot.thread,
                thread_count: self.thread_count,
            });
        }
        let offset = Millis::from_millis(self.thread_offset() * u64::from(slot.thread));
        self.t0
            .checked_mul(slot.period)
            .and_then(|base| base.checked_add(offset))
            .and_then(|delta| self.genesis.checked_add(delta))
            .ok_or(SlotError::Overflow(slot))
    }

    pub fn next_slot(&self, slot: Slot) -> Result<Slot, SlotError> {
        if slot.thread >= self.thread_count {
            return Err(SlotError::ThreadOutOfRange {
                thread: slot.thread,
                thread_count: self.thread_count,
            });
        }
        if slot.thread + 1 < self.thread_count {
            return Ok(Slot::new(slot.period, slot.thread + 1));
        }
        let period = slot.period.checked_add(1).ok_or(SlotError::Overflow(slot))?;
        Ok(Slot::new(period, 0))
    }

    /// Most recent slot whose timestamp is at or before `at`.
    ///
    /// `None` before genesis and from `END_TIMESTAMP` on.
    pub fn latest_slot_at(&self, at: Millis) -> Option<Slot> {
        if self.end.is_some_and(|end| at >= end) {
            return None;
        }
        let elapsed = at.checked_sub(self.genesis)?.as_millis();
        let t0 = self.t0.as_millis();
        let period = elapsed / t0;
        let thread = (elapsed % t0) / self.thread_offset();
        Some(Slot::new(period, thread as u8))
    }

    /// Wait until `slot` starts; zero once it has.
    pub fn time_until(&self, slot: Slot, now: Millis) -> Result<Duration, SlotError> {
        let at = self.slot_timestamp(slot)?;
        Ok(at.checked_sub(now).unwrap_or(Millis::ZERO).to_duration())
    }

    pub fn current_slot(&self) -> Option<Slot> {
        self.latest_slot_at(Millis::now())
    }

    pub fn cycle_of(&self, slot: Slot) -> u64 {
        slot.period / self.periods_per_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::{Slot, SlotClock, SlotError};
    use crate::overrides::Overrides;
    use crate::profile::Test;
    use crate::registry::{ParameterSet, Registry};
    use crate::time::Millis;
    use crate::views::ConsensusConfig;

    fn clock(end: Option<u64>) -> SlotClock {
        let mut params = ParameterSet::test_at(Millis::from_millis(0));
        params.protocol.genesis_timestamp = Millis::from_millis(1_000);
        params.protocol.end_timestamp = end.map(Millis::from_millis);
        let registry = Registry::<Test>::from_parameters(params).expect("registry");
        SlotClock::new(&ConsensusConfig::from(&registry)).expect("clock")
    }

    #[test]
    fn slot_timestamps() {
        // 32 threads, T0 = 16000 ms, so 500 ms between threads.
        let c = clock(None);
        assert_eq!(c.slot_timestamp(Slot::new(0, 0)).unwrap(), Millis::from_millis(1_000));
        assert_eq!(c.slot_timestamp(Slot::new(0, 1)).unwrap(), Millis::from_millis(1_500));
        assert_eq!(
            c.slot_timestamp(Slot::new(2, 31)).unwrap(),
            Millis::from_millis(1_000 + 32_000 + 15_500)
        );
        assert!(matches!(
            c.slot_timestamp(Slot::new(0, 32)),
            Err(SlotError::ThreadOutOfRange { thread: 32, thread_count: 32 })
        ));
        assert!(matches!(
            c.slot_timestamp(Slot::new(u64::MAX, 0)),
            Err(SlotError::Overflow(_))
        ));
    }

    #[test]
    fn next_slot_wraps_threads() {
        let c = clock(None);
        assert_eq!(c.next_slot(Slot::new(4, 30)).unwrap(), Slot::new(4, 31));
        assert_eq!(c.next_slot(Slot::new(4, 31)).unwrap(), Slot::new(5, 0));
        assert!(c.next_slot(Slot::new(u64::MAX, 31)).is_err());
    }

    #[test]
    fn latest_slot_bounds() {
        let c = clock(Some(1_000 + 16_000 * 10));
        assert_eq!(c.latest_slot_at(Millis::from_millis(999)), None);
        assert_eq!(c.latest_slot_at(Millis::from_millis(1_000)), Some(Slot::new(0, 0)));
        assert_eq!(c.latest_slot_at(Millis::from_millis(1_499)), Some(Slot::new(0, 0)));
        assert_eq!(
            c.latest_slot_at(Millis::from_millis(1_000 + 16_000 * 3 + 501)),
            Some(Slot::new(3, 1))
        );
        assert_eq!(c.latest_slot_at(Millis::from_millis(1_000 + 16_000 * 10)), None);
    }

    #[test]
    fn latest_slot_inverts_slot_timestamp() {
        let c = clock(None);
        let mut slot = Slot::new(0, 0);
        for _ in 0..100 {
            let ts = c.slot_timestamp(slot).unwrap();
            assert_eq!(c.latest_slot_at(ts), Some(slot));
            slot = c.next_slot(slot).unwrap();
        }
    }

    #[test]
    fn time_until_slot() {
        let c = clock(None);
        let slot = Slot::new(1, 2);
        assert_eq!(
            c.time_until(slot, Millis::from_millis(1_000)).unwrap(),
            std::time::Duration::from_millis(17_000)
        );
        assert_eq!(
            c.time_until(slot, Millis::from_millis(50_000)).unwrap(),
            std::time::Duration::ZERO
        );
    }

    #[test]
    fn cycles() {
        let c = clock(None);
        assert_eq!(c.cycle_of(Slot::new(127, 31)), 0);
        assert_eq!(c.cycle_of(Slot::new(128, 0)), 1);
    }

    #[test]
    fn test_registry_has_no_current_slot_yet() {
        let start = Millis::now();
        let r = Registry::<Test>::as_test_configuration_at(start, &Overrides::new())
            .expect("registry");
        let c = SlotClock::new(&ConsensusConfig::from(&r)).expect("clock");
        assert_eq!(c.latest_slot_at(start), None);
    }

    #[test]
    fn rejects_degenerate_clock() {
        let r = Registry::<Test>::as_test_configuration_at(Millis::ZERO, &Overrides::new())
            .expect("registry");
        let mut cfg = ConsensusConfig::from(&r);
        cfg.thread_count = 0;
        assert!(SlotClock::new(&cfg).is_err());
        cfg.thread_count = 3;
        assert!(SlotClock::new(&cfg).is_err());
    }
}
