use core::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Millisecond quantity: a duration, or an instant counted from the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Millis(u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Wall-clock time. A clock set before the epoch reads as zero.
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Self(ms)
    }

    pub fn checked_add(self, rhs: Millis) -> Option<Millis> {
        self.0.checked_add(rhs.0).map(Millis)
    }

    pub fn checked_sub(self, rhs: Millis) -> Option<Millis> {
        self.0.checked_sub(rhs.0).map(Millis)
    }

    pub fn checked_mul(self, factor: u64) -> Option<Millis> {
        self.0.checked_mul(factor).map(Millis)
    }

    pub fn checked_div(self, divisor: u64) -> Option<Millis> {
        self.0.checked_div(divisor).map(Millis)
    }

    pub fn saturating_add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }

    pub fn to_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Millis {
    fn from(ms: u64) -> Self {
        Self(ms)
    }
}
