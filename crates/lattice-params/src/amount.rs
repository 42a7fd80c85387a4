use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of fractional decimal digits carried by an [`Amount`].
pub const AMOUNT_DECIMAL_PLACES: u32 = 9;
/// Raw units per whole coin.
pub const AMOUNT_DECIMAL_FACTOR: u64 = 1_000_000_000;

/// Fixed-point coin amount with nine decimal places.
///
/// Stored as an integer count of `10^-9` units so arithmetic and encoding are
/// exact. Parsed from and rendered as a decimal string (`"0.3"`, `"100"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(u64);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount `{0}`: expected decimal digits with an optional fractional part")]
    Syntax(String),
    #[error("amount `{0}` has more than 9 fractional digits")]
    TooPrecise(String),
    #[error("amount `{0}` does not fit in 64 bits of raw units")]
    Overflow(String),
}

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u64 {
        self.0
    }

    /// Whole coins, `None` on overflow.
    pub fn from_units(units: u64) -> Option<Self> {
        units.checked_mul(AMOUNT_DECIMAL_FACTOR).map(Amount)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (s, None),
        };
        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || frac_part.is_some_and(|f| !all_digits(f)) {
            return Err(AmountError::Syntax(s.to_string()));
        }
        let frac = frac_part.unwrap_or("");
        if frac.len() > AMOUNT_DECIMAL_PLACES as usize {
            return Err(AmountError::TooPrecise(s.to_string()));
        }

        let overflow = || AmountError::Overflow(s.to_string());
        let units: u64 = int_part.parse().map_err(|_| overflow())?;
        let mut frac_raw: u64 = if frac.is_empty() {
            0
        } else {
            frac.parse().map_err(|_| overflow())?
        };
        for _ in frac.len()..AMOUNT_DECIMAL_PLACES as usize {
            frac_raw *= 10;
        }
        units
            .checked_mul(AMOUNT_DECIMAL_FACTOR)
            .and_then(|raw| raw.checked_add(frac_raw))
            .map(Amount)
            .ok_or_else(overflow)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / AMOUNT_DECIMAL_FACTOR;
        let frac = self.0 % AMOUNT_DECIMAL_FACTOR;
        if frac == 0 {
            return write!(f, "{units}");
        }
        let digits = format!("{frac:09}");
        write!(f, "{units}.{}", digits.trim_end_matches('0'))
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Amount> for String {
    fn from(a: Amount) -> Self {
        a.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Amount, AmountError};

    #[test]
    fn parse_and_display() {
        let cases: &[(&str, u64, &str)] = &[
            ("0", 0, "0"),
            ("100", 100_000_000_000, "100"),
            ("0.3", 300_000_000, "0.3"),
            ("0.0001", 100_000, "0.0001"),
            ("1.000000001", 1_000_000_001, "1.000000001"),
            ("12.50", 12_500_000_000, "12.5"),
            ("007", 7_000_000_000, "7"),
        ];
        for (input, raw, shown) in cases {
            let a: Amount = input.parse().expect(input);
            assert_eq!(a.to_raw(), *raw, "{input}");
            assert_eq!(a.to_string(), *shown, "{input}");
        }
    }

    #[test]
    fn rejects_bad_syntax() {
        assert_eq!("".parse::<Amount>(), Err(AmountError::Empty));
        for bad in ["-1", "1.", ".5", "1.2.3", "1e9", " 1", "0x10", "1,5"] {
            assert!(
                matches!(bad.parse::<Amount>(), Err(AmountError::Syntax(_))),
                "{bad}"
            );
        }
        assert!(matches!(
            "0.0000000001".parse::<Amount>(),
            Err(AmountError::TooPrecise(_))
        ));
    }

    #[test]
    fn rejects_overflow() {
        // u64::MAX raw units is ~18446744073.7 coins.
        assert!("18446744073".parse::<Amount>().is_ok());
        assert!(matches!(
            "18446744074".parse::<Amount>(),
            Err(AmountError::Overflow(_))
        ));
        assert!(matches!(
            "99999999999999999999".parse::<Amount>(),
            Err(AmountError::Overflow(_))
        ));
        assert_eq!(Amount::from_units(u64::MAX), None);
    }

    #[test]
    fn serde_uses_decimal_strings() {
        let a: Amount = "0.3".parse().expect("parse");
        let json = serde_json::to_string(&a).expect("json");
        assert_eq!(json, "\"0.3\"");
        let back: Amount = serde_json::from_str(&json).expect("back");
        assert_eq!(back, a);
        assert!(serde_json::from_str::<Amount>("\"abc\"").is_err());
    }
}
