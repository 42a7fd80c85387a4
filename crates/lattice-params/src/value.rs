use core::fmt;

use serde::Serialize;

use crate::amount::Amount;
use crate::time::Millis;

/// Semantic category of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SizeLimit,
    CountLimit,
    Timing,
    CryptographicMaterial,
    Monetary,
    DerivedTestOverride,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::SizeLimit => "size-limit",
            Category::CountLimit => "count-limit",
            Category::Timing => "timing",
            Category::CryptographicMaterial => "cryptographic-material",
            Category::Monetary => "monetary",
            Category::DerivedTestOverride => "derived-test-override",
        }
    }

    /// Size and count limits must be strictly positive.
    pub fn requires_positive(self) -> bool {
        matches!(self, Category::SizeLimit | Category::CountLimit)
    }
}

/// Byte string rendered as lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexBytes({})", hex::encode(&self.0))
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl From<&[u8]> for HexBytes {
    fn from(b: &[u8]) -> Self {
        Self(b.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for HexBytes {
    fn from(b: [u8; N]) -> Self {
        Self(b.to_vec())
    }
}

impl TryFrom<String> for HexBytes {
    type Error = hex::FromHexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        hex::decode(s.trim()).map(HexBytes)
    }
}

impl From<HexBytes> for String {
    fn from(b: HexBytes) -> Self {
        hex::encode(b.0)
    }
}

/// Genesis key material: the key that signs genesis blocks and the stakers
/// holding the initial rolls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisKeySet {
    pub genesis_public_key: HexBytes,
    pub initial_stakers: Vec<HexBytes>,
}

impl fmt::Display for GenesisKeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "genesis={}", self.genesis_public_key)?;
        for (i, staker) in self.initial_stakers.iter().enumerate() {
            write!(f, " staker[{i}]={staker}")?;
        }
        Ok(())
    }
}

/// Typed parameter value as returned by a name lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    Integer(u64),
    ByteSize(u64),
    Duration(Millis),
    Timestamp(Millis),
    OptionalTimestamp(Option<Millis>),
    Amount(Amount),
    Bytes(HexBytes),
    GenesisKeys(GenesisKeySet),
}

impl ParamValue {
    /// Numeric magnitude for integer-like values; `None` for the rest.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ParamValue::Integer(v) | ParamValue::ByteSize(v) => Some(*v),
            ParamValue::Duration(ms) | ParamValue::Timestamp(ms) => Some(ms.as_millis()),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Integer(_) => "integer",
            ParamValue::ByteSize(_) => "byte_size",
            ParamValue::Duration(_) => "duration",
            ParamValue::Timestamp(_) => "timestamp",
            ParamValue::OptionalTimestamp(_) => "optional_timestamp",
            ParamValue::Amount(_) => "amount",
            ParamValue::Bytes(_) => "bytes",
            ParamValue::GenesisKeys(_) => "genesis_keys",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(v) => write!(f, "{v}"),
            ParamValue::ByteSize(v) => write!(f, "{v} B"),
            ParamValue::Duration(ms) => write!(f, "{ms} ms"),
            ParamValue::Timestamp(ms) => write!(f, "{ms}"),
            ParamValue::OptionalTimestamp(Some(ms)) => write!(f, "{ms}"),
            ParamValue::OptionalTimestamp(None) => f.write_str("none"),
            ParamValue::Amount(a) => write!(f, "{a}"),
            ParamValue::Bytes(b) => write!(f, "{b}"),
            ParamValue::GenesisKeys(keys) => write!(f, "{keys}"),
        }
    }
}
